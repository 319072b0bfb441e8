pub mod backend;
pub mod commands;
pub mod config;
pub mod store;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vocab_core::ReviewPolicy;

use crate::backend::{MemoryBackend, RestBackend, WordBackend};
use crate::config::BackendConfig;
use crate::store::VocabularyStore;

#[derive(Parser)]
#[command(name = "vocab", about = "Vocabulary trainer CLI", version)]
struct Cli {
    /// Run against an empty in-memory backend instead of the hosted service
    #[arg(long, global = true)]
    offline: bool,

    /// Mastery points gained/lost per review
    #[arg(long, global = true, default_value_t = 10)]
    mastery_step: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List all words
    List {
        /// Only words carrying this tag
        #[arg(long)]
        tag: Option<String>,
    },

    /// Add a word
    Add {
        term: String,
        definition: String,
        #[arg(long, default_value = "")]
        phonetic: String,
        /// May be given multiple times
        #[arg(long = "tag")]
        tags: Vec<String>,
    },

    /// Edit a word's fields
    Edit {
        term: String,
        #[arg(long)]
        definition: Option<String>,
        #[arg(long)]
        phonetic: Option<String>,
        /// Replace the tag set; may be given multiple times
        #[arg(long = "tag")]
        tags: Vec<String>,
    },

    /// Delete a word by term
    Remove { term: String },

    /// Delete the whole vocabulary
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Search terms and definitions
    Search {
        query: String,
        #[arg(long)]
        tag: Option<String>,
    },

    /// Show one word in full
    Show { term: String },

    /// List tags in use
    Tags,

    /// Vocabulary statistics
    Stats,

    /// Run a practice session
    Practice {
        /// flashcard | spelling | matching
        mode: String,
        /// Words per session
        #[arg(long, default_value_t = 10)]
        batch: usize,
    },

    /// Walk the guided learning steps for one word
    Learn { term: String },
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let backend: Box<dyn WordBackend> = if cli.offline {
        Box::new(MemoryBackend::signed_in())
    } else {
        let config = BackendConfig::from_env()?;
        Box::new(RestBackend::new(
            config.base_url,
            config.api_key,
            config.access_token,
        ))
    };

    let mut store = VocabularyStore::connect(backend)
        .await?
        .with_policy(ReviewPolicy {
            mastery_step: cli.mastery_step,
        });

    match cli.command {
        Command::List { tag } => commands::words::list(&store, tag.as_deref()),
        Command::Add {
            term,
            definition,
            phonetic,
            tags,
        } => commands::words::add(&mut store, term, definition, phonetic, tags).await?,
        Command::Edit {
            term,
            definition,
            phonetic,
            tags,
        } => commands::words::edit(&mut store, &term, definition, phonetic, tags).await?,
        Command::Remove { term } => commands::words::remove(&mut store, &term).await?,
        Command::Clear { yes } => commands::words::clear(&mut store, yes).await?,
        Command::Search { query, tag } => {
            commands::words::search(&store, &query, tag.as_deref())
        }
        Command::Show { term } => commands::words::show(&store, &term),
        Command::Tags => commands::words::tags(&store),
        Command::Stats => commands::stats::show(&store),
        Command::Practice { mode, batch } => {
            commands::practice::run(&mut store, &mode, batch).await?
        }
        Command::Learn { term } => commands::learn::run(&store, &term)?,
    }

    Ok(())
}
