#[tokio::main]
async fn main() -> anyhow::Result<()> {
    vocab_cli::run().await
}
