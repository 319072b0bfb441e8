//! CLI subcommand implementations.

pub mod learn;
pub mod practice;
pub mod stats;
pub mod words;

use std::io::{self, BufRead, Write};

/// Print a prompt and read one trimmed line. `None` means EOF, which the
/// interactive loops treat as abandoning the session.
pub(crate) fn read_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Report a persistence failure that should not abort a session: once, no
/// retry, local progress continues.
pub(crate) fn report_writeback_failure(failure: &crate::store::StoreError) {
    eprintln!("note: could not save this review ({failure}); continuing with local progress");
}
