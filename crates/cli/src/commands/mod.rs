//! CLI command implementations.

pub mod run;
pub mod tiers;

use std::path::Path;

use tokio::io::{AsyncReadExt, AsyncWriteExt};

/// Read a whole document from `path`, or from stdin when `path` is `None` or `-`.
async fn read_document(path: Option<&Path>) -> std::io::Result<String> {
    match path {
        Some(path) if path != Path::new("-") => tokio::fs::read_to_string(path).await,
        _ => {
            let mut buf = String::new();
            tokio::io::stdin().read_to_string(&mut buf).await?;
            Ok(buf)
        }
    }
}

/// Write a document followed by a newline to stdout.
async fn write_document(document: &str) -> std::io::Result<()> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(document.as_bytes()).await?;
    stdout.write_all(b"\n").await?;
    stdout.flush().await
}
