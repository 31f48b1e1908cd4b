//! Tracing subscriber setup
//!
//! The terminal belongs to the UI, so log output goes to a file.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber, appending to `log_file_path`.
///
/// Filtering follows `RUST_LOG` and defaults to `info`.
pub fn init(log_file_path: &Path) -> std::io::Result<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;

    build_subscriber(log_file).init();
    Ok(())
}

/// Build a subscriber that writes formatted events to `log_file`
pub fn build_subscriber(log_file: File) -> impl tracing::Subscriber + Send + Sync {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer().with_ansi(false).with_writer(Arc::new(log_file));

    tracing_subscriber::registry().with(fmt_layer).with(env_filter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_subscriber_writes_to_file() {
        let log_file = NamedTempFile::new().unwrap();
        let subscriber = build_subscriber(log_file.reopen().unwrap());

        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!(date = "2024-06-01", "journal file is corrupt");
        });

        let contents = std::fs::read_to_string(log_file.path()).unwrap();
        assert!(contents.contains("WARN"));
        assert!(contents.contains("journal file is corrupt"));
        assert!(contents.contains("2024-06-01"));
    }
}
