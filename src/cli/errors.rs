use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to load config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: mipgen::Error,
    },

    #[error(transparent)]
    Icon(#[from] mipgen::Error),
}
