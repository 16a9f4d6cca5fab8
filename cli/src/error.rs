use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(clap::Error),

    #[error("PATH environment variable not set.")]
    PathNotSet,

    #[error("{command} not found in PATH")]
    NotFound { command: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
