use thiserror::Error;

#[derive(Error, Debug)]
pub enum LauncherError {
    #[error("Command execution failed: {0}")]
    CommandFailed(String),

    #[error("Failed to load .env file: {0}")]
    EnvFile(#[from] dotenvy::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LauncherError>;
