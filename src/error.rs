use thiserror::Error;

/// Problems with a line typed at the prompt. Reported back to the user, never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command: {0} (type `help` for a list)")]
    Unknown(String),
    #[error("Command `{0}` takes no argument")]
    UnexpectedArgument(&'static str),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Input task failed: {0}")]
    Input(#[from] tokio::task::JoinError),
}
