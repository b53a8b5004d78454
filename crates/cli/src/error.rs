use thiserror::Error;

/// A rejected command. The Display text is the protocol's error line, minus
/// the leading `error: `.
#[derive(Error, Debug, PartialEq)]
pub enum CommandError {
    #[error("invalid command")]
    InvalidCommand,
    #[error("command with wrong number of arguments")]
    WrongArity,
    #[error("undefined polygon identifier")]
    Undefined,
    #[error("command with wrong type of arguments")]
    WrongType,
    #[error("empty polygon")]
    EmptyPolygon,
    /// File could not be read, parsed or written.
    #[error("{0}")]
    Io(String),
}

impl From<anyhow::Error> for CommandError {
    fn from(e: anyhow::Error) -> Self {
        CommandError::Io(format!("{e:#}"))
    }
}
