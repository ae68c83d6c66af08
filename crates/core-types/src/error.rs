use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid input for {0}: {1}")]
    InvalidInput(String, String),

    #[error("Unknown {kind} option '{value}'")]
    UnknownOption { kind: &'static str, value: String },

    #[error("Unsupported screenshot '{0}': only PNG and JPEG files are accepted")]
    UnsupportedAttachment(String),
}
