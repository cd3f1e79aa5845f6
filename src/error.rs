use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Invoker error: {0}")]
    Invoker(String),

    #[error("Invalid input for {operation}: {reason}")]
    InvalidInput {
        operation: &'static str,
        reason: String,
    },

    #[error("Malformed output from {operation}: {reason}")]
    MalformedOutput {
        operation: &'static str,
        reason: String,
    },

    #[error("No output received from {operation}")]
    MissingOutput { operation: &'static str },

    #[error("{operation} timed out after {after_secs}s")]
    Timeout {
        operation: &'static str,
        after_secs: u64,
    },

    #[error("Speech error: {0}")]
    Speech(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    #[error("OpenAI error: {0}")]
    OpenAi(#[from] async_openai::error::OpenAIError),

}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn llm(msg: impl Into<String>) -> Self {
        Self::Llm(msg.into())
    }

    pub fn invoker(msg: impl Into<String>) -> Self {
        Self::Invoker(msg.into())
    }

    pub fn speech(msg: impl Into<String>) -> Self {
        Self::Speech(msg.into())
    }

    /// True when the failure was detected locally, before any external call.
    pub fn is_local(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}
