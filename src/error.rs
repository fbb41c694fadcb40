use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("LLM error: {0}")]
    Llm(String),

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
}

/// Why a resume could not be produced.
///
/// The `Display` output is the exact text shown to the user on the results
/// page, so handlers render these with `to_string()`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("ERROR: AI Chain not initialized. Check API Key.")]
    NotInitialized,

    #[error("Please provide a description.")]
    EmptyDescription,

    #[error("An API Error occurred: {0}")]
    Upstream(String),
}

impl From<Error> for GenerationError {
    fn from(err: Error) -> Self {
        Self::Upstream(err.to_string())
    }
}
