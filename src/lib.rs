pub mod config;
pub mod error;
pub mod llm;
pub mod resume;
pub mod server;

pub use error::{Error, GenerationError, Result};
