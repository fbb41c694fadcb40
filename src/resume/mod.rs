mod generator;
mod prompt;

pub use generator::*;
pub use prompt::*;
