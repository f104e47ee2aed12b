// src/error.rs
use thiserror::Error;

/// Errors raised while compiling a filter expression.
#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Regular expression filter must start with a delimiter")]
    MissingDelimiter,

    #[error("Regular expression filter has no closing '{delimiter}'")]
    UnterminatedPattern { delimiter: char },

    #[error("Unknown regular expression modifier: '{0}'")]
    UnknownModifier(char),

    #[error("Invalid regular expression: {0}")]
    InvalidPattern(#[from] regex::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Filter error: {0}")]
    Filter(#[from] FilterError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Malformed settings: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
