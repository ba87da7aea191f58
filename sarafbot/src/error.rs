use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unable to fetch rates: {0}")]
    Source(String),

    #[error("unable to deliver message: {0}")]
    Delivery(String),

    #[error("unable to access state file '{}': {source}", .path.display())]
    Storage {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("unable to decode state file '{}': {source}", .path.display())]
    StateFormat {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Source(err.to_string())
    }
}

impl From<frankenstein::Error> for Error {
    fn from(err: frankenstein::Error) -> Self {
        Error::Delivery(err.to_string())
    }
}
