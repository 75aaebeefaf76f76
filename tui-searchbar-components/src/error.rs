//! Error types for the search bar

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchBarError {
    /// An imperative operation ran while no input primitive was attached
    #[error("cannot {operation}: search bar is not mounted")]
    NotMounted { operation: &'static str },

    #[error("invalid search bar configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SearchBarError>;
