use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus { url: String, status: u16 },

    #[error("Invalid response body: {0}")]
    InvalidBody(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Title must not be empty")]
    EmptyTitle,

    #[error("Description must not be empty")]
    EmptyDescription,

    #[error("Time must look like HH:MM, got {0:?}")]
    InvalidTime(String),

    #[error("Cost must start with an integer, got {0:?}")]
    InvalidCost(String),
}

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("Invalid form: {0}")]
    Form(#[from] FormError),

    #[error("Failed to read image file {}: {source}", path.display())]
    ImageRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid image: {0}")]
    InvalidImage(String),

    #[error(transparent)]
    Api(#[from] ApiError),
}
