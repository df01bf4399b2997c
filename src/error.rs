use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DescribeError {
    #[error("No OpenAI API key has been provided")]
    MissingCredential,

    #[error("API key contains characters that cannot be sent in a header")]
    InvalidCredential,

    #[error("Unsupported image type: {0} (expected PNG, JPG or JPEG)")]
    UnsupportedImage(String),

    #[error("Failed to open image file: {}", path.display())]
    ReadImage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Request to the description service failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Description service returned {status}: {body}")]
    Remote {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Malformed response from the description service: {0}")]
    MalformedResponse(String),

    #[error("{}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
