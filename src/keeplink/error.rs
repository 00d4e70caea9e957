use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeeplinkError {
    /// Name or URL was empty after trimming.
    #[error("Both fields are required.")]
    MissingField,

    /// The normalized URL does not parse as an absolute URL with a host.
    #[error("Please enter a valid URL.")]
    InvalidUrl(String),

    /// A bookmark with the same name and URL is already stored.
    #[error("This bookmark already exists.")]
    Duplicate { name: String, url: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, KeeplinkError>;
