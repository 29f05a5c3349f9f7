use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    // Serialization
    #[error("value has no representation in the wire format: {0}")]
    Encoding(String),
    #[error("body is not well-formed for the wire format: {0}")]
    Decoding(String),

    // Opaque pass-through for transport implementations
    #[error(transparent)]
    Transport(Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T> = std::result::Result<T, Error>;
