use thiserror::Error;

#[derive(Error, Debug)]
pub enum PricingError {
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("Invalid config: {message}")]
    InvalidConfig { message: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
}

pub type Result<T> = std::result::Result<T, PricingError>;
