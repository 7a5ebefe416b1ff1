use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Missing required environment variable: {name}")]
    MissingEnv { name: &'static str },

    #[error("Invalid bind address {value}: {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("Failed to initialize logger: {message}")]
    LoggerInit { message: String },

    #[error("Store client error: {0}")]
    Store(#[from] ht_store::StoreError),
}

pub type Result<T> = std::result::Result<T, ServerError>;
