// src/utils/error.rs
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error), // Automatically convert reqwest errors

    #[error("API returned {status}: {message}")]
    Api {
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("Failed to parse API response: {0}")]
    Parse(String),
}

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Security '{0}' was not found in the listings directory")]
    NotFound(String),

    #[error("Listings CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Environment variable '{0}' is not set")]
    MissingCredential(String),

    #[error("Token refresh response did not contain 'idToken' ({0})")]
    MissingIdToken(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Financial API interaction failed: {0}")]
    Api(#[from] ApiError),

    #[error("Security lookup failed: {0}")]
    Lookup(#[from] LookupError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
