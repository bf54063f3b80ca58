//! Error Types
//!
//! One enum per failure kind the dashboard distinguishes.

use thiserror::Error;

/// Catalogue load failed. Any single failure fails the whole batch.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Rejected login attempt
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    #[error("Usuario o contraseña incorrectos")]
    InvalidCredentials,
}

/// Rejected coordinate edit. Nothing is mutated when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field} no es un número: «{input}»")]
    NotANumber { field: &'static str, input: String },

    #[error("{field} fuera de rango: {value}")]
    OutOfRange { field: &'static str, value: f64 },

    #[error("No existe el registro #{0}")]
    UnknownRecord(u32),
}

/// Local persistence failure
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,

    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("snapshot serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
