use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("Products file not found: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    #[error("Product not found: {0}")]
    ProductNotFound(String),

    #[error("Invalid {field}: {value} (expected one of 1, 2, 3, 4, 5)")]
    InvalidSlot { field: &'static str, value: String },

    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("Invalid product id: {0}")]
    InvalidId(String),

    #[error("Product id already in use: {0}")]
    DuplicateId(String),

    #[error("Input closed before the command finished")]
    InputClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, InventoryError>;
