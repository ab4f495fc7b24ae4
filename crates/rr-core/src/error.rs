//! Error types for the rarity roller core.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for core operations.
pub type RrResult<T> = Result<T, RrError>;

/// Errors that can occur while managing items, settings, or draws.
#[derive(Debug, Error)]
pub enum RrError {
    /// The configuration file exists but does not hold a valid document.
    #[error("corrupt configuration in {}: {message}", path.display())]
    CorruptConfig {
        /// Location of the offending file.
        path: PathBuf,
        /// What the parser or validator complained about.
        message: String,
    },

    /// Reading or writing the configuration file failed.
    #[error("configuration i/o: {0}")]
    Io(#[from] std::io::Error),

    /// An item has an empty name or a zero weight.
    #[error("invalid item: {0}")]
    InvalidItem(String),

    /// A catalog position does not exist.
    #[error("index {index} out of range (catalog has {len} items)")]
    IndexOutOfRange {
        /// The requested position.
        index: usize,
        /// Number of items in the catalog.
        len: usize,
    },

    /// A roll setting is outside its permitted range.
    #[error("invalid setting: {0}")]
    InvalidSetting(String),

    /// The weighted draw was given nothing to choose from.
    #[error("nothing to draw from: no entries with positive weight")]
    EmptyCatalog,

    /// A draw was requested while the catalog is empty.
    #[error("no items available to generate")]
    NoItems,
}
