//! Splits Core Library
//!
//! This library provides the data model behind the "advanced stopwatch"
//! timeline annotation: an ordered collection of time sections over a
//! monotonic tick axis, the positional index query that distinguishes
//! "inside a section" from "in a gap", the single-trigger commands built
//! on that query, and a binary container format for persistence.

pub mod column;
pub mod container;
pub mod index;
pub mod manager;
pub mod section;
pub mod sequence;

pub use column::{Column, ColumnSet};
pub use index::SectionIndex;
pub use manager::{section_index, SectionManager};
pub use section::{TimeSection, Timestamp, OPEN_END};
pub use sequence::ComboOutcome;

/// Result type for splits-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for splits-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid magic bytes, expected 'SPL\\0'")]
    InvalidMagic,

    #[error("Unsupported version: {0}")]
    UnsupportedVersion(u16),

    #[error("Invalid text field: {0}")]
    InvalidText(#[from] std::string::FromUtf8Error),
}
