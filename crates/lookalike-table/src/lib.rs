//! Confusables table for ASCII letters.
//!
//! Scans the Unicode code-point space once and records every character whose
//! NFKC form is a non-empty run of ASCII letters, together with the inverse
//! index from letter runs to their look-alikes.
//!
//! # Architecture
//!
//! - [`builder`] -- code-point scan and range configuration
//! - [`table`] -- the immutable [`ConfusableTable`] and its accessors
//! - [`report`] -- ordered listings for inspection tools

pub mod builder;
pub mod report;
pub mod table;

pub use builder::TableBuilder;
pub use table::ConfusableTable;

/// Error type for table construction from explicit input.
///
/// The full scan never fails; these only arise from caller-supplied ranges
/// or entries.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TableError {
    #[error("invalid scan range U+{start:04X}..=U+{end:04X}: must lie within U+0080..=U+10FFFF")]
    InvalidRange { start: u32, end: u32 },
    #[error("ASCII character {0:?} cannot be a look-alike")]
    AsciiKey(char),
    #[error("normalization {normalized:?} of {fancy:?} is not a run of ASCII letters")]
    InvalidNormalization { fancy: char, normalized: String },
    #[error("duplicate entry for {0:?}")]
    DuplicateKey(char),
}
