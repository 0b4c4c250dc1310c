//! Shared building blocks for the lookalike workspace.
//!
//! - [`character`] -- ASCII-letter classification, NFKC folding, display names
//! - [`enums`] -- option enums shared by the compiler and the CLI tools

pub mod character;
pub mod enums;
