//! Compile ASCII words into Unicode look-alike spellings.
//!
//! A word is cut into chunks (greedily over multi-character keys, or one
//! character at a time), each chunk gets a list of look-alike renderings from
//! the [`ConfusableTable`](lookalike_table::ConfusableTable), and candidates
//! are drawn lazily from the Cartesian product of those lists.
//!
//! # Architecture
//!
//! - [`chunk`] -- greedy and per-character decomposition
//! - [`product`] -- lazy, restartable Cartesian product iterator
//! - [`options`] -- [`CompileOptions`] and sampling constants
//! - [`sampling`] -- oversample-then-shuffle truncation
//! - [`compiler`] -- the compile entry points
//! - [`handle`] -- [`LookalikeHandle`], owning a table and default options

pub mod chunk;
pub mod compiler;
pub mod handle;
pub mod options;
pub mod product;
pub mod sampling;

pub use compiler::{compile, greedy_compile, strict_compile};
pub use handle::LookalikeHandle;
pub use options::CompileOptions;
pub use product::CartesianProduct;
