// LookalikeHandle: owns a confusables table and the default options
//
// The handle is the single integration point for front ends: build (or
// adopt) a table once, tune options through setters, then compile words and
// produce listings through `&self`. The table is never mutated after
// construction, so a handle can be shared across threads behind an `Arc`.

use std::io::{self, Write};

use lookalike_core::enums::{Sampling, Strategy, UnmappedPolicy};
use lookalike_table::{ConfusableTable, report};

use crate::compiler;
use crate::options::CompileOptions;
use crate::product::CartesianProduct;

/// Top-level handle that owns the table and compile options.
pub struct LookalikeHandle {
    table: ConfusableTable,
    options: CompileOptions,
}

impl LookalikeHandle {
    /// Build the full confusables table and wrap it with default options.
    pub fn new() -> Self {
        Self::from_table(ConfusableTable::build())
    }

    /// Wrap an existing table with default options.
    pub fn from_table(table: ConfusableTable) -> Self {
        Self {
            table,
            options: CompileOptions::default(),
        }
    }

    pub fn table(&self) -> &ConfusableTable {
        &self.table
    }

    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    // =========================================================================
    // Compilation
    // =========================================================================

    /// Compile `word` with the handle's options, overriding the strategy and
    /// the cap.
    ///
    /// `greedy` selects longest-match chunking; otherwise every character is
    /// substituted on its own. `max_candidates = None` returns every
    /// candidate up to the uncapped ceiling.
    pub fn compile(&self, word: &str, greedy: bool, max_candidates: Option<usize>) -> Vec<String> {
        let options = CompileOptions {
            strategy: Strategy::from_greedy(greedy),
            max_candidates,
            ..self.options.clone()
        };
        compiler::compile(&self.table, word, &options)
    }

    /// Compile `word` with the handle's options as they stand.
    pub fn compile_default(&self, word: &str) -> Vec<String> {
        compiler::compile(&self.table, word, &self.options)
    }

    /// The lazy candidate sequence for `word` under the handle's options.
    pub fn candidates(&self, word: &str) -> Option<CartesianProduct> {
        compiler::candidates(&self.table, word, &self.options)
    }

    /// Number of distinct combinations for `word`, `None` if rejected or too
    /// large to count.
    pub fn possible_count(&self, word: &str) -> Option<usize> {
        self.candidates(word)?.total()
    }

    // =========================================================================
    // Listings
    // =========================================================================

    pub fn write_full_table(&self, out: &mut impl Write) -> io::Result<()> {
        report::write_full_table(out, &self.table)
    }

    pub fn write_lookup_table(&self, out: &mut impl Write) -> io::Result<()> {
        report::write_lookup_table(out, &self.table)
    }

    pub fn write_useful_slices(&self, out: &mut impl Write, word: &str) -> io::Result<()> {
        report::write_useful_slices(out, &self.table, word)
    }

    // =========================================================================
    // Option setters
    // =========================================================================

    /// Set whether to use greedy multi-character chunking.
    pub fn set_greedy(&mut self, value: bool) {
        self.options.strategy = Strategy::from_greedy(value);
    }

    /// Set the candidate cap (`None` for all candidates).
    pub fn set_max_candidates(&mut self, value: Option<usize>) {
        self.options.max_candidates = value;
    }

    /// Set whether capped results are shuffled.
    pub fn set_shuffle(&mut self, value: bool) {
        self.options.sampling = if value {
            Sampling::Shuffled
        } else {
            Sampling::Ordered
        };
    }

    /// Set whether per-character mode rejects words with unmapped characters.
    pub fn set_reject_unmapped(&mut self, value: bool) {
        self.options.unmapped = if value {
            UnmappedPolicy::Reject
        } else {
            UnmappedPolicy::Literal
        };
    }

    /// Set whether substitutable chunks may keep their literal text.
    pub fn set_include_literal(&mut self, value: bool) {
        self.options.include_literal = value;
    }

    /// Set the hard limit for uncapped requests.
    pub fn set_uncapped_ceiling(&mut self, value: usize) {
        self.options.uncapped_ceiling = value;
    }

    /// Seed the shuffle for reproducible sampling.
    pub fn set_seed(&mut self, value: Option<u64>) {
        self.options.seed = value;
    }
}

impl Default for LookalikeHandle {
    fn default() -> Self {
        Self::new()
    }
}
