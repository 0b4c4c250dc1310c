// Code-point scan that populates a ConfusableTable
//
// The scan visits every code point in the configured range exactly once, in
// ascending order, so variant lists come out sorted by code point. Surrogates
// and any code point that does not fold to ASCII letters are skipped without
// comment.

use std::ops::RangeInclusive;
use std::time::Instant;

use lookalike_core::character::{FIRST_NON_ASCII, letter_expansion};
use tracing::debug;

use crate::TableError;
use crate::table::ConfusableTable;

/// Highest Unicode scalar value.
const LAST_CODE_POINT: u32 = char::MAX as u32;

/// Configures and runs the code-point scan.
#[derive(Debug, Clone)]
pub struct TableBuilder {
    range: RangeInclusive<u32>,
}

impl TableBuilder {
    /// A builder covering every non-ASCII code point.
    pub fn new() -> Self {
        Self {
            range: FIRST_NON_ASCII..=LAST_CODE_POINT,
        }
    }

    /// Restrict the scan to a sub-range of the non-ASCII code points.
    pub fn with_range(mut self, range: RangeInclusive<u32>) -> Result<Self, TableError> {
        let (start, end) = (*range.start(), *range.end());
        if start < FIRST_NON_ASCII || end > LAST_CODE_POINT || start > end {
            return Err(TableError::InvalidRange { start, end });
        }
        self.range = range;
        Ok(self)
    }

    pub fn range(&self) -> &RangeInclusive<u32> {
        &self.range
    }

    /// Run the scan.
    pub fn build(&self) -> ConfusableTable {
        let started = Instant::now();
        let mut table = ConfusableTable::default();
        let mut scanned = 0usize;

        for c in self.range.clone().filter_map(char::from_u32) {
            scanned += 1;
            if let Some(norm) = letter_expansion(c) {
                table.insert(c, norm);
            }
        }

        debug!(
            start = *self.range.start(),
            end = *self.range.end(),
            scanned,
            entries = table.len(),
            keys = table.key_count(),
            max_key_len = table.max_key_len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "built confusables table"
        );
        table
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}
