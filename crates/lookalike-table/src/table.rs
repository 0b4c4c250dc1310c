// Immutable confusables table
//
// Holds the two derived mappings:
// - fancy: look-alike character -> ASCII letter run it normalizes to
// - lookup: ASCII letter run -> look-alikes in ascending code-point order
//
// Both are append-only while the table is assembled and read-only once it
// is handed out.

use hashbrown::HashMap;
use lookalike_core::character::{FIRST_NON_ASCII, is_letter_expansion};

use crate::TableError;
use crate::builder::TableBuilder;

/// Mapping between Unicode look-alikes and the ASCII letter runs they
/// normalize to.
#[derive(Debug, Clone, Default)]
pub struct ConfusableTable {
    fancy: HashMap<char, String>,
    lookup: HashMap<String, Vec<char>>,
    /// Longest key in `lookup`, in characters.
    max_key_len: usize,
}

impl ConfusableTable {
    /// Scan the full non-ASCII code-point range and build the table.
    pub fn build() -> Self {
        TableBuilder::new().build()
    }

    /// Build a table from explicit `(look-alike, normalization)` pairs.
    ///
    /// Entries are validated against the same rules the scan applies, but the
    /// normalization is taken as given rather than recomputed. Variant lists
    /// keep the order in which entries are supplied.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (char, S)>,
        S: Into<String>,
    {
        let mut table = Self::default();
        for (fancy, normalized) in entries {
            let normalized = normalized.into();
            if (fancy as u32) < FIRST_NON_ASCII {
                return Err(TableError::AsciiKey(fancy));
            }
            if !is_letter_expansion(&normalized) {
                return Err(TableError::InvalidNormalization { fancy, normalized });
            }
            if table.fancy.contains_key(&fancy) {
                return Err(TableError::DuplicateKey(fancy));
            }
            table.insert(fancy, normalized);
        }
        Ok(table)
    }

    /// Record one look-alike. Callers guarantee the entry is valid and new.
    pub(crate) fn insert(&mut self, fancy: char, normalized: String) {
        self.max_key_len = self.max_key_len.max(normalized.chars().count());
        self.lookup
            .entry(normalized.clone())
            .or_default()
            .push(fancy);
        self.fancy.insert(fancy, normalized);
    }

    /// The ASCII letter run `c` normalizes to, if `c` is a look-alike.
    pub fn fancy(&self, c: char) -> Option<&str> {
        self.fancy.get(&c).map(String::as_str)
    }

    /// Look-alikes for an ASCII letter run, in ascending code-point order.
    ///
    /// Returns `None` for runs with no look-alike; a returned slice is never
    /// empty.
    pub fn variants(&self, key: &str) -> Option<&[char]> {
        self.lookup.get(key).map(Vec::as_slice)
    }

    /// Look-alikes for a single character.
    pub fn char_variants(&self, c: char) -> Option<&[char]> {
        let mut buf = [0u8; 4];
        self.variants(c.encode_utf8(&mut buf))
    }

    /// Whether `key` has at least one look-alike.
    pub fn contains_key(&self, key: &str) -> bool {
        self.lookup.contains_key(key)
    }

    /// Number of look-alike characters.
    pub fn len(&self) -> usize {
        self.fancy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fancy.is_empty()
    }

    /// Number of distinct ASCII letter runs with look-alikes.
    pub fn key_count(&self) -> usize {
        self.lookup.len()
    }

    /// Length in characters of the longest letter run with a look-alike.
    ///
    /// No substring longer than this can be a key, so greedy matching never
    /// needs to try one.
    pub fn max_key_len(&self) -> usize {
        self.max_key_len
    }

    /// Iterate over `(look-alike, normalization)` pairs in unspecified order.
    pub fn fancy_entries(&self) -> impl Iterator<Item = (char, &str)> {
        self.fancy.iter().map(|(&c, n)| (c, n.as_str()))
    }

    /// Iterate over `(letter run, look-alikes)` pairs in unspecified order.
    pub fn lookup_entries(&self) -> impl Iterator<Item = (&str, &[char])> {
        self.lookup.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}
