// Word decomposition into substitutable chunks
//
// Two strategies:
// - greedy: longest key first at each position, literal single character
//   when nothing matches
// - per-character: every character is its own chunk
//
// A chunk borrows its variant list from the table; chunks with an empty
// list are literal-only.

use lookalike_table::ConfusableTable;
use tracing::trace;

/// A contiguous piece of the input word and the look-alikes that can stand
/// in for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk<'t> {
    /// The chunk as it appears in the word.
    pub text: String,
    /// Look-alikes for `text`, empty when it has none.
    pub variants: &'t [char],
}

impl<'t> Chunk<'t> {
    fn literal(c: char) -> Self {
        Self {
            text: c.to_string(),
            variants: &[],
        }
    }

    /// Whether at least one look-alike exists for this chunk.
    pub fn is_substitutable(&self) -> bool {
        !self.variants.is_empty()
    }

    /// The renderings this chunk can take in a candidate.
    ///
    /// Look-alikes come first in code-point order. The literal text follows
    /// them when `include_literal` is set, and is the only option for a
    /// chunk without look-alikes.
    pub fn options(&self, include_literal: bool) -> Vec<String> {
        let mut options: Vec<String> = self.variants.iter().map(char::to_string).collect();
        if include_literal || options.is_empty() {
            options.push(self.text.clone());
        }
        options
    }
}

/// Cut `word` into chunks, taking the longest matching key at each position.
///
/// Greedy rather than optimal: an early long match may hide a cut that
/// would expose more substitutions further on.
pub fn greedy_chunks<'t>(table: &'t ConfusableTable, word: &str) -> Vec<Chunk<'t>> {
    let chars: Vec<char> = word.chars().collect();
    let n = chars.len();
    let mut chunks = Vec::new();
    let mut i = 0;

    while i < n {
        let longest = (n - i).min(table.max_key_len());
        let hit = (1..=longest).rev().find_map(|len| {
            let text: String = chars[i..i + len].iter().collect();
            table.variants(&text).map(|variants| (len, Chunk { text, variants }))
        });

        match hit {
            Some((len, chunk)) => {
                trace!(position = i, chunk = %chunk.text, variants = chunk.variants.len(), "matched chunk");
                chunks.push(chunk);
                i += len;
            }
            None => {
                chunks.push(Chunk::literal(chars[i]));
                i += 1;
            }
        }
    }
    chunks
}

/// Cut `word` into one chunk per character.
pub fn char_chunks<'t>(table: &'t ConfusableTable, word: &str) -> Vec<Chunk<'t>> {
    word.chars()
        .map(|c| Chunk {
            text: c.to_string(),
            variants: table.char_variants(c).unwrap_or_default(),
        })
        .collect()
}
