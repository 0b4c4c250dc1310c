// Word compilation: decomposition + lazy product + capping + sampling
//
// All functions borrow the table read-only; nothing here mutates shared
// state, so one table can serve any number of concurrent callers.

use lookalike_core::enums::{Strategy, UnmappedPolicy};
use lookalike_table::ConfusableTable;
use tracing::{debug, warn};

use crate::chunk::{Chunk, char_chunks, greedy_chunks};
use crate::options::CompileOptions;
use crate::product::CartesianProduct;
use crate::sampling::shuffle_truncate;

/// Decompose `word` into chunks according to `options`.
///
/// Returns `None` when per-character decomposition meets a character
/// without look-alikes under [`UnmappedPolicy::Reject`].
pub fn decompose<'t>(
    table: &'t ConfusableTable,
    word: &str,
    options: &CompileOptions,
) -> Option<Vec<Chunk<'t>>> {
    match options.strategy {
        Strategy::Greedy => Some(greedy_chunks(table, word)),
        Strategy::PerCharacter => {
            let chunks = char_chunks(table, word);
            if options.unmapped == UnmappedPolicy::Reject
                && chunks.iter().any(|c| !c.is_substitutable())
            {
                debug!(word, "rejected word with unmapped characters");
                return None;
            }
            Some(chunks)
        }
    }
}

/// The full lazy candidate sequence for `word`, uncapped and unsampled.
pub fn candidates(
    table: &ConfusableTable,
    word: &str,
    options: &CompileOptions,
) -> Option<CartesianProduct> {
    let chunks = decompose(table, word, options)?;
    let lists = chunks
        .iter()
        .map(|chunk| chunk.options(options.include_literal))
        .collect();
    Some(CartesianProduct::new(lists))
}

/// Compile `word` into candidate spellings.
///
/// Capped requests take a prefix of the product sequence; shuffled ones
/// draw [`OVERSAMPLE_FACTOR`](crate::options::OVERSAMPLE_FACTOR) times the
/// cap first and shuffle it down. Uncapped requests stop at
/// `uncapped_ceiling`. An empty result means the word was rejected.
pub fn compile(table: &ConfusableTable, word: &str, options: &CompileOptions) -> Vec<String> {
    let Some(product) = candidates(table, word, options) else {
        return Vec::new();
    };

    let limit = options.fetch_limit();
    if options.max_candidates.is_none() && product.total().is_none_or(|n| n > limit) {
        warn!(
            word,
            ceiling = limit,
            "candidate space exceeds the uncapped ceiling; truncating"
        );
    }

    let mut drawn: Vec<String> = product.take(limit).collect();
    if let Some(k) = options.max_candidates.filter(|_| options.shuffles()) {
        shuffle_truncate(&mut drawn, k, options.seed);
    }
    debug!(word, strategy = %options.strategy, candidates = drawn.len(), "compiled word");
    drawn
}

/// Greedy decomposition, first `max_candidates` candidates in product order.
pub fn greedy_compile(
    table: &ConfusableTable,
    word: &str,
    max_candidates: Option<usize>,
) -> Vec<String> {
    compile(
        table,
        word,
        &CompileOptions::ordered(Strategy::Greedy, max_candidates),
    )
}

/// Per-character decomposition, first `max_candidates` candidates in
/// product order.
pub fn strict_compile(
    table: &ConfusableTable,
    word: &str,
    max_candidates: Option<usize>,
    unmapped: UnmappedPolicy,
) -> Vec<String> {
    let options = CompileOptions {
        unmapped,
        ..CompileOptions::ordered(Strategy::PerCharacter, max_candidates)
    };
    compile(table, word, &options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lookalike_core::enums::Sampling;

    const ALPHA: char = '\u{0391}';
    const BETA: char = '\u{0392}';

    fn greek() -> ConfusableTable {
        ConfusableTable::from_entries([(ALPHA, "A"), (BETA, "B")]).unwrap()
    }

    fn ligatures() -> ConfusableTable {
        ConfusableTable::from_entries([
            ('\u{FB02}', "fl"),
            ('\u{FF41}', "a"),
            ('\u{00AA}', "a"),
            ('\u{FF46}', "f"),
            ('\u{FF47}', "g"),
            ('\u{FF4C}', "l"),
        ])
        .unwrap()
    }

    #[test]
    fn strict_two_letters_in_product_order() {
        let result = strict_compile(&greek(), "AB", Some(4), UnmappedPolicy::Literal);
        assert_eq!(result, vec!["ΑΒ", "ΑB", "AΒ", "AB"]);
    }

    #[test]
    fn cap_takes_a_prefix() {
        let result = strict_compile(&greek(), "AB", Some(2), UnmappedPolicy::Literal);
        assert_eq!(result, vec!["ΑΒ", "ΑB"]);
    }

    #[test]
    fn empty_word_compiles_to_empty_string() {
        let t = greek();
        assert_eq!(greedy_compile(&t, "", Some(5)), vec![""]);
        assert_eq!(strict_compile(&t, "", Some(5), UnmappedPolicy::Literal), vec![""]);
        assert_eq!(strict_compile(&t, "", Some(5), UnmappedPolicy::Reject), vec![""]);
    }

    #[test]
    fn literal_policy_keeps_unmapped_characters() {
        let result = strict_compile(&greek(), "A-B", None, UnmappedPolicy::Literal);
        assert_eq!(result, vec!["Α-Β", "Α-B", "A-Β", "A-B"]);
    }

    #[test]
    fn reject_policy_drops_the_word() {
        assert!(strict_compile(&greek(), "A-B", None, UnmappedPolicy::Reject).is_empty());
        assert_eq!(
            strict_compile(&greek(), "AB", Some(1), UnmappedPolicy::Reject),
            vec!["ΑΒ"]
        );
    }

    #[test]
    fn greedy_uses_multi_character_chunks() {
        let result = greedy_compile(&ligatures(), "flag", None);
        // chunks: fl(ﬂ, fl) a(ａ, ª, a) g(ｇ, g)
        assert_eq!(result.len(), 2 * 3 * 2);
        assert_eq!(result[0], "\u{FB02}\u{FF41}\u{FF47}");
        assert_eq!(result.last().map(String::as_str), Some("flag"));
    }

    #[test]
    fn greedy_keeps_punctuation() {
        let result = greedy_compile(&ligatures(), "(fl)", None);
        assert_eq!(result, vec!["(\u{FB02})", "(fl)"]);
    }

    #[test]
    fn without_literal_only_substitutions_remain() {
        let options = CompileOptions {
            include_literal: false,
            ..CompileOptions::ordered(Strategy::PerCharacter, None)
        };
        assert_eq!(compile(&greek(), "AB", &options), vec!["ΑΒ"]);
    }

    #[test]
    fn greedy_is_deterministic_when_ordered() {
        let t = ligatures();
        assert_eq!(greedy_compile(&t, "flagfl", Some(7)), greedy_compile(&t, "flagfl", Some(7)));
    }

    #[test]
    fn shuffled_results_come_from_the_oversampled_prefix() {
        let t = ligatures();
        let options = CompileOptions {
            max_candidates: Some(2),
            sampling: Sampling::Shuffled,
            seed: Some(11),
            ..CompileOptions::default()
        };
        let result = compile(&t, "flag", &options);
        assert_eq!(result.len(), 2);
        let prefix = greedy_compile(&t, "flag", Some(6));
        assert!(result.iter().all(|c| prefix.contains(c)));
        assert_eq!(result, compile(&t, "flag", &options));
    }

    #[test]
    fn shuffled_compile_samples_beyond_the_ordered_prefix() {
        let t = ligatures();
        let drawn = greedy_compile(&t, "flag", Some(6));
        let tail = &drawn[2..];
        let reached = (0..20).any(|seed| {
            let options = CompileOptions {
                max_candidates: Some(2),
                seed: Some(seed),
                ..CompileOptions::default()
            };
            compile(&t, "flag", &options)
                .iter()
                .any(|c| tail.contains(c))
        });
        assert!(reached, "shuffled compile never left the first 2 candidates");
    }

    #[test]
    fn shuffle_skipped_when_space_is_small() {
        let options = CompileOptions {
            strategy: Strategy::PerCharacter,
            max_candidates: Some(10),
            ..CompileOptions::default()
        };
        assert_eq!(compile(&greek(), "AB", &options), vec!["ΑΒ", "ΑB", "AΒ", "AB"]);
    }

    #[test]
    fn uncapped_requests_stop_at_the_ceiling() {
        let options = CompileOptions {
            max_candidates: None,
            uncapped_ceiling: 5,
            ..CompileOptions::default()
        };
        assert_eq!(compile(&ligatures(), "flagflag", &options).len(), 5);
    }

    #[test]
    fn zero_cap_yields_nothing() {
        assert!(greedy_compile(&ligatures(), "flag", Some(0)).is_empty());
    }

    #[test]
    fn candidates_exposes_the_full_space() {
        let options = CompileOptions::ordered(Strategy::Greedy, Some(1));
        let product = candidates(&ligatures(), "flag", &options).unwrap();
        assert_eq!(product.total(), Some(12));
    }
}
