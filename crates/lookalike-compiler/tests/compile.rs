//! End-to-end compilation against the full confusables table.
//!
//! Run: cargo test -p lookalike-compiler --test compile

use std::sync::OnceLock;

use lookalike_core::character::nfkc_str;
use lookalike_core::enums::UnmappedPolicy;
use lookalike_compiler::{LookalikeHandle, greedy_compile, strict_compile};

fn handle() -> &'static LookalikeHandle {
    static HANDLE: OnceLock<LookalikeHandle> = OnceLock::new();
    HANDLE.get_or_init(LookalikeHandle::new)
}

#[test]
fn every_candidate_normalizes_back_to_the_word() {
    let table = handle().table();
    for word in ["flag", "print(flag)", "help(secret)", "Office"] {
        for candidate in greedy_compile(table, word, Some(50)) {
            assert_eq!(nfkc_str(&candidate), word, "candidate {candidate:?}");
        }
        for candidate in strict_compile(table, word, Some(50), UnmappedPolicy::Literal) {
            assert_eq!(nfkc_str(&candidate), word, "candidate {candidate:?}");
        }
    }
}

#[test]
fn first_candidate_substitutes_every_chunk() {
    let first = greedy_compile(handle().table(), "flag", Some(1));
    assert_eq!(first.len(), 1);
    assert!(first[0].chars().all(|c| !c.is_ascii()));
}

#[test]
fn greedy_uses_ligatures() {
    let first = &greedy_compile(handle().table(), "ffi", Some(1))[0];
    // A single three-letter look-alike covers the whole word.
    assert_eq!(first.chars().count(), 1);
}

#[test]
fn cap_is_respected() {
    for k in [1, 2, 7, 30] {
        assert!(handle().compile("secret", true, Some(k)).len() <= k);
        assert!(handle().compile("secret", false, Some(k)).len() <= k);
    }
}

#[test]
fn ordered_compilation_is_deterministic() {
    let table = handle().table();
    assert_eq!(
        greedy_compile(table, "exit(flag)", Some(25)),
        greedy_compile(table, "exit(flag)", Some(25))
    );
}

#[test]
fn permissive_strict_mode_never_comes_back_empty() {
    for word in ["", "a", "1+1", "print(flag)", "\u{00E4}\u{00F6}"] {
        assert!(!handle().compile(word, false, Some(3)).is_empty(), "{word:?}");
    }
}

#[test]
fn rejecting_strict_mode_drops_punctuation() {
    let table = handle().table();
    assert!(strict_compile(table, "print(flag)", Some(3), UnmappedPolicy::Reject).is_empty());
    assert!(!strict_compile(table, "flag", Some(3), UnmappedPolicy::Reject).is_empty());
}

#[test]
fn original_word_is_reachable() {
    let table = handle().table();
    let greedy = greedy_compile(table, "ab", None);
    let strict = strict_compile(table, "ab", None, UnmappedPolicy::Literal);
    assert_eq!(greedy.last().map(String::as_str), Some("ab"));
    assert_eq!(strict.last().map(String::as_str), Some("ab"));
}
