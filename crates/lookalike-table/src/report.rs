// Ordered listings of a ConfusableTable for inspection tools
//
// The ordering helpers return plain data so callers can render them however
// they like; the `write_*` functions produce the text layout used by the
// command-line tools.

use std::io::{self, Write};

use lookalike_core::character::{char_name, code_point_label};

use crate::table::ConfusableTable;

/// Number of variants shown per key in the lookup listing.
pub const PREVIEW_LEN: usize = 15;

const RULE_WIDTH: usize = 85;

/// A multi-character key found inside a word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slice<'a> {
    /// The ASCII letter run.
    pub key: &'a str,
    /// Its first look-alike (lowest code point).
    pub first_variant: char,
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

/// All `(look-alike, normalization)` entries in ascending code-point order.
pub fn sorted_entries(table: &ConfusableTable) -> Vec<(char, &str)> {
    let mut entries: Vec<_> = table.fancy_entries().collect();
    entries.sort_unstable_by_key(|&(c, _)| c);
    entries
}

/// All `(key, variants)` pairs, longest key first, then alphabetical.
pub fn sorted_keys(table: &ConfusableTable) -> Vec<(&str, &[char])> {
    let mut keys: Vec<_> = table.lookup_entries().collect();
    keys.sort_unstable_by(|a, b| {
        b.0.chars()
            .count()
            .cmp(&a.0.chars().count())
            .then_with(|| a.0.cmp(b.0))
    });
    keys
}

/// Multi-character keys occurring as substrings of `word`, in
/// [`sorted_keys`] order.
pub fn useful_slices<'a>(table: &'a ConfusableTable, word: &str) -> Vec<Slice<'a>> {
    sorted_keys(table)
        .into_iter()
        .filter(|(key, _)| key.len() > 1 && word.contains(key))
        .map(|(key, variants)| Slice {
            key,
            first_variant: variants[0],
        })
        .collect()
}

/// Comma-separated preview of at most [`PREVIEW_LEN`] variants, with an
/// overflow count.
pub fn variant_preview(variants: &[char]) -> String {
    let mut preview = variants
        .iter()
        .take(PREVIEW_LEN)
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    if variants.len() > PREVIEW_LEN {
        preview.push_str(&format!(", ... ({} more)", variants.len() - PREVIEW_LEN));
    }
    preview
}

// ---------------------------------------------------------------------------
// Text output
// ---------------------------------------------------------------------------

/// Write every look-alike with its code point, normalization and name.
pub fn write_full_table(out: &mut impl Write, table: &ConfusableTable) -> io::Result<()> {
    writeln!(out, "─── Characters Normalizing to ASCII Letters ───")?;
    writeln!(out, "{}", "─".repeat(RULE_WIDTH))?;
    writeln!(out, "{:<9} │ {:<4} │ {:<4} │ Name", "Code", "Char", "NFKC")?;
    writeln!(out, "{}", "─".repeat(RULE_WIDTH))?;
    for (c, norm) in sorted_entries(table) {
        write_char_row(out, c, norm)?;
    }
    Ok(())
}

/// Write every key with its variant count and a bounded preview.
pub fn write_lookup_table(out: &mut impl Write, table: &ConfusableTable) -> io::Result<()> {
    writeln!(out, "─── Lookup Table (ASCII -> Look-alikes) ───")?;
    writeln!(out, "{:<10} │ {:<5} │ Variants", "Target", "Count")?;
    writeln!(out, "{}", "─".repeat(80))?;
    for (key, variants) in sorted_keys(table) {
        writeln!(
            out,
            "{:<10} │ {:<5} │ {}",
            key,
            variants.len(),
            variant_preview(variants)
        )?;
    }
    Ok(())
}

/// Write the multi-character keys usable inside `word`.
pub fn write_useful_slices(
    out: &mut impl Write,
    table: &ConfusableTable,
    word: &str,
) -> io::Result<()> {
    writeln!(out, "─── Useful slices for: '{word}' ───")?;
    writeln!(out)?;
    let slices = useful_slices(table, word);
    if slices.is_empty() {
        writeln!(out, "No slices found")?;
    }
    for slice in slices {
        write_char_row(out, slice.first_variant, slice.key)?;
    }
    Ok(())
}

fn write_char_row(out: &mut impl Write, c: char, norm: &str) -> io::Result<()> {
    writeln!(
        out,
        "{:<9} │ {:<4} │ {:<4} │ {}",
        code_point_label(c),
        c,
        norm,
        char_name(c)
    )
}
