//! Clinical stage normalization.
//!
//! Substage codes like "IIIA" or "IVB2" are collapsed to their roman-numeral
//! stage ("III", "IV") by stripping the substage characters `A B C 1 2`.
//! This is a lossy many-to-one grouping key, not a reversible encoding.

/// Characters that mark a substage and are removed from the code.
const SUBSTAGE_CHARS: &[char] = &['A', 'B', 'C', '1', '2'];

/// Derive the canonical stage grouping key from a raw stage code.
///
/// Uppercases, strips every substage character, and trims. Returns `None`
/// when nothing remains (empty input or a code made only of substage
/// characters). Idempotent: cleaning an already-clean code changes nothing.
pub fn clean_stage(raw: &str) -> Option<String> {
    let cleaned: String = raw
        .trim()
        .chars()
        .map(|ch| ch.to_ascii_uppercase())
        .filter(|ch| !SUBSTAGE_CHARS.contains(ch))
        .collect();
    let cleaned = cleaned.trim().to_string();
    if cleaned.is_empty() { None } else { Some(cleaned) }
}
