//! Shareable metadata for the `fnreflect_core` vocabularies.
//!
//! Both vocabularies (value categories and function families) share the same metadata shape. This module holds that
//! shape so the registries can live in `const` tables.

/// Represent a small example snippet for documentation.
///
/// ## Notes
/// - `code` is usually a Rust type or signature that maps onto the documented item.
/// - `note` is an optional one-sentence explanation.
///
/// ## Examples
/// ```rust
/// use fnreflect_core::registry::Example;
///
/// let ex = Example {
///     code: "fn(bool) -> f64",
///     note: None,
/// };
/// assert!(ex.code.starts_with("fn"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Example {
    pub code: &'static str,
    pub note: Option<&'static str>,
}

/// Shared metadata shape for vocabulary items.
///
/// - stable identity (`id`)
/// - accepted spellings (`canonical` + `aliases`)
/// - documentation (`description` + `examples`)
///
/// ## Notes
/// - `description` is mandatory to keep generated docs consistent.
/// - Spellings are unique across a registry; `tests/vocab_guardrails.rs` enforces this.
#[derive(Debug, Clone, Copy)]
pub struct VocabInfo<Id> {
    pub id: Id,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    pub examples: &'static [Example],
}

/// Resolve a spelling against a registry table.
///
/// Matching is ASCII case-insensitive; canonical spellings win over aliases.
pub(crate) fn lookup<Id: Copy>(table: &[VocabInfo<Id>], name: &str) -> Option<Id> {
    if let Some(info) = table.iter().find(|i| i.canonical.eq_ignore_ascii_case(name)) {
        return Some(info.id);
    }
    table
        .iter()
        .find(|i| i.aliases.iter().any(|a| a.eq_ignore_ascii_case(name)))
        .map(|i| i.id)
}
