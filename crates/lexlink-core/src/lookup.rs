//! Insertion-ordered alias tables.
//!
//! Every target site keeps a static table mapping human names and
//! abbreviations ("court of protection", "ewcop", "cop") to a structural
//! identifier, usually a URL path segment. Lookup is exact first, then a
//! substring pass in declaration order with first-match-wins, so the order
//! entries are written in is load-bearing and must not be re-sorted.

/// Lower-case and trim a lookup key.
pub fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}

/// A read-only alias table over a `'static` slice.
///
/// The slice keeps declaration order, which gives the substring fallback its
/// deterministic first-match-wins tie-break.
#[derive(Debug, Clone, Copy)]
pub struct AliasTable {
    entries: &'static [(&'static str, &'static str)],
}

impl AliasTable {
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    /// Exact match on the normalised key.
    pub fn exact(&self, key: &str) -> Option<&'static str> {
        let key = normalize_key(key);
        self.entries
            .iter()
            .find(|(alias, _)| *alias == key)
            .map(|(_, value)| *value)
    }

    /// Exact match, then bidirectional substring containment in declaration
    /// order. First hit wins.
    pub fn resolve(&self, key: &str) -> Option<&'static str> {
        let key = normalize_key(key);
        if key.is_empty() {
            return None;
        }
        if let Some(value) = self
            .entries
            .iter()
            .find(|(alias, _)| *alias == key)
            .map(|(_, value)| *value)
        {
            return Some(value);
        }
        self.entries
            .iter()
            .find(|(alias, _)| alias.contains(&key) || key.contains(alias))
            .map(|(_, value)| *value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COURTS: AliasTable = AliasTable::new(&[
        ("uksc", "uksc"),
        ("supreme court", "uksc"),
        ("ewcop", "ewcop"),
        ("court of protection", "ewcop"),
        ("cop", "ewcop"),
        ("ewfc", "ewfc"),
        ("family court", "ewfc"),
    ]);

    #[test]
    fn exact_hits() {
        assert_eq!(COURTS.exact("ewcop"), Some("ewcop"));
        assert_eq!(COURTS.exact("Supreme Court"), Some("uksc"));
        assert_eq!(COURTS.exact("  cop  "), Some("ewcop"));
    }

    #[test]
    fn exact_misses_partial_keys() {
        assert_eq!(COURTS.exact("protection"), None);
    }

    #[test]
    fn resolve_falls_back_to_substring() {
        assert_eq!(COURTS.resolve("protection"), Some("ewcop"));
        assert_eq!(COURTS.resolve("the family court of england"), Some("ewfc"));
    }

    #[test]
    fn resolve_first_match_wins_in_declaration_order() {
        // "court" is contained in "supreme court" before "court of protection".
        assert_eq!(COURTS.resolve("court"), Some("uksc"));
    }

    #[test]
    fn resolve_is_idempotent() {
        let once = COURTS.resolve("court of protection");
        let twice = COURTS.resolve("court of protection");
        assert_eq!(once, twice);
        assert_eq!(once, Some("ewcop"));
    }

    #[test]
    fn unknown_and_empty_keys() {
        assert_eq!(COURTS.resolve("crown"), None);
        assert_eq!(COURTS.resolve("zzz"), None);
        assert_eq!(COURTS.resolve(""), None);
        assert_eq!(COURTS.resolve("   "), None);
    }
}
