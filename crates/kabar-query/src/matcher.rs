//! Query evaluation.
//!
//! Matching is plain case-insensitive substring containment: a term matches anywhere
//! inside a field, including in the middle of a longer word. There is no scoring.

use crate::ast::{Conjunction, QueryNode};

/// An item whose text fields can be searched.
///
/// Each haystack is evaluated independently; an item matches when any single field
/// satisfies the whole query.
pub trait Searchable {
    /// Returns the searchable text fields in evaluation order.
    fn haystacks(&self) -> Vec<&str>;
}

impl Searchable for str {
    fn haystacks(&self) -> Vec<&str> {
        vec![self]
    }
}

impl Searchable for String {
    fn haystacks(&self) -> Vec<&str> {
        vec![self.as_str()]
    }
}

/// Evaluates a conjunction against text that is already lower-cased.
///
/// Exclusions are checked first, then phrases, then alternative groups.
fn conjunction_matches(conjunction: &Conjunction, text: &str) -> bool {
    if conjunction
        .exclusions
        .iter()
        .any(|word| text.contains(word.as_str()))
    {
        return false;
    }
    if !conjunction.phrases().all(|phrase| text.contains(phrase)) {
        return false;
    }
    conjunction
        .groups()
        .all(|group| group.iter().any(|term| text.contains(term.as_str())))
}

/// Evaluates a query against a single text.
pub fn matches_text(node: &QueryNode, text: &str) -> bool {
    if node.is_empty() {
        return true;
    }
    let lowered = text.to_lowercase();
    node.branches()
        .iter()
        .any(|branch| conjunction_matches(branch, &lowered))
}

/// Returns true if any haystack on its own satisfies the query.
///
/// The empty query matches everything, even when there are no haystacks.
pub fn matches<I, S>(node: &QueryNode, haystacks: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if node.is_empty() {
        return true;
    }
    haystacks
        .into_iter()
        .any(|haystack| matches_text(node, haystack.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    #[test]
    fn bare_word_is_case_insensitive_substring() {
        let query = parse("Rumah");
        assert!(query.matches_text("RUMAH subsidi"));
        assert!(query.matches_text("perumahan rakyat"));
        assert!(!query.matches_text("hunian"));
    }

    #[test]
    fn exclusion() {
        let query = parse("-utang");
        assert!(!query.matches_text("ada utang besar"));
        assert!(query.matches_text("tanpa beban"));
    }

    #[test]
    fn phrase_requires_adjacent_words() {
        let query = parse("\"subsidi rumah\"");
        assert!(query.matches_text("program subsidi rumah diperluas"));
        assert!(!query.matches_text("rumah dengan subsidi"));
        assert!(!query.matches_text("subsidi untuk rumah"));
    }

    #[test]
    fn or_group_with_required_word() {
        let query = parse("(rumah OR hunian) subsidi");
        assert!(query.matches_text("subsidi rumah murah"));
        assert!(query.matches_text("subsidi hunian murah"));
        assert!(!query.matches_text("subsidi mobil murah"));
        assert!(!query.matches_text("rumah murah"));
    }

    #[test]
    fn disjunction_is_or_of_branches() {
        let left = parse("banjir -hoaks");
        let right = parse("\"tanah longsor\"");
        let both = parse("banjir -hoaks OR \"tanah longsor\"");

        for text in [
            "banjir di jakarta",
            "hoaks banjir",
            "tanah longsor di bogor",
            "hoaks banjir dan tanah longsor",
            "cuaca cerah",
        ] {
            assert_eq!(
                both.matches_text(text),
                left.matches_text(text) || right.matches_text(text),
                "text: {text}"
            );
        }
    }

    #[test]
    fn fields_are_evaluated_independently() {
        let query = parse("subsidi rumah");
        // Each word appears, but never both in the same field.
        assert!(!matches(&query, ["subsidi bbm", "rumah murah"]));
        assert!(matches(&query, ["cuaca", "subsidi rumah murah"]));
    }

    #[test]
    fn exclusion_only_rejects_the_field_it_appears_in() {
        let query = parse("-utang");
        assert!(matches(&query, ["utang negara", "anggaran naik"]));
        assert!(!matches(&query, ["utang negara", "utang swasta"]));
    }

    #[test]
    fn empty_query_matches_everything() {
        let query = parse("");
        assert!(query.matches_text(""));
        assert!(query.matches_text("apa saja"));
        assert!(matches(&query, Vec::<&str>::new()));
    }

    #[test]
    fn non_empty_query_needs_a_haystack() {
        assert!(!matches(&parse("a"), Vec::<&str>::new()));
    }

    #[test]
    fn unicode_case_folding() {
        let query = parse("ÉCOLE");
        assert!(query.matches_text("une école publique"));
    }

    #[test]
    fn searchable_strings() {
        let query = parse("kopi");
        assert!(query.matches_item("Kopi Gayo"));
        assert!(query.matches_item(&String::from("es kopi susu")));
        assert!(!query.matches_item("teh manis"));
    }
}
