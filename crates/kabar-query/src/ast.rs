//! Query tree.
//!
//! A query is either a single conjunction or a top-level disjunction of conjunctions.
//! Disjunctions never nest inside a conjunction; the types make that unrepresentable.

use std::{fmt, slice};

use crate::matcher::{self, Searchable};

/// A required clause inside a conjunction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clause {
    /// At least one of these terms must appear. A bare word is a group of one.
    AnyOf(Vec<String>),

    /// This exact character sequence must appear.
    Phrase(String),
}

impl Clause {
    /// Renders the clause in query syntax.
    fn to_query_string(&self) -> String {
        match self {
            Self::AnyOf(terms) if terms.len() == 1 => terms[0].clone(),
            Self::AnyOf(terms) => format!("({})", terms.join(" OR ")),
            Self::Phrase(text) => format!("\"{text}\""),
        }
    }
}

/// AND-combination of required clauses and excluded words.
///
/// All text is stored lower-cased. An empty conjunction matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conjunction {
    /// Required groups and phrases, in query order.
    pub clauses: Vec<Clause>,
    /// Words that must not appear, in query order.
    pub exclusions: Vec<String>,
}

impl Conjunction {
    /// Creates an empty conjunction.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single required term.
    pub fn push_term(&mut self, term: &str) {
        self.push_any_of([term]);
    }

    /// Adds a group of alternatives. Empty alternatives are dropped, and an empty group is
    /// ignored.
    pub fn push_any_of<'a>(&mut self, terms: impl IntoIterator<Item = &'a str>) {
        let terms: Vec<String> = terms.into_iter().filter_map(normalize).collect();
        if !terms.is_empty() {
            self.clauses.push(Clause::AnyOf(terms));
        }
    }

    /// Adds an exact phrase. Empty phrases are ignored.
    pub fn push_phrase(&mut self, phrase: &str) {
        if let Some(phrase) = normalize(phrase) {
            self.clauses.push(Clause::Phrase(phrase));
        }
    }

    /// Adds an excluded word. Empty words are ignored.
    pub fn push_exclusion(&mut self, word: &str) {
        if let Some(word) = normalize(word) {
            self.exclusions.push(word);
        }
    }

    /// Returns true if the conjunction has no clauses and no exclusions.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty() && self.exclusions.is_empty()
    }

    /// Iterates over the exact phrases, in query order.
    pub fn phrases(&self) -> impl Iterator<Item = &str> {
        self.clauses.iter().filter_map(|clause| match clause {
            Clause::Phrase(text) => Some(text.as_str()),
            Clause::AnyOf(_) => None,
        })
    }

    /// Iterates over the alternative groups, in query order.
    pub fn groups(&self) -> impl Iterator<Item = &[String]> {
        self.clauses.iter().filter_map(|clause| match clause {
            Clause::AnyOf(terms) => Some(terms.as_slice()),
            Clause::Phrase(_) => None,
        })
    }

    /// Renders the conjunction in query syntax.
    pub fn to_query_string(&self) -> String {
        let clauses = self.clauses.iter().map(Clause::to_query_string);
        let exclusions = self.exclusions.iter().map(|word| {
            if word.contains(char::is_whitespace) {
                format!("-\"{word}\"")
            } else {
                format!("-{word}")
            }
        });
        clauses.chain(exclusions).collect::<Vec<_>>().join(" ")
    }

    /// Formats the conjunction as a tree with the given indentation level.
    fn fmt_tree(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        let prefix = "  ".repeat(indent);
        writeln!(f, "{prefix}Conjunction")?;
        for clause in &self.clauses {
            match clause {
                Clause::AnyOf(terms) if terms.len() == 1 => {
                    writeln!(f, "{prefix}  Term({:?})", terms[0])?;
                }
                Clause::AnyOf(terms) => writeln!(f, "{prefix}  OrGroup({terms:?})")?,
                Clause::Phrase(text) => writeln!(f, "{prefix}  Phrase({text:?})")?,
            }
        }
        for word in &self.exclusions {
            writeln!(f, "{prefix}  Exclude({word:?})")?;
        }
        Ok(())
    }
}

/// A parsed query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryNode {
    /// All clauses must hold.
    Conjunction(Conjunction),

    /// At least one conjunction must hold.
    Disjunction(Vec<Conjunction>),
}

impl Default for QueryNode {
    fn default() -> Self {
        Self::Conjunction(Conjunction::new())
    }
}

impl QueryNode {
    /// Creates a query from OR-ed conjunctions, unwrapping trivial cases.
    ///
    /// Zero branches yield the empty conjunction and a single branch yields that conjunction.
    pub fn any(mut branches: Vec<Conjunction>) -> Self {
        match branches.len() {
            0 => Self::default(),
            1 => Self::Conjunction(branches.remove(0)),
            _ => Self::Disjunction(branches),
        }
    }

    /// Returns the conjunctions that make up this query.
    pub fn branches(&self) -> &[Conjunction] {
        match self {
            Self::Conjunction(conjunction) => slice::from_ref(conjunction),
            Self::Disjunction(branches) => branches,
        }
    }

    /// Returns true if the query matches everything.
    pub fn is_empty(&self) -> bool {
        self.branches().iter().all(Conjunction::is_empty)
    }

    /// Returns every positive term and phrase, deduplicated, in query order.
    ///
    /// Useful for highlighting matches in the presentation layer.
    pub fn terms(&self) -> Vec<&str> {
        let mut terms: Vec<&str> = Vec::new();
        for branch in self.branches() {
            for clause in &branch.clauses {
                let texts: &[String] = match clause {
                    Clause::AnyOf(terms) => terms,
                    Clause::Phrase(text) => slice::from_ref(text),
                };
                for text in texts {
                    if !terms.contains(&text.as_str()) {
                        terms.push(text);
                    }
                }
            }
        }
        terms
    }

    /// Evaluates the query against a single text.
    pub fn matches_text(&self, text: &str) -> bool {
        matcher::matches_text(self, text)
    }

    /// Evaluates the query against every haystack of an item.
    pub fn matches_item<T: Searchable + ?Sized>(&self, item: &T) -> bool {
        matcher::matches(self, item.haystacks())
    }

    /// Formats the query as canonical query text.
    pub fn to_query_string(&self) -> String {
        self.branches()
            .iter()
            .map(Conjunction::to_query_string)
            .collect::<Vec<_>>()
            .join(" OR ")
    }
}

impl fmt::Display for QueryNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Conjunction(conjunction) => conjunction.fmt_tree(f, 0),
            Self::Disjunction(branches) => {
                writeln!(f, "Disjunction")?;
                for branch in branches {
                    branch.fmt_tree(f, 1)?;
                }
                Ok(())
            }
        }
    }
}

/// Trims and lower-cases query text, rejecting empty results.
fn normalize(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_normalizes_and_drops_empty() {
        let mut conjunction = Conjunction::new();
        conjunction.push_term("  Subsidi ");
        conjunction.push_term("");
        conjunction.push_any_of(["Rumah", " ", "HUNIAN"]);
        conjunction.push_any_of(["", "  "]);
        conjunction.push_phrase("");
        conjunction.push_exclusion("Utang");
        conjunction.push_exclusion(" ");

        assert_eq!(
            conjunction.clauses,
            vec![
                Clause::AnyOf(vec!["subsidi".into()]),
                Clause::AnyOf(vec!["rumah".into(), "hunian".into()]),
            ]
        );
        assert_eq!(conjunction.exclusions, vec!["utang".to_string()]);
    }

    #[test]
    fn any_unwraps_trivial_cases() {
        assert_eq!(QueryNode::any(vec![]), QueryNode::default());

        let mut single = Conjunction::new();
        single.push_term("a");
        assert_eq!(
            QueryNode::any(vec![single.clone()]),
            QueryNode::Conjunction(single.clone())
        );

        let mut other = Conjunction::new();
        other.push_term("b");
        assert_eq!(
            QueryNode::any(vec![single.clone(), other.clone()]),
            QueryNode::Disjunction(vec![single, other])
        );
    }

    #[test]
    fn empty_query_is_empty() {
        assert!(QueryNode::default().is_empty());
        assert!(QueryNode::Disjunction(vec![Conjunction::new(), Conjunction::new()]).is_empty());
    }

    #[test]
    fn terms_are_deduplicated() {
        let mut left = Conjunction::new();
        left.push_any_of(["rumah", "hunian"]);
        left.push_exclusion("utang");
        let mut right = Conjunction::new();
        right.push_phrase("subsidi rumah");
        right.push_term("rumah");

        let query = QueryNode::any(vec![left, right]);
        assert_eq!(query.terms(), vec!["rumah", "hunian", "subsidi rumah"]);
    }

    #[test]
    fn query_string_rendering() {
        let mut conjunction = Conjunction::new();
        conjunction.push_any_of(["rumah", "hunian"]);
        conjunction.push_phrase("subsidi rumah");
        conjunction.push_term("murah");
        conjunction.push_exclusion("utang");
        conjunction.push_exclusion("gagal bayar");

        assert_eq!(
            conjunction.to_query_string(),
            "(rumah OR hunian) \"subsidi rumah\" murah -utang -\"gagal bayar\""
        );
    }

    #[test]
    fn tree_display() {
        let mut left = Conjunction::new();
        left.push_any_of(["rumah", "hunian"]);
        left.push_exclusion("utang");
        let mut right = Conjunction::new();
        right.push_phrase("kpr");

        let rendered = QueryNode::any(vec![left, right]).to_string();
        assert_eq!(
            rendered,
            "Disjunction\n  Conjunction\n    OrGroup([\"rumah\", \"hunian\"])\n    \
             Exclude(\"utang\")\n  Conjunction\n    Phrase(\"kpr\")\n"
        );
    }
}
