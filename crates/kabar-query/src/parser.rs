//! Query parser.
//!
//! Turns query text into a [`QueryNode`]. The language is deliberately forgiving: there is
//! no error path, and input that does not fit the grammar is matched as literal text.
//!
//! # Rules
//!
//! 1. The separator `" OR "` outside parentheses splits the query into independent
//!    conjunctions. Quotes do not protect it, so `"a OR b"` splits.
//! 2. Inside a conjunction each token is classified:
//!    - `"..."` is an exact phrase
//!    - `-word`, `-"..."` and `-(a b)` are exclusions
//!    - `(a OR b)` is a group of alternatives, `(a b)` a list of required words
//!    - an unclosed quote or group is a literal phrase of what was typed
//!    - anything else is a required word

use crate::{
    ast::{Conjunction, QueryNode},
    lexer::{Token, tokenize},
};

/// Separator that splits a query into top-level alternatives.
pub const OR_SEPARATOR: &str = " OR ";

/// Keyword separating alternatives inside a parenthesized group.
const GROUP_OR: &str = "OR";

/// Parses a query string into a query tree.
///
/// An empty or whitespace-only query yields the empty conjunction, which matches
/// everything.
pub fn parse(input: &str) -> QueryNode {
    let input = input.trim();
    let branches = split_top_level(input);

    if branches.len() == 1 {
        return QueryNode::Conjunction(parse_conjunction(input));
    }

    QueryNode::any(
        branches
            .into_iter()
            .map(str::trim)
            .filter(|branch| !branch.is_empty())
            .map(parse_conjunction)
            .collect(),
    )
}

/// Splits on [`OR_SEPARATOR`] occurrences that are not inside parentheses.
///
/// The scan is purely textual: quotes are not tracked and an unbalanced `)` never drives
/// the depth below zero.
fn split_top_level(input: &str) -> Vec<&str> {
    let bytes = input.as_bytes();
    let separator = OR_SEPARATOR.as_bytes();
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let mut idx = 0;

    while idx < bytes.len() {
        match bytes[idx] {
            b'(' => depth += 1,
            b')' => depth = depth.saturating_sub(1),
            b' ' if depth == 0 && bytes[idx..].starts_with(separator) => {
                parts.push(&input[start..idx]);
                idx += separator.len();
                start = idx;
                continue;
            }
            _ => {}
        }
        idx += 1;
    }

    parts.push(&input[start..]);
    parts
}

/// Parses OR-free query text into a conjunction.
fn parse_conjunction(input: &str) -> Conjunction {
    let mut conjunction = Conjunction::new();

    for token in tokenize(input) {
        let negated = token.is_negated();
        match token {
            Token::Word(word) => {
                if negated {
                    conjunction.push_exclusion(strip_negation(&word));
                } else {
                    conjunction.push_term(&word);
                }
            }
            Token::Quoted { raw, closed } => {
                let body = strip_negation(&raw);
                let text = strip_delimiters(body, '"', '"', closed);
                if negated {
                    conjunction.push_exclusion(text);
                } else {
                    conjunction.push_phrase(text);
                }
            }
            Token::Group { raw, closed } => {
                let body = strip_negation(&raw);
                let inner = strip_delimiters(body, '(', ')', closed);
                match (negated, closed) {
                    (true, true) => inner
                        .split_whitespace()
                        .filter(|word| *word != GROUP_OR)
                        .for_each(|word| conjunction.push_exclusion(word)),
                    (true, false) => conjunction.push_exclusion(inner),
                    (false, true) => push_group(&mut conjunction, inner),
                    (false, false) => conjunction.push_phrase(inner),
                }
            }
        }
    }

    conjunction
}

/// Adds the body of a closed, non-negated group.
///
/// With an `OR` keyword the body is a set of alternatives; without one each word is
/// required on its own.
fn push_group(conjunction: &mut Conjunction, inner: &str) {
    let words: Vec<&str> = inner.split_whitespace().collect();

    if !words.contains(&GROUP_OR) {
        for word in words {
            conjunction.push_term(word);
        }
        return;
    }

    let alternatives: Vec<String> = words
        .split(|word| *word == GROUP_OR)
        .map(|alternative| alternative.join(" "))
        .collect();
    conjunction.push_any_of(alternatives.iter().map(|alt| alt.trim_matches('"')));
}

/// Removes the exclusion prefix `-` from a raw token, if present.
fn strip_negation(raw: &str) -> &str {
    raw.strip_prefix('-').unwrap_or(raw)
}

/// Removes the opening delimiter, and the closing one when the span was closed.
fn strip_delimiters(body: &str, open: char, close: char, closed: bool) -> &str {
    let body = body.strip_prefix(open).unwrap_or(body);
    if closed {
        body.strip_suffix(close).unwrap_or(body)
    } else {
        body
    }
}
