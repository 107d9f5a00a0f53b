//! Query lexer (tokenizer).
//!
//! Splits a query string on whitespace, keeping quoted phrases and parenthesized groups
//! together as single tokens. The lexer never fails: a quote or parenthesis that is never
//! closed simply runs to the end of the input and is flagged as unclosed.
//!
//! Nested or escaped quotes and parentheses are not supported. A group ends at the first
//! whitespace-separated piece that ends with `)`, and a phrase at the first piece that ends
//! with `"`.

use std::{iter::Peekable, str::CharIndices};

/// A token in the query language.
///
/// Tokens keep their raw text, including delimiters and any leading `-`, so the parser can
/// decide how to interpret them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A bare whitespace-delimited word, possibly starting with `-`.
    Word(String),

    /// A quoted span such as `"subsidi rumah"` or `-"gagal bayar"`.
    Quoted {
        /// Raw text including quotes and any leading `-`.
        raw: String,
        /// False when the input ended before the closing quote.
        closed: bool,
    },

    /// A parenthesized span such as `(rumah OR hunian)` or `-(utang pinjaman)`.
    Group {
        /// Raw text including parentheses and any leading `-`.
        raw: String,
        /// False when the input ended before the closing parenthesis.
        closed: bool,
    },
}

impl Token {
    /// Returns the raw text of the token.
    pub fn raw(&self) -> &str {
        match self {
            Self::Word(raw) | Self::Quoted { raw, .. } | Self::Group { raw, .. } => raw,
        }
    }

    /// Returns true if the token starts with the exclusion prefix `-`.
    pub fn is_negated(&self) -> bool {
        self.raw().starts_with('-')
    }
}

/// Tokenizes a query string.
struct Lexer<'a> {
    /// The original input string.
    input: &'a str,
    /// Character iterator with byte offsets and one-character lookahead.
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
        }
    }

    /// Tokenizes the entire input.
    fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        while let Some(token) = self.next_token() {
            tokens.push(token);
        }

        tokens
    }

    /// Returns the next token, or None if at end of input.
    fn next_token(&mut self) -> Option<Token> {
        let (start, end) = self.next_piece()?;
        let piece = &self.input[start..end];
        let body = piece.strip_prefix('-').unwrap_or(piece);

        let token = if body.starts_with('"') {
            let (raw, closed) = self.read_span(start, end, '"');
            Token::Quoted { raw, closed }
        } else if body.starts_with('(') {
            let (raw, closed) = self.read_span(start, end, ')');
            Token::Group { raw, closed }
        } else {
            Token::Word(piece.to_string())
        };

        Some(token)
    }

    /// Extends a span that opened at `start` until a piece ends with `close`.
    ///
    /// The opening delimiter itself never counts as the closing one, so a lone `"` keeps
    /// reading.
    fn read_span(&mut self, start: usize, first_end: usize, close: char) -> (String, bool) {
        let opening_len = if self.input[start..].starts_with('-') {
            2
        } else {
            1
        };
        let mut end = first_end;

        loop {
            if end - start > opening_len && self.input[..end].ends_with(close) {
                return (self.input[start..end].to_string(), true);
            }
            match self.next_piece() {
                Some((_, piece_end)) => end = piece_end,
                None => return (self.input[start..end].to_string(), false),
            }
        }
    }

    /// Returns the byte range of the next whitespace-delimited piece.
    fn next_piece(&mut self) -> Option<(usize, usize)> {
        self.skip_whitespace();

        let &(start, _) = self.chars.peek()?;
        let mut end = start;

        while let Some(&(idx, ch)) = self.chars.peek() {
            if ch.is_whitespace() {
                break;
            }
            end = idx + ch.len_utf8();
            self.chars.next();
        }

        Some((start, end))
    }

    /// Skips whitespace characters.
    fn skip_whitespace(&mut self) {
        while let Some(&(_, ch)) = self.chars.peek() {
            if ch.is_whitespace() {
                self.chars.next();
            } else {
                break;
            }
        }
    }
}

/// Convenience function to tokenize a query string.
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input).tokenize()
}
