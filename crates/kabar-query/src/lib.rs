//! Query parsing and matching for kabar dashboards.
//!
//! This crate implements the forgiving search language typed into the dashboard filter box:
//!
//! - **Terms**: `subsidi` - words that must appear
//! - **Phrases**: `"subsidi rumah"` - exact character sequences
//! - **Exclusion**: `-utang` or `-(utang pinjaman)` - words that must NOT appear
//! - **Groups**: `(rumah OR hunian)` - at least one alternative must appear
//! - **OR**: `banjir OR longsor` - independent alternatives at the top level
//!
//! Parsing never fails. Malformed input such as an unterminated quote degrades to literal
//! text matching. All comparisons are case-insensitive substring checks.
//!
//! # Example
//!
//! ```
//! use kabar_query::parse;
//!
//! let query = parse("\"subsidi rumah\" (murah OR terjangkau) -utang");
//! assert!(query.matches_text("Program Subsidi Rumah murah dibuka"));
//! assert!(!query.matches_text("Subsidi rumah murah tanpa utang? Tidak"));
//! ```

#![warn(missing_docs)]

mod ast;
mod lexer;
mod matcher;
mod parser;

pub use ast::{Clause, Conjunction, QueryNode};
pub use lexer::{Token, tokenize};
pub use matcher::{Searchable, matches};
pub use parser::{OR_SEPARATOR, parse};
