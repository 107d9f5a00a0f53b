//! Word-frequency analysis for kabar dashboards.
//!
//! Given the text of the articles currently on screen, the analyzer produces the ranked
//! term table shown next to the topic list:
//!
//! 1. **Tokenize**: split into runs of word characters, drop runs shorter than three
//!    characters, lower-case
//! 2. **Filter**: skip terms in the caller's [`Stopwords`] set
//! 3. **Rank**: count, order by count, break ties by first appearance, keep the top K
//!
//! # Example
//!
//! ```
//! use kabar_context::{Stopwords, word_frequencies};
//!
//! let stopwords = Stopwords::from_words(["yang"]);
//! let table = word_frequencies(["kopi yang kopi teh"], &stopwords, 10).unwrap();
//! assert_eq!(table[0].term, "kopi");
//! assert_eq!(table[0].count, 2);
//! ```

#![warn(missing_docs)]

mod error;
mod frequency;
mod stopwords;

pub use error::ContextError;
pub use frequency::{MIN_TERM_LENGTH, WordCounter, WordFrequencyEntry, tokenize, word_frequencies};
pub use stopwords::{Language, Stopwords};
