//! The atomic unit being searched over.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single written character (kanji, hanzi, kana, ...).
///
/// Opaque and immutable; equality and hashing are by the underlying scalar
/// value. Cheap to copy, so it is passed by value throughout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(pub char);

impl Symbol {
    /// The underlying character.
    pub fn as_char(self) -> char {
        self.0
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Symbol(c)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An ordered walk through the graph. `path[0]` is always the query symbol.
pub type Path = Vec<Symbol>;
