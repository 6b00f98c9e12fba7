//! Stroke edit distance between two characters.
//!
//! Every character decomposes into an ordered sequence of strokes drawn
//! from a small labelled inventory. The dissimilarity between two
//! characters is the unit-cost Levenshtein distance between their stroke
//! sequences. It is a pure function of the two decompositions, so the same
//! pair always yields the same value.
//!
//! The guided strategies use this only to break ties among candidate
//! neighbours; success or failure of a search never depends on it being a
//! good visual model.

use std::collections::HashMap;

use crate::error::{Result, SearchError};
use crate::symbol::Symbol;

/// Stroke-sequence database with a distance function over it.
#[derive(Debug, Clone, Default)]
pub struct StrokeEditDistance {
    strokes: HashMap<Symbol, Vec<String>>,
}

impl StrokeEditDistance {
    /// Create an empty database.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(symbol, stroke labels)` entries.
    pub fn from_entries<I, L, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Symbol, L)>,
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut db = Self::new();
        for (symbol, labels) in entries {
            db.insert(symbol, labels);
        }
        db
    }

    /// Record the stroke decomposition for `symbol`, replacing any
    /// previous entry.
    pub fn insert<L, S>(&mut self, symbol: Symbol, labels: L)
    where
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.strokes
            .insert(symbol, labels.into_iter().map(Into::into).collect());
    }

    /// Whether the underlying database has a decomposition for `symbol`.
    ///
    /// This reports data presence only; it says nothing about whether any
    /// distance involving `symbol` has been computed before.
    pub fn knows(&self, symbol: Symbol) -> bool {
        self.strokes.contains_key(&symbol)
    }

    /// Edit distance between the stroke sequences of `a` and `b`.
    ///
    /// Symmetric in value, deterministic, and nonnegative. Fails with
    /// [`SearchError::UnknownSymbol`] when either symbol has no
    /// decomposition on record.
    pub fn distance(&self, a: Symbol, b: Symbol) -> Result<f64> {
        let sa = self.strokes.get(&a).ok_or(SearchError::UnknownSymbol(a))?;
        let sb = self.strokes.get(&b).ok_or(SearchError::UnknownSymbol(b))?;
        Ok(levenshtein(sa, sb) as f64)
    }

    /// Number of symbols with a decomposition.
    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    /// Whether the database is empty.
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }
}

/// Two-row Levenshtein over stroke labels.
fn levenshtein(a: &[String], b: &[String]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, sa) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, sb) in b.iter().enumerate() {
            let subst = prev[j] + usize::from(sa != sb);
            curr[j + 1] = subst.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym(c: char) -> Symbol {
        Symbol(c)
    }

    fn sample() -> StrokeEditDistance {
        StrokeEditDistance::from_entries([
            (sym('人'), vec!["pie", "na"]),
            (sym('入'), vec!["pie", "na"]),
            (sym('大'), vec!["heng", "pie", "na"]),
            (sym('一'), vec!["heng"]),
        ])
    }

    #[test]
    fn identical_sequences_are_distance_zero() {
        let db = sample();
        assert_eq!(db.distance(sym('人'), sym('入')).unwrap(), 0.0);
        assert_eq!(db.distance(sym('大'), sym('大')).unwrap(), 0.0);
    }

    #[test]
    fn single_insertion_costs_one() {
        let db = sample();
        assert_eq!(db.distance(sym('人'), sym('大')).unwrap(), 1.0);
    }

    #[test]
    fn symmetric_in_value() {
        let db = sample();
        let ab = db.distance(sym('一'), sym('大')).unwrap();
        let ba = db.distance(sym('大'), sym('一')).unwrap();
        assert_eq!(ab, ba);
        assert_eq!(ab, 2.0);
    }

    #[test]
    fn unknown_symbol_fails() {
        let db = sample();
        assert!(db.distance(sym('人'), sym('無')).is_err());
        assert!(db.distance(sym('無'), sym('人')).is_err());
        assert!(!db.knows(sym('無')));
        assert!(db.knows(sym('人')));
    }

    #[test]
    fn levenshtein_empty_cases() {
        let a: Vec<String> = vec![];
        let b = vec!["heng".to_string(), "shu".to_string()];
        assert_eq!(levenshtein(&a, &b), 2);
        assert_eq!(levenshtein(&b, &a), 2);
        assert_eq!(levenshtein(&a, &a), 0);
    }
}
