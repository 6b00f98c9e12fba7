//! Search-example input records.
//!
//! One record per line, whitespace-separated: `id query targets`, where
//! `query` is a single symbol and `targets` is a string each of whose
//! characters is one target for that query. A record therefore expands to
//! one (query, target) simulation unit per target character. The original
//! dataset came from flashcard confusion data, where one prompt is
//! commonly confused with several characters at once.

use std::fs::File;
use std::io::{BufRead, BufReader};

use crate::error::{Result, SearchError};
use crate::symbol::Symbol;

/// Parse search examples from a reader, expanding each record into its
/// (query, target) pairs. Blank lines are skipped; anything else that does
/// not match the record shape is fatal.
pub fn read_search_examples<R: BufRead>(reader: R) -> Result<Vec<(Symbol, Symbol)>> {
    let mut pairs = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let mut fields = line.split_whitespace();
        let (Some(_id), Some(query), Some(targets), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(malformed(line_no, "expected `id query targets`"));
        };

        let mut query_chars = query.chars();
        let query = match (query_chars.next(), query_chars.next()) {
            (Some(c), None) => Symbol(c),
            _ => return Err(malformed(line_no, format!("query {query:?} is not a single symbol"))),
        };

        for target in targets.chars() {
            pairs.push((query, Symbol(target)));
        }
    }
    Ok(pairs)
}

/// Load search examples from a file.
pub fn load_search_examples(path: &std::path::Path) -> Result<Vec<(Symbol, Symbol)>> {
    read_search_examples(BufReader::new(File::open(path)?))
}

fn malformed(line: usize, reason: impl Into<String>) -> SearchError {
    SearchError::MalformedExample {
        line,
        reason: reason.into(),
    }
}
