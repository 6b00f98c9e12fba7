//! Error types for glyphwalk.

use thiserror::Error;

use crate::symbol::Symbol;

/// Errors that can occur while building oracles, running simulations, or
/// reading/writing trace files.
///
/// `UnknownSymbol` is recovered per (query, target) pair: the affected
/// search returns no path and the run continues. The file-format and
/// configuration variants are fatal and abort the whole operation.
#[derive(Debug, Error)]
pub enum SearchError {
    /// A symbol has no entry in the backing graph or stroke database.
    #[error("unknown symbol: {0}")]
    UnknownSymbol(Symbol),

    /// A trace file line violates the `#query\ttarget\tvia` grammar.
    #[error("malformed trace line {line}: {reason}")]
    MalformedTrace { line: usize, reason: String },

    /// A search-example record does not parse as `id query targets`.
    #[error("malformed search example at line {line}: {reason}")]
    MalformedExample { line: usize, reason: String },

    /// A symbol that cannot be represented in the trace grammar.
    #[error("symbol {0:?} collides with the trace grammar")]
    ReservedSymbol(Symbol),

    /// Unrecognized strategy name.
    #[error("unknown search strategy: {0:?}")]
    InvalidStrategy(String),

    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O error (reading backing data, writing trace files).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for glyphwalk operations.
pub type Result<T> = std::result::Result<T, SearchError>;
