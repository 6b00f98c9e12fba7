//! Trace records and the line-oriented trace file codec.
//!
//! A trace is one simulated `(query, target, path)` record. The file
//! format is UTF-8 text, one record per line, tab-separated:
//!
//! ```text
//! #query\ttarget\tvia
//! 人\t入\t[]              success, direct hop
//! 人\t太\t[大]            success via 大
//! 椅\t(持)\t[時間]        partial failure, walk was 椅→時→間
//! 一\t(二)\tNone          total failure, no walk attempted
//! ```
//!
//! The outcome class is derived from the row shape, not stored: a bare
//! target means success (`via` lists the symbols strictly between query
//! and target), a parenthesized target with a bracketed `via` means the
//! walk happened but never arrived (`via` is the whole path after the
//! query), and a parenthesized target with the literal `None` means no
//! walk was attempted at all.
//!
//! Any line that violates this grammar is fatal: a trace file is the
//! complete record of a run, and silently dropping rows would bias every
//! statistic computed from it.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};
use crate::symbol::{Path, Symbol};

/// The mandatory first line of a trace file.
pub const TRACE_HEADER: &str = "#query\ttarget\tvia";

/// One simulated search record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    pub query: Symbol,
    pub target: Symbol,
    /// The walked path, starting at `query`; `None` when no search could
    /// be attempted.
    pub path: Option<Path>,
}

/// Outcome of one simulated search, derived from the trace itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The walk reached the target.
    Success,
    /// A walk happened but stalled or ran out of depth budget.
    PartialFailure,
    /// No walk could be attempted (oracle lacked data for an endpoint).
    TotalFailure,
}

impl Trace {
    /// Build a trace, asserting the path invariant in debug builds.
    pub fn new(query: Symbol, target: Symbol, path: Option<Path>) -> Self {
        if let Some(p) = &path {
            debug_assert_eq!(p.first(), Some(&query), "path must start at the query");
        }
        Self { query, target, path }
    }

    /// Classify this trace.
    pub fn outcome(&self) -> Outcome {
        match &self.path {
            Some(path) if path.last() == Some(&self.target) => Outcome::Success,
            Some(_) => Outcome::PartialFailure,
            None => Outcome::TotalFailure,
        }
    }
}

/// Serialize traces to a writer, header first.
pub fn write_traces<W: Write>(writer: &mut W, traces: &[Trace]) -> Result<()> {
    writeln!(writer, "{TRACE_HEADER}")?;
    for trace in traces {
        check_symbol(trace.query)?;
        check_symbol(trace.target)?;
        match (&trace.path, trace.outcome()) {
            (Some(path), Outcome::Success) => {
                // Successful paths hold at least [query, target].
                let inner = if path.len() >= 2 { &path[1..path.len() - 1] } else { &[][..] };
                let via: String = inner
                    .iter()
                    .map(|s| {
                        check_symbol(*s)?;
                        Ok(s.as_char())
                    })
                    .collect::<Result<String>>()?;
                writeln!(writer, "{}\t{}\t[{}]", trace.query, trace.target, via)?;
            }
            (Some(path), _) => {
                let via: String = path[1..]
                    .iter()
                    .map(|s| {
                        check_symbol(*s)?;
                        Ok(s.as_char())
                    })
                    .collect::<Result<String>>()?;
                writeln!(writer, "{}\t({})\t[{}]", trace.query, trace.target, via)?;
            }
            (None, _) => {
                writeln!(writer, "{}\t({})\tNone", trace.query, trace.target)?;
            }
        }
    }
    Ok(())
}

/// Parse traces from a reader. Any grammar violation aborts the whole
/// load.
pub fn read_traces<R: BufRead>(reader: R) -> Result<Vec<Trace>> {
    let mut lines = reader.lines();

    let header = lines
        .next()
        .transpose()?
        .ok_or_else(|| malformed(1, "empty file, expected header"))?;
    if header != TRACE_HEADER {
        return Err(malformed(1, format!("bad header {header:?}")));
    }

    let mut traces = Vec::new();
    for (idx, line) in lines.enumerate() {
        let line_no = idx + 2;
        let line = line?;
        traces.push(parse_line(&line, line_no)?);
    }
    Ok(traces)
}

/// Write traces to a file.
pub fn dump(traces: &[Trace], path: &std::path::Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_traces(&mut writer, traces)?;
    writer.flush()?;
    Ok(())
}

/// Read traces from a file.
pub fn load(path: &std::path::Path) -> Result<Vec<Trace>> {
    read_traces(BufReader::new(File::open(path)?))
}

fn parse_line(line: &str, line_no: usize) -> Result<Trace> {
    let mut fields = line.split('\t');
    let (Some(query), Some(target), Some(via), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(malformed(line_no, "expected exactly 3 tab-separated fields"));
    };

    let query = single_symbol(query, line_no, "query")?;

    // A bare single character marks success; `(c)` marks failure.
    let (target, was_success) = if let Some(inner) =
        target.strip_prefix('(').and_then(|t| t.strip_suffix(')'))
    {
        (single_symbol(inner, line_no, "target")?, false)
    } else {
        (single_symbol(target, line_no, "target")?, true)
    };

    let path = if via == "None" {
        if was_success {
            return Err(malformed(line_no, "successful row cannot have via None"));
        }
        None
    } else {
        let Some(inner) = via.strip_prefix('[').and_then(|v| v.strip_suffix(']')) else {
            return Err(malformed(line_no, format!("bad via field {via:?}")));
        };
        let mut path: Path = vec![query];
        path.extend(inner.chars().map(Symbol));
        if was_success {
            path.push(target);
        }
        Some(path)
    };

    Ok(Trace { query, target, path })
}

fn single_symbol(field: &str, line_no: usize, name: &str) -> Result<Symbol> {
    let mut chars = field.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(Symbol(c)),
        _ => Err(malformed(
            line_no,
            format!("{name} field {field:?} is not a single symbol"),
        )),
    }
}

fn malformed(line: usize, reason: impl Into<String>) -> SearchError {
    SearchError::MalformedTrace {
        line,
        reason: reason.into(),
    }
}

/// Symbols that would collide with the grammar cannot be written. The
/// alphabet is written characters, so in practice this only rejects
/// corrupted input.
fn check_symbol(s: Symbol) -> Result<()> {
    let c = s.as_char();
    if matches!(c, '\t' | '\n' | '\r' | '(' | ')' | '[' | ']') || c.is_control() {
        return Err(SearchError::ReservedSymbol(s));
    }
    Ok(())
}
