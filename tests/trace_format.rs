//! File-level tests for the trace format.
//!
//! The inline codec tests cover the grammar; these cover whole-file
//! behaviour: headers, fatal aborts, and on-disk round-trips.

use glyphwalk::trace::{dump, load, read_traces, TRACE_HEADER};
use glyphwalk::{SearchError, Symbol, Trace};
use std::io::Cursor;

fn sym(c: char) -> Symbol {
    Symbol(c)
}

#[test]
fn header_line_is_exact() {
    assert_eq!(TRACE_HEADER, "#query\ttarget\tvia");

    // Close is not good enough: a leading '#' alone does not make a header.
    for bad in ["#query\ttarget\tpath", "query\ttarget\tvia", "#query target via", ""] {
        let input = format!("{bad}\n人\t入\t[]\n");
        let err = read_traces(Cursor::new(input)).unwrap_err();
        assert!(
            matches!(err, SearchError::MalformedTrace { line: 1, .. }),
            "header {bad:?} should be fatal"
        );
    }
}

#[test]
fn header_only_file_is_an_empty_trace_set() {
    let traces = read_traces(Cursor::new(format!("{TRACE_HEADER}\n"))).unwrap();
    assert!(traces.is_empty());
}

#[test]
fn one_bad_row_loses_the_whole_file() {
    let input = format!(
        "{TRACE_HEADER}\n人\t入\t[]\n椅\t(持)\t[時間]\n人\t入\tgarbage\n一\t(二)\tNone\n"
    );
    let err = read_traces(Cursor::new(input)).unwrap_err();
    assert!(matches!(err, SearchError::MalformedTrace { line: 4, .. }));
}

#[test]
fn disk_round_trip_preserves_everything() {
    let traces = vec![
        Trace::new(sym('人'), sym('入'), Some(vec![sym('人'), sym('入')])),
        Trace::new(
            sym('人'),
            sym('犬'),
            Some(vec![sym('人'), sym('大'), sym('犬')]),
        ),
        Trace::new(
            sym('椅'),
            sym('持'),
            Some(vec![sym('椅'), sym('時'), sym('間')]),
        ),
        Trace::new(sym('一'), sym('二'), None),
    ];

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run.traces");
    dump(&traces, &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with(TRACE_HEADER));
    assert_eq!(text.lines().count(), traces.len() + 1);

    let loaded = load(&path).unwrap();
    assert_eq!(loaded, traces);
    for (original, decoded) in traces.iter().zip(&loaded) {
        assert_eq!(original.outcome(), decoded.outcome());
    }
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load(&dir.path().join("nope.traces")).unwrap_err();
    assert!(matches!(err, SearchError::Io(_)));
}
