#![allow(unsafe_op_in_unsafe_fn)]
//! PyO3 extension module: a single stateless function taking pattern,
//! pattern marks, text, text marks, and a minimum match length, returning
//! a list of `(pattern_index, text_index, match_length)` tuples, plus a
//! `MatchError` exception raised on bad arguments.
use pyo3::create_exception;
use pyo3::exceptions::PyException;
use pyo3::prelude::*;

create_exception!(rkr_gst, MatchError, PyException);

/// `match(pattern, pattern_marks, text, text_marks, init_search_length)`
///
/// `pattern`/`text` are ASCII/bytes-like strings; `pattern_marks`/
/// `text_marks` are `'0'`/`'1'` strings (may be shorter than their input,
/// or empty). Raises `MatchError` if `init_search_length` cannot be
/// interpreted as a non-negative integer.
#[pyfunction]
#[pyo3(signature = (pattern, pattern_marks, text, text_marks, init_search_length))]
fn r#match(
    pattern: &str,
    pattern_marks: &str,
    text: &str,
    text_marks: &str,
    init_search_length: i64,
) -> PyResult<Vec<(usize, usize, usize)>> {
    if init_search_length < 0 {
        return Err(MatchError::new_err("init_search_length must be non-negative"));
    }

    let tiles = crate::match_strings(
        pattern.as_bytes(),
        text.as_bytes(),
        init_search_length as usize,
        pattern_marks.as_bytes(),
        text_marks.as_bytes(),
    );

    Ok(tiles
        .into_iter()
        .map(|t| (t.pattern_index, t.text_index, t.match_length))
        .collect())
}

#[pymodule]
fn rkr_gst(py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(r#match, m)?)?;
    m.add("MatchError", py.get_type::<MatchError>())?;
    Ok(())
}
