//! Python bindings for the questdown converter.
//!
//! The server side of the host application is Python; these bindings
//! let stored replies be rendered there with the same routine the
//! editor uses client-side.

use pyo3::prelude::*;

/// Convert reply markdown to an HTML fragment.
///
/// Args:
///     text: Raw reply text (restricted markdown subset)
///
/// Returns:
///     str: HTML fragment (empty string for empty input)
#[pyfunction]
#[pyo3(text_signature = "(text)")]
fn convert(text: &str) -> String {
    questdown_core::convert(text)
}

/// Render a generated message for insertion.
///
/// Input that already contains HTML (a closing ``</p>``, ``</h*>``,
/// or ``</div>``) is returned unchanged; anything else is converted.
///
/// Args:
///     text: Generated message text
///
/// Returns:
///     str: HTML fragment
#[pyfunction]
#[pyo3(text_signature = "(text)")]
fn render_message(text: &str) -> String {
    questdown_core::render_message(text).into_owned()
}

/// Check whether text already looks like an HTML fragment.
///
/// Args:
///     text: Text to inspect
///
/// Returns:
///     bool: True when the text would be passed through unconverted
#[pyfunction]
#[pyo3(text_signature = "(text)")]
fn is_html_fragment(text: &str) -> bool {
    questdown_core::is_html_fragment(text)
}

/// Questdown - markdown-to-HTML conversion for AI replies.
#[pymodule]
fn pyqd(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(convert, m)?)?;
    m.add_function(wrap_pyfunction!(render_message, m)?)?;
    m.add_function(wrap_pyfunction!(is_html_fragment, m)?)?;
    Ok(())
}
