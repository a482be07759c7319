//! # Questdown Core
//!
//! Converts the restricted markdown subset produced by an AI reply
//! service into an HTML fragment for insertion into a rich-text
//! editor.
//!
//! The converter is a total, pure function over strings: it holds no
//! state, performs no I/O, and never fails. Malformed or adversarial
//! markdown degrades to literal text. It is safe to call concurrently
//! from any number of call sites.
//!
//! ## Quick Start
//!
//! ```rust
//! use questdown_core::convert;
//!
//! let html = convert("# Title\n\nSome **bold** text.");
//! assert_eq!(html, "<h1>Title</h1>\n<p>Some <strong>bold</strong> text.</p>");
//! ```
//!
//! ## Dispatch
//!
//! Generated messages sometimes arrive already formatted as HTML.
//! [`render_message`] is the shared entry point that skips conversion
//! in that case:
//!
//! ```rust
//! use questdown_core::render_message;
//!
//! assert_eq!(render_message("<p>done</p>"), "<p>done</p>");
//! assert_eq!(render_message("*new*"), "<p><em>new</em></p>");
//! ```
//!
//! ## Pipeline
//!
//! Lines are tagged (blank / heading / list item / code / plain)
//! before any inline or paragraph processing, so fenced code is
//! opaque to every other rule. See [`classify`] for the tagged
//! representation and [`render`] for block assembly.

pub mod classify;
pub mod inline;
pub mod line;
pub mod render;

pub use classify::{classify, ListKind, Tagged};
pub use render::{convert, is_html_fragment, render_message};
