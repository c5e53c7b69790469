//! # Introduction
//!
//! hdrcheck decides whether a line of text is a syntactically valid C-style
//! function declaration header, and answers interactively, one line at a
//! time.
//!
//! ## Validation pipeline
//!
//! ```text
//! Line → Lexer → Parser → verdict (bool)
//! ```
//!
//! 1. [`parser`] — tokenizes the line and walks the header grammar with one
//!    token of lookahead. The sole entry point is
//!    [`is_valid_function_header`].
//! 2. [`repl`] — the interactive shell around the recognizer.
//!
//! Two further modules carry an unrelated companion exercise:
//!
//! 3. [`grid`] — an N×M integer table and its minimum-positive scan.
//! 4. [`ui`] — ratatui form for the grid exercise; not part of the stable
//!    library API.
//!
//! ## Recognized headers
//!
//! Return type and parameter types from a fixed keyword set (`int`,
//! `double`, `float`, `char`, `bool`, `string`, `long`, `short`, `unsigned`,
//! plus `void`), multi-keyword combinations like `unsigned long`, `const` /
//! `static` / `volatile` parameter qualifiers, optional parameter names, and
//! an optional trailing `;`. No pointers, arrays, templates, or variadics —
//! the recognizer accepts or rejects, it never explains.

pub mod grid;
pub mod parser;
pub mod repl;
pub mod ui;

pub use parser::parser::is_valid_function_header;
