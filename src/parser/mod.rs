//! Function header recognizer
//!
//! This module decides whether a line of text is a syntactically valid
//! C-style function declaration header:
//! - [`lexer`]: tokenization (line of text → tokens, pulled one at a time)
//! - [`parser`]: recursive descent over the header grammar (tokens → verdict)
//!
//! # Recognized shape
//!
//! ```text
//! header ::= type identifier "(" params? ")" ";"?
//! type   ::= type_keyword+            ("int", "unsigned long", "void", ...)
//! params ::= "void" | param ("," param)*
//! param  ::= qualifier* type identifier? ("(" ")")?
//! ```
//!
//! Only a fixed keyword set is accepted as a type; there is no semantic
//! checking and no diagnostics. The recognizer is a predicate: it answers
//! accept or reject, nothing else.
//!
//! # Implementation
//!
//! Hand-written lexer feeding a hand-written recursive descent parser with a
//! single buffered lookahead token. No external parser generator
//! dependencies.

pub mod lexer;
pub mod parser;
