//! Recursive descent recognizer for function headers
//!
//! The grammar, with token kinds in caps:
//!
//! ```text
//! header     ::= type IDENTIFIER LPAREN param_list? RPAREN SEMICOLON? END
//! type       ::= (TYPE | VOID) TYPE*
//! param_list ::= VOID
//!              | parameter (COMMA parameter)*
//! parameter  ::= qualifier* type IDENTIFIER? (LPAREN RPAREN)?
//! qualifier  ::= IDENTIFIER with text "const" | "static" | "volatile"
//! ```
//!
//! Each rule is a method consuming tokens through a single buffered
//! lookahead. There is no backtracking: a hard mismatch unwinds the whole
//! parse through `eat`, the one place a mismatch can originate, and the
//! public entry point folds it into `false`. The recognizer reports nothing
//! beyond accept/reject.

use super::lexer::{Lexer, Token, TokenKind};

/// Marker for a hard grammar mismatch. Deliberately empty: no message, no
/// position. Anything the rules could say is discarded at the entry point.
#[derive(Debug)]
struct Mismatch;

/// Recursive descent parser over one input line. Holds the lexer and exactly
/// one token of lookahead; lives for a single validation call.
pub struct Parser {
    lexer: Lexer,
    current: Token,
}

impl Parser {
    /// Create a parser for the given line, priming the lookahead with the
    /// first token.
    pub fn new(input: &str) -> Self {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token();
        Self { lexer, current }
    }

    /// Returns true iff the whole input is one function header. Never
    /// panics; every internal mismatch becomes `false`.
    pub fn parse_function_header(&mut self) -> bool {
        self.parse_header().is_ok()
    }

    fn parse_header(&mut self) -> Result<(), Mismatch> {
        if !self.parse_type_specifier() {
            return Err(Mismatch);
        }
        self.eat(TokenKind::Identifier)?;
        self.eat(TokenKind::LParen)?;
        self.parse_parameter_list()?;
        self.eat(TokenKind::RParen)?;

        // Trailing terminator is optional: definitions drop it.
        if self.check(TokenKind::Semicolon) {
            self.advance();
        }

        // The grammar must cover the whole line; a leftover token rejects.
        if self.check(TokenKind::End) {
            Ok(())
        } else {
            Err(Mismatch)
        }
    }

    /// Match a type: one base keyword (`void` counts), then any run of
    /// further type keywords, which is what makes `unsigned long` or
    /// `long long int` a single type. Consumes nothing on non-match.
    fn parse_type_specifier(&mut self) -> bool {
        if self.check(TokenKind::Type) || self.check(TokenKind::Void) {
            self.advance();
            while self.check(TokenKind::Type) {
                self.advance();
            }
            true
        } else {
            false
        }
    }

    fn parse_parameter_list(&mut self) -> Result<(), Mismatch> {
        // A lone `void` spells an explicitly empty list.
        if self.check(TokenKind::Void) {
            self.advance();
            return Ok(());
        }

        // The first parameter is attempted softly: if nothing matches, the
        // list is empty (the `()` case) and the closing-paren check in the
        // caller decides whether whatever is here instead is acceptable.
        if self.parse_parameter() {
            while self.check(TokenKind::Comma) {
                self.advance();
                // After a comma a parameter is mandatory.
                if !self.parse_parameter() {
                    return Err(Mismatch);
                }
            }
        }
        Ok(())
    }

    /// Attempt to match one parameter. All consumption is check-guarded, so
    /// `false` means "did not match here", never a hard error; the caller
    /// decides what that means at its position.
    fn parse_parameter(&mut self) -> bool {
        while self.is_qualifier() {
            self.advance();
        }

        if !self.parse_type_specifier() {
            return false;
        }

        if self.check(TokenKind::Identifier) {
            self.advance();

            // A redundant empty `()` after the name is tolerated, one pair
            // at most and nothing inside it.
            if self.check(TokenKind::LParen) {
                self.advance();
                if self.check(TokenKind::RParen) {
                    self.advance();
                } else {
                    return false;
                }
            }
        }

        true
    }

    /// Qualifiers are lexically identifiers; only their spelling sets them
    /// apart.
    fn is_qualifier(&self) -> bool {
        self.check(TokenKind::Identifier)
            && matches!(
                self.current.text.as_str(),
                "const" | "static" | "volatile"
            )
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// Refill the lookahead from the lexer, consuming the current token.
    fn advance(&mut self) {
        self.current = self.lexer.next_token();
    }

    /// Consume the expected token kind or fail. The only origin of a hard
    /// mismatch.
    fn eat(&mut self, kind: TokenKind) -> Result<(), Mismatch> {
        if self.check(kind) {
            self.advance();
            Ok(())
        } else {
            Err(Mismatch)
        }
    }
}

/// Decide whether `text` is a syntactically valid function header. The whole
/// external contract: a fresh lexer/parser pair per call, a bare verdict
/// back.
pub fn is_valid_function_header(text: &str) -> bool {
    let mut parser = Parser::new(text);
    parser.parse_function_header()
}
