/// Lexical errors.
///
/// Raised while the scanner turns source text into tokens: a literal that
/// breaks a lexical rule (such as a leading zero) or does not fit the native
/// integer range.
pub mod lex_error;
/// Syntax errors.
///
/// Raised while the parser walks the grammar: a token of the wrong kind, a
/// missing operand, or a reference to a variable that has no binding yet.
pub mod syntax_error;

pub use lex_error::LexError;
pub use syntax_error::SyntaxError;

/// Any failure that rejects a program.
///
/// Every error is fatal to the whole program; there is no recovery and no
/// partial symbol table is ever returned alongside one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The scanner could not produce a valid token.
    Lex(LexError),
    /// The token stream does not follow the grammar.
    Syntax(SyntaxError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "Lexical error: {e}"),
            Self::Syntax(e) => write!(f, "Syntax error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Syntax(e) => Some(e),
        }
    }
}

impl From<LexError> for Error {
    fn from(error: LexError) -> Self {
        Self::Lex(error)
    }
}

impl From<SyntaxError> for Error {
    fn from(error: SyntaxError) -> Self {
        Self::Syntax(error)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn wraps_phase_errors_as_source() {
        let error = Error::from(LexError::LeadingZero { literal:  "007".to_string(),
                                                        position: 2, });
        assert!(matches!(error, Error::Lex(LexError::LeadingZero { .. })));
        assert!(error.source().is_some());
        assert_eq!(error.to_string(),
                   "Lexical error: at offset 2: integer literal `007` has a leading zero.");
    }
}
