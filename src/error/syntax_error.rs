use crate::interpreter::lexer::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing and evaluating.
///
/// Positions are byte offsets into the source after whitespace removal and
/// point at the start of the token that was rejected.
pub enum SyntaxError {
    /// A specific kind of token was required but another one was found.
    UnexpectedToken {
        /// The kind the grammar required at this point.
        expected: TokenKind,
        /// The kind that was actually found.
        found:    TokenKind,
        /// The lexeme that was actually found.
        lexeme:   String,
        /// Where the rejected token starts.
        position: usize,
    },
    /// An operand (literal, variable, unary operator or `(`) was required.
    ExpectedFactor {
        /// The kind that was actually found.
        found:    TokenKind,
        /// The lexeme that was actually found.
        lexeme:   String,
        /// Where the rejected token starts.
        position: usize,
    },
    /// A variable was read before any assignment bound it.
    UnknownVariable {
        /// The name of the variable.
        name:     String,
        /// Where the reference starts.
        position: usize,
    },
}

impl SyntaxError {
    /// Returns `true` for references to unbound variables, the name-error
    /// refinement of a syntax error.
    #[must_use]
    pub const fn is_name_error(&self) -> bool {
        matches!(self, Self::UnknownVariable { .. })
    }

    /// Returns the offset of the rejected token.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::ExpectedFactor { position, .. }
            | Self::UnknownVariable { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected,
                                    found,
                                    lexeme,
                                    position, } => {
                if lexeme.is_empty() {
                    write!(f, "at offset {position}: expected {expected}, found {found}.")
                } else {
                    write!(f,
                           "at offset {position}: expected {expected}, found {found} `{lexeme}`.")
                }
            },
            Self::ExpectedFactor { found,
                                   lexeme,
                                   position, } => {
                if lexeme.is_empty() {
                    write!(f, "at offset {position}: expected an operand, found {found}.")
                } else {
                    write!(f,
                           "at offset {position}: expected an operand, found {found} `{lexeme}`.")
                }
            },
            Self::UnknownVariable { name, position } => {
                write!(f, "at offset {position}: unknown variable `{name}`.")
            },
        }
    }
}

impl std::error::Error for SyntaxError {}
