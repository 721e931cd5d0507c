#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while scanning tokens.
///
/// Positions are byte offsets into the source after whitespace removal.
pub enum LexError {
    /// An integer literal with more than one digit started with `0`.
    LeadingZero {
        /// The offending literal, e.g. `007`.
        literal:  String,
        /// Where the literal starts.
        position: usize,
    },
    /// An integer literal does not fit in an `i64`.
    LiteralOutOfRange {
        /// The offending literal.
        literal:  String,
        /// Where the literal starts.
        position: usize,
    },
}

impl LexError {
    /// Returns the offset where the rejected literal starts.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::LeadingZero { position, .. } | Self::LiteralOutOfRange { position, .. } => {
                *position
            },
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LeadingZero { literal, position } => {
                write!(f,
                       "at offset {position}: integer literal `{literal}` has a leading zero.")
            },
            Self::LiteralOutOfRange { literal, position } => {
                write!(f, "at offset {position}: integer literal `{literal}` is too large.")
            },
        }
    }
}

impl std::error::Error for LexError {}
