use logos::Logos;
use tracing::trace;

use crate::error::LexError;

/// Classifies a lexeme.
///
/// The scanner tries the single-character operators first, then identifiers,
/// then integer literals. Their first characters never overlap, so the first
/// character alone decides which rule applies. Anything the scanner does not
/// recognise becomes a [`TokenKind::Invalid`] token one character wide.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `=`
    #[token("=")]
    Assign,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Variable names such as `x` or `x_2`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    /// Integer literal tokens, such as `42`. Leading zeros are rejected by
    /// [`Lexer::next_token`].
    #[regex(r"[0-9]+")]
    IntegerLiteral,
    /// A single unrecognised character.
    Invalid,
    /// Reported once the input is exhausted, and on every call after that.
    EndOfInput,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Assign => "`=`",
            Self::Semicolon => "`;`",
            Self::Plus => "`+`",
            Self::Minus => "`-`",
            Self::Star => "`*`",
            Self::LParen => "`(`",
            Self::RParen => "`)`",
            Self::Identifier => "identifier",
            Self::IntegerLiteral => "integer literal",
            Self::Invalid => "invalid character",
            Self::EndOfInput => "end of input",
        };
        f.write_str(name)
    }
}

/// A lexeme together with its classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The matched source text. Empty for [`TokenKind::EndOfInput`].
    pub lexeme: String,
    /// What the lexeme is.
    pub kind:   TokenKind,
    /// The parsed value, present exactly for [`TokenKind::IntegerLiteral`].
    pub value:  Option<i64>,
}

impl Token {
    /// The token reported once the input is exhausted.
    #[must_use]
    pub const fn end_of_input() -> Self {
        Self { lexeme: String::new(),
               kind:   TokenKind::EndOfInput,
               value:  None, }
    }
}

/// Pull-based scanner over whitespace-free source text.
///
/// All whitespace is removed before scanning, including whitespace between
/// characters that would otherwise form separate tokens: `a b` scans as the
/// single identifier `ab`. See [`is_blank`] for which characters count.
///
/// # Examples
/// ```
/// use tally::interpreter::lexer::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("x = 4 2;");
/// let kinds: Vec<TokenKind> = lexer.by_ref()
///                                  .map(|token| token.map(|t| t.kind))
///                                  .collect::<Result<_, _>>()
///                                  .unwrap();
/// assert_eq!(kinds,
///            [TokenKind::Identifier,
///             TokenKind::Assign,
///             TokenKind::IntegerLiteral,
///             TokenKind::Semicolon]);
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::EndOfInput);
/// ```
#[derive(Debug, Clone)]
pub struct Lexer {
    text:   String,
    cursor: usize,
    halted: bool,
}

impl Lexer {
    /// Creates a scanner over `source` with all whitespace removed.
    #[must_use]
    pub fn new(source: &str) -> Self {
        Self { text:   source.chars().filter(|&c| !is_blank(c)).collect(),
               cursor: 0,
               halted: false, }
    }

    /// Returns the byte offset of the next unread character in the
    /// whitespace-free text.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.cursor
    }

    /// Consumes and returns the next token.
    ///
    /// Once the text is exhausted this keeps returning
    /// [`TokenKind::EndOfInput`].
    ///
    /// # Errors
    /// - [`LexError::LeadingZero`] for a literal such as `007`.
    /// - [`LexError::LiteralOutOfRange`] for a literal that does not fit in
    ///   an `i64`.
    ///
    /// The cursor does not move past a rejected literal.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        let rest = &self.text[self.cursor..];
        let mut scanner = TokenKind::lexer(rest);

        let (kind, len) = match scanner.next() {
            None => return Ok(Token::end_of_input()),
            Some(Ok(kind)) => (kind, scanner.span().end),
            Some(Err(())) => (TokenKind::Invalid, rest.chars().next().map_or(1, char::len_utf8)),
        };
        let lexeme = &rest[..len];

        let value = if kind == TokenKind::IntegerLiteral {
            Some(parse_literal(lexeme, self.cursor)?)
        } else {
            None
        };

        trace!(position = self.cursor, ?kind, lexeme, "scanned token");
        self.cursor += len;

        Ok(Token { lexeme: lexeme.to_string(),
                   kind,
                   value })
    }
}

impl Iterator for Lexer {
    type Item = Result<Token, LexError>;

    /// Yields every token before [`TokenKind::EndOfInput`], then `None`.
    /// Stops for good after yielding an error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.halted {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.kind == TokenKind::EndOfInput => None,
            Ok(token) => Some(Ok(token)),
            Err(e) => {
                self.halted = true;
                Some(Err(e))
            },
        }
    }
}

/// Returns `true` for the characters stripped before scanning.
///
/// This is the ECMAScript `\s` class: Unicode `White_Space` without U+0085
/// (NEXT LINE), plus U+FEFF (byte-order mark). A file saved with a
/// byte-order mark therefore scans like one without, while U+0085 is an
/// invalid character.
#[must_use]
pub fn is_blank(c: char) -> bool {
    match c {
        '\u{85}' => false,
        '\u{feff}' => true,
        _ => c.is_whitespace(),
    }
}

/// Converts a digit run into its value.
///
/// A literal is either `0` or a nonzero digit followed by any digits, and it
/// must fit in an `i64`.
fn parse_literal(literal: &str, position: usize) -> Result<i64, LexError> {
    if literal.len() > 1 && literal.starts_with('0') {
        return Err(LexError::LeadingZero { literal: literal.to_string(),
                                           position });
    }
    literal.parse().map_err(|_| LexError::LiteralOutOfRange { literal: literal.to_string(),
                                                              position })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new(source).map(|token| token.unwrap().kind)
                          .collect()
    }

    fn lexemes(source: &str) -> Vec<String> {
        Lexer::new(source).map(|token| token.unwrap().lexeme)
                          .collect()
    }

    #[test]
    fn scans_every_operator() {
        use TokenKind::{Assign, LParen, Minus, Plus, RParen, Semicolon, Star};

        assert_eq!(kinds("=;+-*()"), [Assign, Semicolon, Plus, Minus, Star, LParen, RParen]);
    }

    #[test]
    fn scans_an_assignment() {
        use TokenKind::{Assign, Identifier, IntegerLiteral, Plus, Semicolon};

        assert_eq!(kinds("y = x + 3;"),
                   [Identifier, Assign, Identifier, Plus, IntegerLiteral, Semicolon]);
        assert_eq!(lexemes("y = x + 3;"), ["y", "=", "x", "+", "3", ";"]);
    }

    #[test]
    fn whitespace_is_removed_before_scanning() {
        assert_eq!(lexemes("ab c\t_d\n1"), ["abc_d1"]);
        assert_eq!(lexemes("1 2\r\n3"), ["123"]);
    }

    #[test]
    fn identifiers_take_letters_digits_and_underscores() {
        assert_eq!(lexemes("x_2"), ["x_2"]);
        assert_eq!(lexemes("_"), ["_"]);
        assert_eq!(kinds("Abc9"), [TokenKind::Identifier]);
    }

    #[test]
    fn digits_then_letters_split_into_two_tokens() {
        assert_eq!(kinds("0x"), [TokenKind::IntegerLiteral, TokenKind::Identifier]);
        assert_eq!(lexemes("12ab"), ["12", "ab"]);
    }

    #[test]
    fn zero_is_a_valid_literal() {
        assert_eq!(lexemes("0"), ["0"]);
        assert_eq!(lexemes("10"), ["10"]);
    }

    #[test]
    fn leading_zero_literal_is_rejected() {
        let mut lexer = Lexer::new("x=007;");
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Identifier);
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Assign);
        let error = lexer.next_token().unwrap_err();
        assert_eq!(error,
                   LexError::LeadingZero { literal:  "007".to_string(),
                                           position: 2, });
        assert_eq!(error.position(), lexer.position());
    }

    #[test]
    fn whitespace_cannot_hide_a_leading_zero() {
        let mut lexer = Lexer::new("0 1");
        assert!(matches!(lexer.next_token(), Err(LexError::LeadingZero { .. })));
    }

    #[test]
    fn oversized_literal_is_rejected() {
        let mut lexer = Lexer::new("99999999999999999999");
        assert!(matches!(lexer.next_token(), Err(LexError::LiteralOutOfRange { .. })));

        let mut lexer = Lexer::new("x=99999999999999999999");
        lexer.next_token().unwrap();
        lexer.next_token().unwrap();
        assert_eq!(lexer.next_token().unwrap_err().position(), 2);

        let mut lexer = Lexer::new("9223372036854775807");
        let token = lexer.next_token().unwrap();
        assert_eq!(token.kind, TokenKind::IntegerLiteral);
        assert_eq!(token.value, Some(i64::MAX));
    }

    #[test]
    fn only_literals_carry_a_value() {
        let values: Vec<Option<i64>> = Lexer::new("x=40+2;").map(|token| token.unwrap().value)
                                                            .collect();
        assert_eq!(values, [None, None, Some(40), None, Some(2), None]);
    }

    #[test]
    fn byte_order_mark_is_stripped() {
        assert_eq!(lexemes("\u{feff}x=1;"), ["x", "=", "1", ";"]);
        assert_eq!(lexemes("a\u{feff}b"), ["ab"]);
    }

    #[test]
    fn unicode_spaces_are_stripped() {
        assert_eq!(lexemes("x\u{a0}=\u{2003}1\u{3000};\u{2028}"), ["x", "=", "1", ";"]);
    }

    #[test]
    fn next_line_character_is_not_whitespace() {
        assert_eq!(kinds("x\u{85}"), [TokenKind::Identifier, TokenKind::Invalid]);
        assert!(!is_blank('\u{85}'));
        assert!(is_blank('\u{feff}'));
        assert!(is_blank('\x0b'));
    }

    #[test]
    fn unknown_characters_are_single_invalid_tokens() {
        use TokenKind::{Identifier, Invalid};

        assert_eq!(kinds("a/b"), [Identifier, Invalid, Identifier]);
        assert_eq!(lexemes("é$"), ["é", "$"]);
    }

    #[test]
    fn end_of_input_is_idempotent() {
        let mut lexer = Lexer::new("x");
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Identifier);
        for _ in 0..3 {
            assert_eq!(lexer.next_token(), Ok(Token::end_of_input()));
            assert_eq!(lexer.position(), 1);
        }
    }

    #[test]
    fn empty_and_blank_input_end_immediately() {
        assert_eq!(Lexer::new("").next_token(), Ok(Token::end_of_input()));
        assert_eq!(Lexer::new(" \n\t ").next_token(), Ok(Token::end_of_input()));
    }

    #[test]
    fn iterator_halts_after_an_error() {
        let mut lexer = Lexer::new("00;x");
        assert!(matches!(lexer.next(), Some(Err(LexError::LeadingZero { .. }))));
        assert!(lexer.next().is_none());
    }
}
