use crate::{
    error::{Error, SyntaxError},
    interpreter::{
        lexer::{Lexer, Token, TokenKind},
        symbol_table::SymbolTable,
    },
};

/// Result type used by the parser.
///
/// Scanning happens on demand while parsing, so both lexical and syntax
/// errors surface here.
pub type ParseResult<T> = Result<T, Error>;

/// Predictive recursive-descent parser that evaluates as it goes.
///
/// Each grammar rule is a method that inspects the current token to pick its
/// alternative, consumes what it recognises and returns the rule's integer
/// value. There is no syntax tree: completed assignments are written straight
/// into the symbol table.
///
/// Nesting depth of parentheses and prefix operators is limited only by the
/// call stack.
#[derive(Debug)]
pub struct Parser {
    lexer: Lexer,
    /// The single token of lookahead.
    pub(in crate::interpreter::parser) current:  Token,
    /// Offset of `current` in the whitespace-free text.
    pub(in crate::interpreter::parser) position: usize,
    pub(in crate::interpreter::parser) symbols:  SymbolTable,
}

impl Parser {
    /// Creates a parser over `source` and reads the first token.
    ///
    /// # Errors
    /// Returns a lexical error if the first token is a rejected literal.
    pub fn new(source: &str) -> ParseResult<Self> {
        let mut lexer = Lexer::new(source);
        let position = lexer.position();
        let current = lexer.next_token()?;

        Ok(Self { lexer,
                  current,
                  position,
                  symbols: SymbolTable::new() })
    }

    /// Returns the kind of the current token.
    #[must_use]
    pub const fn peek(&self) -> TokenKind {
        self.current.kind
    }

    /// Replaces the current token with the next one from the scanner.
    pub(in crate::interpreter::parser) fn advance(&mut self) -> ParseResult<()> {
        self.position = self.lexer.position();
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    /// Consumes the current token if it has the `expected` kind.
    ///
    /// # Errors
    /// Returns [`SyntaxError::UnexpectedToken`] otherwise.
    pub(in crate::interpreter::parser) fn expect(&mut self,
                                                 expected: TokenKind)
                                                 -> ParseResult<()> {
        if self.current.kind == expected {
            self.advance()
        } else {
            Err(self.unexpected(expected))
        }
    }

    /// Builds the error for finding the current token where `expected` was
    /// required.
    pub(in crate::interpreter::parser) fn unexpected(&self, expected: TokenKind) -> Error {
        SyntaxError::UnexpectedToken { expected,
                                       found: self.current.kind,
                                       lexeme: self.current.lexeme.clone(),
                                       position: self.position }.into()
    }
}
