use crate::{
    error::SyntaxError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser {
    /// Parses and evaluates a single operand.
    ///
    /// Prefix operators nest, so `---x` is `-(-(-x))`.
    ///
    /// Grammar:
    /// ```text
    ///     factor := INTEGER
    ///             | IDENTIFIER
    ///             | "+" factor
    ///             | "-" factor
    ///             | "(" expr ")"
    /// ```
    ///
    /// # Errors
    /// - `UnknownVariable` if an identifier has no earlier binding.
    /// - `ExpectedFactor` if the current token cannot start an operand.
    /// - `UnexpectedToken` if a group is not closed with `)`.
    pub(in crate::interpreter::parser) fn parse_factor(&mut self) -> ParseResult<i64> {
        match (self.peek(), self.current.value) {
            (TokenKind::IntegerLiteral, Some(value)) => {
                self.advance()?;
                Ok(value)
            },
            (TokenKind::Identifier, _) => self.parse_variable(),
            (TokenKind::Plus, _) => {
                self.advance()?;
                self.parse_factor()
            },
            (TokenKind::Minus, _) => {
                self.advance()?;
                Ok(self.parse_factor()?.wrapping_neg())
            },
            (TokenKind::LParen, _) => {
                self.advance()?;
                let value = self.parse_expr()?;
                self.expect(TokenKind::RParen)?;
                Ok(value)
            },
            (found, _) => Err(SyntaxError::ExpectedFactor { found,
                                                            lexeme: self.current.lexeme.clone(),
                                                            position: self.position }.into()),
        }
    }

    fn parse_variable(&mut self) -> ParseResult<i64> {
        let Some(value) = self.symbols.get(&self.current.lexeme) else {
            return Err(SyntaxError::UnknownVariable { name:     self.current.lexeme.clone(),
                                                      position: self.position, }.into());
        };
        self.advance()?;
        Ok(value)
    }
}
