use tracing::trace;

use crate::interpreter::{
    lexer::TokenKind,
    parser::core::{ParseResult, Parser},
    symbol_table::SymbolTable,
};

impl Parser {
    /// Parses a whole program and returns its final bindings.
    ///
    /// Grammar: `program := assignment* END`
    ///
    /// Assignments are parsed until the scanner reports the end of input.
    /// Any token other than an identifier at the top level is rejected by
    /// [`Parser::parse_assignment`].
    ///
    /// # Errors
    /// Propagates the first lexical or syntax error; nothing is returned for
    /// a partially valid program.
    pub fn parse_program(mut self) -> ParseResult<SymbolTable> {
        while self.peek() != TokenKind::EndOfInput {
            self.parse_assignment()?;
        }
        Ok(self.symbols)
    }

    /// Parses one assignment and binds its value.
    ///
    /// Grammar: `assignment := IDENTIFIER "=" expr ";"`
    ///
    /// The binding is made only after the closing `;`, so the right-hand side
    /// cannot read the variable being assigned unless an earlier statement
    /// bound it.
    ///
    /// # Errors
    /// - `UnexpectedToken` if the statement does not start with an
    ///   identifier, or `=` or `;` is missing.
    /// - Propagates errors from [`Parser::parse_expr`].
    pub(in crate::interpreter::parser) fn parse_assignment(&mut self) -> ParseResult<()> {
        if self.peek() != TokenKind::Identifier {
            return Err(self.unexpected(TokenKind::Identifier));
        }
        let name = std::mem::take(&mut self.current.lexeme);
        self.advance()?;

        self.expect(TokenKind::Assign)?;
        let value = self.parse_expr()?;
        self.expect(TokenKind::Semicolon)?;

        trace!(name = name.as_str(), value, "assigned");
        self.symbols.assign(name, value);
        Ok(())
    }
}
