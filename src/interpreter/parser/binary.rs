use crate::interpreter::{
    lexer::TokenKind,
    parser::core::{ParseResult, Parser},
};

impl Parser {
    /// Parses and evaluates an additive expression.
    ///
    /// Grammar:
    /// ```text
    ///     expr      := term expr_tail
    ///     expr_tail := ("+" | "-") term expr_tail | ε
    /// ```
    /// The value is the leading term plus the tail, so `1 - 2 - 3` is `-4`.
    pub(in crate::interpreter::parser) fn parse_expr(&mut self) -> ParseResult<i64> {
        let term = self.parse_term()?;
        Ok(term.wrapping_add(self.parse_expr_tail()?))
    }

    /// Sums every signed term in an additive tail; an empty tail is `0`.
    ///
    /// Subtraction adds the negated term.
    fn parse_expr_tail(&mut self) -> ParseResult<i64> {
        let mut total: i64 = 0;
        loop {
            let negate = match self.peek() {
                TokenKind::Plus => false,
                TokenKind::Minus => true,
                _ => break,
            };
            self.advance()?;
            let term = self.parse_term()?;
            total = total.wrapping_add(if negate { term.wrapping_neg() } else { term });
        }
        Ok(total)
    }

    /// Parses and evaluates a multiplicative expression.
    ///
    /// Grammar:
    /// ```text
    ///     term      := factor term_tail
    ///     term_tail := "*" factor term_tail | ε
    /// ```
    pub(in crate::interpreter::parser) fn parse_term(&mut self) -> ParseResult<i64> {
        let factor = self.parse_factor()?;
        Ok(factor.wrapping_mul(self.parse_term_tail()?))
    }

    /// Multiplies every factor in a multiplicative tail; an empty tail is `1`.
    fn parse_term_tail(&mut self) -> ParseResult<i64> {
        let mut product: i64 = 1;
        while self.peek() == TokenKind::Star {
            self.advance()?;
            product = product.wrapping_mul(self.parse_factor()?);
        }
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use crate::interpreter::parser::core::Parser;

    fn eval(expr: &str) -> i64 {
        let table = Parser::new(&format!("v = {expr};")).unwrap()
                                                        .parse_program()
                                                        .unwrap();
        table.get("v").unwrap()
    }

    #[test]
    fn subtraction_is_left_associative() {
        assert_eq!(eval("1 - 2 - 3"), -4);
        assert_eq!(eval("10 - 3 + 2"), 9);
    }

    #[test]
    fn multiplication_binds_tighter() {
        assert_eq!(eval("2 + 3 * 4"), 14);
        assert_eq!(eval("2 * 3 + 4"), 10);
        assert_eq!(eval("2 * 3 * 4 - 1"), 23);
    }

    #[test]
    fn tails_default_to_identities() {
        assert_eq!(eval("7"), 7);
        assert_eq!(eval("0"), 0);
    }

    #[test]
    fn overflow_wraps() {
        assert_eq!(eval("9223372036854775807 + 1"), i64::MIN);
        assert_eq!(eval("9223372036854775807 * 2"), -2);
    }
}
