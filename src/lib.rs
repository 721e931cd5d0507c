//! # tally
//!
//! tally is a single-pass interpreter for a small assignment language written
//! in Rust. A program is a sequence of statements such as `y = -(x + 3) * 2;`
//! over integer variables; running it yields the final value of every
//! variable, or rejects the whole program.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::interpreter::parser::core::Parser;

/// Provides unified error types for scanning and parsing.
///
/// This module defines every error that can reject a program. Each error
/// records the offset, in the whitespace-free source, of the token that was
/// rejected.
///
/// # Responsibilities
/// - Defines error enums for the lexical and syntactic phases.
/// - Wraps both in a single [`Error`] returned by [`interpret`].
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates scanning, parsing and evaluation.
///
/// # Responsibilities
/// - Coordinates the lexer, the parser and the symbol table.
/// - Exposes each phase for callers that need tokens or a parser directly.
pub mod interpreter;

pub use error::Error;
pub use interpreter::symbol_table::SymbolTable;

/// Runs a program and returns its final variable bindings.
///
/// Bindings are listed in the order each variable was first assigned. The
/// program is accepted or rejected as a whole: on any error no bindings are
/// returned.
///
/// # Errors
/// Returns [`Error::Lex`] if a literal breaks a lexical rule, and
/// [`Error::Syntax`] if the program does not follow the grammar or reads a
/// variable before assigning it.
///
/// # Examples
/// ```
/// use tally::interpret;
///
/// let table = interpret("x = 5;\ny = x + 3;\nz = -(-y * -2);").unwrap();
/// assert_eq!(table.get("x"), Some(5));
/// assert_eq!(table.get("y"), Some(8));
/// assert_eq!(table.get("z"), Some(-16));
///
/// // `y` is read before it is assigned.
/// assert!(interpret("x = y;").is_err());
/// ```
pub fn interpret(source: &str) -> Result<SymbolTable, Error> {
    let result = Parser::new(source).and_then(Parser::parse_program);

    match &result {
        Ok(table) => debug!(bindings = table.len(), "program accepted"),
        Err(e) => debug!(error = %e, "program rejected"),
    }

    result
}
