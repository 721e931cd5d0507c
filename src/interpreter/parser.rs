/// Parser state and token matching.
///
/// Holds the scanner, the single token of lookahead and the symbol table that
/// evaluation writes into.
pub mod core;

/// Operand parsing.
///
/// Handles literals, variable reads, prefix `+` and `-`, and parenthesized
/// groups.
pub mod unary;

/// Additive and multiplicative chains.
///
/// Folds `+`, `-` and `*` left to right, with `*` binding tighter.
pub mod binary;

/// Program and assignment parsing.
///
/// Drives the top-level loop and binds each completed assignment.
pub mod statement;
