/// The lexer module tokenizes source code for the parser.
///
/// The lexer removes all whitespace from the source and then hands out one
/// classified token per call. It is the only phase that looks at raw text.
///
/// # Responsibilities
/// - Classifies operators, identifiers, integer literals and stray
///   characters.
/// - Rejects integer literals with a leading zero or outside the `i64` range.
/// - Reports end of input once, and on every call after that.
pub mod lexer;
/// The parser module recognises and evaluates programs in one pass.
///
/// Each grammar rule is a method that consumes tokens and returns the rule's
/// integer value; there is no intermediate syntax tree. Completed assignments
/// are written into the symbol table.
///
/// # Responsibilities
/// - Validates programs against the grammar with one token of lookahead.
/// - Evaluates `+`, `-`, `*`, prefix operators and grouping.
/// - Rejects reads of variables that have no earlier binding.
pub mod parser;
/// The symbol table maps variable names to their latest values.
///
/// It is both the evaluation environment while parsing and the result handed
/// back to the caller.
pub mod symbol_table;
