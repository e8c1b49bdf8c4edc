/// Entry points of the parser.
///
/// Defines the parser result type, the program-level driver and the
/// precedence-climbing expression parser.
pub mod core;
/// Primary expression parsing.
///
/// Handles the atoms of an expression: integer literals and parenthesized
/// groups.
pub mod primary;
/// Statement parsing.
///
/// Parses `print(<expr>);`, the single statement form of the language.
pub mod statement;
/// Utility functions for the parser.
///
/// Provides helpers to consume an expected token and to build
/// unexpected-token errors.
pub mod utils;
