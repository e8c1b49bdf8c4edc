//! # tally
//!
//! tally is a minimal integer expression language written in Rust.
//! Source text is tokenized, parsed into an abstract syntax tree with a
//! precedence-climbing parser, and evaluated. Each `print(<expr>);` statement
//! emits one value.

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
)]
#![allow(clippy::missing_errors_doc)]

use log::debug;

use crate::interpreter::{
    evaluator::{core::Context, output::Output},
    lexer::tokenize,
    parser::core::parse,
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` types that represent the
/// syntactic structure of a program as a tree. The AST is built by the parser
/// and read, never modified, by the evaluator.
pub mod ast;
/// Provides typed error values for every stage of the pipeline.
///
/// # Responsibilities
/// - Defines one error enum per stage (lexer, parser, evaluator).
/// - Attaches source positions for user feedback.
/// - Combines the three into a single `Error` identifying the failing stage.
pub mod error;
/// Orchestrates the stages of execution.
///
/// This module holds the lexer, the precedence table, the parser and the
/// evaluator.
pub mod interpreter;
/// General utilities shared by all stages.
pub mod util;

pub use error::Error;

/// Tokenizes, parses and evaluates `source`, sending printed values to
/// `output`.
///
/// Each stage runs to completion before the next starts, so a lexical or
/// syntax error anywhere in the source means nothing is printed. A runtime
/// error stops the program at the failing statement.
///
/// # Errors
/// Returns the first error raised by any stage.
///
/// # Examples
/// ```
/// use tally::run;
///
/// let mut printed = Vec::<i64>::new();
/// run("print(4 + 4 - 2);", &mut printed).unwrap();
/// assert_eq!(printed, vec![6]);
/// ```
pub fn run<O: Output>(source: &str, output: O) -> Result<(), Error> {
    let tokens = tokenize(source)?;
    let program = parse(&tokens)?;

    debug!("evaluating {} statements", program.statements.len());
    let mut context = Context::new(output);
    context.eval_program(&program)?;
    Ok(())
}

/// Runs `source` and returns the printed values.
///
/// # Errors
/// Returns an error if tokenizing, parsing, or evaluation fails.
///
/// # Examples
/// ```
/// use tally::get_result;
///
/// assert_eq!(get_result("print(4+124);").unwrap(), vec![128]);
///
/// // `4+` is missing its right operand.
/// let error = get_result("print(4+);").unwrap_err();
/// assert_eq!(error.stage(), "parse");
/// ```
pub fn get_result(source: &str) -> Result<Vec<i64>, Error> {
    let mut printed = Vec::new();
    run(source, &mut printed)?;
    Ok(printed)
}
