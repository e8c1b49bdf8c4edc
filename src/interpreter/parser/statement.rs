use std::iter::Peekable;

use log::trace;

use crate::{
    ast::Statement,
    interpreter::{
        grammar::PrecedenceTable,
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            primary::close_group,
            utils::expect,
        },
    },
};

/// Parses a single statement.
///
/// The only statement form is a print statement. The parentheses around its
/// argument belong to the statement, so they leave no node in the AST.
///
/// Grammar: `statement := "print" "(" expression ")" ";"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a statement.
/// - `table`: Precedence table for the argument expression.
///
/// # Returns
/// A [`Statement::Print`] node.
///
/// # Errors
/// Returns a `ParseError` if any of the five parts is missing or malformed.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>,
                              table: &PrecedenceTable)
                              -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let print = expect(tokens, TokenKind::Print)?;
    expect(tokens, TokenKind::LParen)?;
    let expr = parse_expression(tokens, 0, 0, table)?;
    close_group(tokens, table)?;
    expect(tokens, TokenKind::Semicolon)?;

    trace!("parsed print statement at {}", print.position);
    Ok(Statement::Print { expr,
                          position: print.position })
}
