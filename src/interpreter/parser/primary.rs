use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        grammar::PrecedenceTable,
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect, unexpected},
        },
    },
};

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
/// - `depth`: Nesting depth of the enclosing expression.
/// - `table`: Precedence table used for parenthesized sub-expressions.
///
/// # Returns
/// The parsed [`Expr`]. A parenthesized group yields its inner expression;
/// grouping leaves no node of its own.
///
/// # Errors
/// Returns a `ParseError` if the next token is neither a number nor `(`, or
/// if a group is not closed by `)`.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>,
                            depth: usize,
                            table: &PrecedenceTable)
                            -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(Token { kind: TokenKind::Number,
                     value: Some(value),
                     position,
                     .. }) => Ok(Expr::Literal { value:    *value,
                                                 position: *position, }),
        Some(Token { kind: TokenKind::LParen,
                     .. }) => parse_grouping(tokens, depth, table),
        Some(token) => Err(unexpected(token, &[TokenKind::Number, TokenKind::LParen])),
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

/// Parses the rest of a parenthesized expression after its `(`.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>,
                         depth: usize,
                         table: &PrecedenceTable)
                         -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let inner = parse_expression(tokens, 0, depth + 1, table)?;
    close_group(tokens, table)?;
    Ok(inner)
}

/// Consumes the `)` closing a group.
///
/// Anything else is reported as expecting either an operator or `)`, since
/// both could legally follow the inner expression.
pub(in crate::interpreter::parser) fn close_group<'a, I>(tokens: &mut Peekable<I>,
                                                         table: &PrecedenceTable)
                                                         -> ParseResult<()>
    where I: Iterator<Item = &'a Token>
{
    if let Some(token) = tokens.peek()
       && token.kind != TokenKind::RParen
    {
        let mut expected: Vec<_> = table.operators().collect();
        expected.push(TokenKind::RParen);
        return Err(unexpected(token, &expected));
    }

    expect(tokens, TokenKind::RParen).map(|_| ())
}
