use std::iter::Peekable;

use log::debug;

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        grammar::{PRECEDENCE, PrecedenceTable},
        lexer::{Token, TokenKind, TokenStream},
        parser::{primary::parse_primary, statement::parse_statement},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest nesting of parenthesized groups and right-hand operands the
/// parser accepts.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parses a token stream into a program using the language's precedence
/// table.
///
/// Grammar: `program := statement+ END`
///
/// # Errors
/// - `EmptyProgram` if the stream holds no statement.
/// - Any error raised while parsing a statement.
///
/// # Example
/// ```
/// use tally::{
///     ast::{BinaryOperator, Expr, Statement},
///     interpreter::{lexer::tokenize, parser::core::parse},
/// };
///
/// let program = parse(&tokenize("print(10 - 3 - 2);").unwrap()).unwrap();
/// let Statement::Print { expr, .. } = &program.statements[0];
///
/// // Left-associative: (10 - 3) - 2.
/// let Expr::BinaryOp { op, left, .. } = expr else { panic!("expected a binary operation") };
/// assert_eq!(*op, BinaryOperator::Sub);
/// assert!(matches!(**left, Expr::BinaryOp { op: BinaryOperator::Sub, .. }));
/// ```
pub fn parse(tokens: &TokenStream) -> ParseResult<Program> {
    parse_with(tokens, &PRECEDENCE)
}

/// Parses a token stream into a program using an explicit precedence table.
///
/// # Errors
/// Same as [`parse`].
pub fn parse_with(tokens: &TokenStream, table: &PrecedenceTable) -> ParseResult<Program> {
    let mut iter = tokens.iter().peekable();

    if let Some(token) = iter.peek()
       && token.kind == TokenKind::End
    {
        return Err(ParseError::EmptyProgram { position: token.position });
    }

    let mut statements = Vec::new();
    while let Some(token) = iter.peek().copied() {
        if token.kind == TokenKind::End {
            break;
        }
        statements.push(parse_statement(&mut iter, table)?);
    }

    debug!("parsed {} statements", statements.len());
    Ok(Program { statements })
}

/// Parses an expression by precedence climbing.
///
/// A primary is parsed as the initial left operand. Then, while the next
/// token is a binary operator whose binding power is at least
/// `min_binding_power`, the operator is consumed, the right operand is parsed
/// with the operator's right binding power, and both are folded into a
/// `BinaryOp` that becomes the new left operand.
///
/// Grammar: `expression := primary (operator expression)*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of the expression.
/// - `min_binding_power`: Operators binding looser than this end the
///   expression.
/// - `depth`: How many groups and right-hand operands enclose this
///   expression. Statements start at 0.
/// - `table`: Binding powers and associativity of the operators.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// Returns `NestingTooDeep` once `depth` exceeds [`MAX_NESTING_DEPTH`], so
/// recursion stays bounded whatever the input.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>,
                               min_binding_power: u8,
                               depth: usize,
                               table: &PrecedenceTable)
                               -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    if depth > MAX_NESTING_DEPTH {
        let token = tokens.peek().ok_or(ParseError::UnexpectedEndOfInput)?;
        return Err(ParseError::NestingTooDeep { position: token.position });
    }

    let mut left = parse_primary(tokens, depth, table)?;

    while let Some(token) = tokens.peek().copied()
          && let Some(info) = table.lookup(token.kind)
          && info.binding_power >= min_binding_power
    {
        tokens.next();
        let right = parse_expression(tokens, info.right_binding_power(), depth + 1, table)?;
        left = Expr::BinaryOp { op:       info.operator,
                                left:     Box::new(left),
                                right:    Box::new(right),
                                position: token.position, };
    }

    Ok(left)
}
