use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
    },
};

/// Builds an [`ParseError::UnexpectedToken`] for `token`.
pub(in crate::interpreter::parser) fn unexpected(token: &Token,
                                                 expected: &[TokenKind])
                                                 -> ParseError {
    ParseError::UnexpectedToken { expected: expected.to_vec(),
                                  found:    token.kind,
                                  lexeme:   token.lexeme.clone(),
                                  position: token.position, }
}

/// Consumes the next token, which must be of the given kind.
///
/// # Parameters
/// - `tokens`: Token iterator.
/// - `kind`: The required kind.
///
/// # Returns
/// The consumed token.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token has a different kind,
/// - the stream is exhausted.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    kind: TokenKind)
                                                    -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(token) if token.kind == kind => Ok(token),
        Some(token) => Err(unexpected(token, &[kind])),
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}
