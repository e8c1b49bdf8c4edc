use crate::{interpreter::lexer::TokenKind, util::position::Position};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found a token the grammar does not allow at this point.
    UnexpectedToken {
        /// The token kinds that would have been accepted.
        expected: Vec<TokenKind>,
        /// The kind of the token encountered.
        found:    TokenKind,
        /// The text of the token encountered.
        lexeme:   String,
        /// Where the token starts.
        position: Position,
    },
    /// The source holds no statement at all.
    EmptyProgram {
        /// Position of the end of input.
        position: Position,
    },
    /// Groups or right-hand operands nest deeper than the parser allows.
    NestingTooDeep {
        /// Position of the first token past the limit.
        position: Position,
    },
    /// The token iterator ran out before an `END` token was seen.
    ///
    /// A [`TokenStream`](crate::interpreter::lexer::TokenStream) always ends
    /// with `END`, so [`parse`](crate::interpreter::parser::core::parse)
    /// never reports this. The statement and expression parsers accept any
    /// token iterator, and a slice without `END` ends this way.
    UnexpectedEndOfInput,
}

impl ParseError {
    /// Position of the offending token, if there is one.
    #[must_use]
    pub const fn position(&self) -> Option<Position> {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::EmptyProgram { position }
            | Self::NestingTooDeep { position } => Some(*position),
            Self::UnexpectedEndOfInput => None,
        }
    }
}

/// Joins token descriptions as `a`, `a or b`, `a, b or c`.
fn describe_expected(expected: &[TokenKind]) -> String {
    let descriptions: Vec<_> = expected.iter().map(|kind| kind.describe()).collect();
    match descriptions.split_last() {
        None => "nothing".to_string(),
        Some((last, [])) => (*last).to_string(),
        Some((last, rest)) => format!("{} or {last}", rest.join(", ")),
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected,
                                    found,
                                    lexeme,
                                    position, } => {
                let expected = describe_expected(expected);
                if lexeme.is_empty() {
                    write!(f,
                           "Error on {position}: Expected {expected}, found {}.",
                           found.describe())
                } else {
                    write!(f, "Error on {position}: Expected {expected}, found '{lexeme}'.")
                }
            },
            Self::EmptyProgram { position } => {
                write!(f, "Error on {position}: Program contains no statement.")
            },
            Self::NestingTooDeep { position } => write!(f,
                                                        "Error on {position}: Expression is nested too deeply."),
            Self::UnexpectedEndOfInput => write!(f, "Error: Unexpected end of input."),
        }
    }
}

impl std::error::Error for ParseError {}
