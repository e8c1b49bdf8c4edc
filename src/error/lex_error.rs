use crate::util::position::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during tokenization.
pub enum LexError {
    /// A character that starts no token.
    UnexpectedCharacter {
        /// The offending character.
        found:    char,
        /// Where the character appears.
        position: Position,
    },
    /// An alphabetic word that is not a keyword.
    UnknownWord {
        /// The whole word, e.g. `printx`.
        word:     String,
        /// Where the word starts.
        position: Position,
    },
    /// An integer literal outside the 64-bit signed range.
    LiteralTooLarge {
        /// The digits as written.
        lexeme:   String,
        /// Where the literal starts.
        position: Position,
    },
}

impl LexError {
    /// Position of the offending input.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnexpectedCharacter { position, .. }
            | Self::UnknownWord { position, .. }
            | Self::LiteralTooLarge { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { found, position } => {
                write!(f, "Error on {position}: Unexpected character {found:?}.")
            },
            Self::UnknownWord { word, position } => {
                write!(f, "Error on {position}: Unknown word '{word}'.")
            },
            Self::LiteralTooLarge { lexeme, position } => write!(f,
                                                                 "Error on {position}: Literal {lexeme} is too large."),
        }
    }
}

impl std::error::Error for LexError {}
