use std::fmt;

use log::debug;
use logos::Logos;

use crate::{error::LexError, util::position::Position};

/// Result type used by the tokenizer.
pub type LexResult<T> = Result<T, LexError>;

/// The category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Integer literal, such as `42`.
    Number,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `print`
    Print,
    /// `;`
    Semicolon,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// End of input. Always the last token of a stream.
    End,
}

impl TokenKind {
    /// Human readable description used in error messages.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Number => "a number",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Print => "'print'",
            Self::Semicolon => "';'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::End => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Number => "NUMBER",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Print => "PRINT",
            Self::Semicolon => "SEMICOLON",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::End => "END",
        };
        f.write_str(name)
    }
}

/// A classified, positioned fragment of source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The category of the token.
    pub kind:     TokenKind,
    /// The exact text the token was produced from. Empty for `End`.
    pub lexeme:   String,
    /// Where the lexeme starts.
    pub position: Position,
    /// The integer value of a `Number` token; `None` for every other kind.
    pub value:    Option<i64>,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Number => write!(f, "{}({})", self.kind, self.lexeme),
            kind => write!(f, "{kind}"),
        }
    }
}

/// An ordered token sequence terminated by exactly one `End` token.
///
/// Streams are only built by [`tokenize`], which appends the sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    /// All tokens, the trailing `End` included.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The kinds of all tokens, in order.
    #[must_use]
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|token| token.kind).collect()
    }

    /// Number of tokens, the trailing `End` included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if the stream holds nothing but `End`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.len() <= 1
    }

    /// Iterates over the tokens in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }
}

/// One token per line, `END` included.
///
/// # Example
/// ```
/// use tally::interpreter::lexer::tokenize;
///
/// let stream = tokenize("print(4+124);").unwrap();
/// assert_eq!(stream.to_string(),
///            "PRINT\nLPAREN\nNUMBER(4)\nPLUS\nNUMBER(124)\nRPAREN\nSEMICOLON\nEND\n");
/// ```
impl fmt::Display for TokenStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            writeln!(f, "{token}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type IntoIter = std::slice::Iter<'a, Token>;
    type Item = &'a Token;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line and the byte offset where it starts, so that every
/// token can be given a line and column.
pub struct LexerExtras {
    /// The current line number, starting at 1.
    pub line:       usize,
    /// Byte offset of the first byte of the current line.
    pub line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0, }
    }
}

/// Failure categories reported by the generated lexer.
#[derive(Debug, Clone, PartialEq, Default)]
enum RawError {
    #[default]
    UnexpectedCharacter,
    LiteralTooLarge,
}

/// The tokens recognized by the generated lexer, before they are classified
/// into [`TokenKind`]s.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = RawError)]
enum RawToken {
    #[regex(r"[0-9]+", parse_integer)]
    Number(i64),
    #[token("print")]
    Print,
    /// Any other word. `print` wins over this rule only on an exact match,
    /// so `printx` is one word.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Word,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token(";")]
    Semicolon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("\n", newline)]
    NewLine,
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Ok(i64)`: The parsed value.
/// - `Err(RawError::LiteralTooLarge)`: If the digits exceed `i64::MAX`.
fn parse_integer(lex: &mut logos::Lexer<RawToken>) -> Result<i64, RawError> {
    lex.slice().parse().map_err(|_| RawError::LiteralTooLarge)
}

/// Advances the line counter and skips the newline.
fn newline(lex: &mut logos::Lexer<RawToken>) -> logos::Skip {
    lex.extras.line += 1;
    lex.extras.line_start = lex.span().end;
    logos::Skip
}

/// Converts source text into a token stream terminated by `End`.
///
/// Whitespace separates tokens and is otherwise ignored. Tokenizing is
/// deterministic: the same text always produces the same stream.
///
/// # Errors
/// - [`LexError::UnexpectedCharacter`] for a character that starts no token.
/// - [`LexError::UnknownWord`] for a word other than `print`.
/// - [`LexError::LiteralTooLarge`] for an integer beyond `i64::MAX`.
///
/// # Example
/// ```
/// use tally::interpreter::lexer::{TokenKind, tokenize};
///
/// let stream = tokenize("print(4 + 4 - 2);").unwrap();
/// assert_eq!(stream.kinds(),
///            vec![TokenKind::Print,
///                 TokenKind::LParen,
///                 TokenKind::Number,
///                 TokenKind::Plus,
///                 TokenKind::Number,
///                 TokenKind::Minus,
///                 TokenKind::Number,
///                 TokenKind::RParen,
///                 TokenKind::Semicolon,
///                 TokenKind::End]);
/// ```
pub fn tokenize(source: &str) -> LexResult<TokenStream> {
    let mut lexer = RawToken::lexer_with_extras(source, LexerExtras::default());
    let mut tokens = Vec::new();

    while let Some(raw) = lexer.next() {
        let start = lexer.span().start;
        let position = Position::new(start, lexer.extras.line, start - lexer.extras.line_start + 1);
        let slice = lexer.slice();

        let (kind, value) = match raw {
            Ok(RawToken::Number(value)) => (TokenKind::Number, Some(value)),
            Ok(RawToken::Print) => (TokenKind::Print, None),
            Ok(RawToken::Plus) => (TokenKind::Plus, None),
            Ok(RawToken::Minus) => (TokenKind::Minus, None),
            Ok(RawToken::Semicolon) => (TokenKind::Semicolon, None),
            Ok(RawToken::LParen) => (TokenKind::LParen, None),
            Ok(RawToken::RParen) => (TokenKind::RParen, None),
            Ok(RawToken::Word) => {
                return Err(LexError::UnknownWord { word: slice.to_string(),
                                                   position });
            },
            // Both are skipped by their callbacks and never reach this point.
            Ok(RawToken::NewLine | RawToken::Ignored) => continue,
            Err(RawError::LiteralTooLarge) => {
                return Err(LexError::LiteralTooLarge { lexeme: slice.to_string(),
                                                       position });
            },
            Err(RawError::UnexpectedCharacter) => {
                let found = slice.chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(LexError::UnexpectedCharacter { found, position });
            },
        };

        tokens.push(Token { kind,
                            lexeme: slice.to_string(),
                            position,
                            value });
    }

    let end = source.len();
    tokens.push(Token { kind:     TokenKind::End,
                        lexeme:   String::new(),
                        position: Position::new(end,
                                                lexer.extras.line,
                                                end - lexer.extras.line_start + 1),
                        value:    None, });

    debug!("tokenized {} bytes into {} tokens", source.len(), tokens.len());
    Ok(TokenStream { tokens })
}
