use std::fmt;

use crate::util::position::Position;

/// Lexing errors.
///
/// Defines the failures the tokenizer can report: characters that match no
/// rule, words that are not keywords, and integer literals that do not fit the
/// integer range.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while turning a token stream into a
/// program: unexpected tokens, an exhausted stream, and an empty program.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: arithmetic
/// overflow and failures of the output sink.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure of the pipeline, tagged with the stage that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The tokenizer rejected the source text.
    Lex(LexError),
    /// The token stream does not match the grammar.
    Parse(ParseError),
    /// Evaluation failed.
    Runtime(RuntimeError),
}

impl Error {
    /// Name of the stage that failed: `"lex"`, `"parse"` or `"runtime"`.
    #[must_use]
    pub const fn stage(&self) -> &'static str {
        match self {
            Self::Lex(_) => "lex",
            Self::Parse(_) => "parse",
            Self::Runtime(_) => "runtime",
        }
    }

    /// Source position of the failure, if one is known.
    #[must_use]
    pub const fn position(&self) -> Option<Position> {
        match self {
            Self::Lex(e) => Some(e.position()),
            Self::Parse(e) => e.position(),
            Self::Runtime(e) => Some(e.position()),
        }
    }

    /// Formats the error followed by the offending source line and a caret
    /// under the failing column.
    ///
    /// # Example
    /// ```
    /// use tally::get_result;
    ///
    /// let source = "print(4+);";
    /// let error = get_result(source).unwrap_err();
    ///
    /// let rendered = error.render(source);
    /// assert!(rendered.ends_with("print(4+);\n        ^"));
    /// ```
    #[must_use]
    pub fn render(&self, source: &str) -> String {
        let Some(position) = self.position() else {
            return self.to_string();
        };

        let line = position.source_line(source);
        let padding = " ".repeat(position.column.saturating_sub(1));
        format!("{self}\n{line}\n{padding}^")
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lex(e) => e.fmt(f),
            Self::Parse(e) => e.fmt(f),
            Self::Runtime(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<LexError> for Error {
    fn from(error: LexError) -> Self {
        Self::Lex(error)
    }
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}
