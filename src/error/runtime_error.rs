use crate::{ast::BinaryOperator, util::position::Position};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// An addition or subtraction left the 64-bit signed range.
    Overflow {
        /// The operator that overflowed.
        operation: BinaryOperator,
        /// Left operand.
        left:      i64,
        /// Right operand.
        right:     i64,
        /// Position of the operator.
        position:  Position,
    },
    /// The output sink refused a value.
    OutputFailed {
        /// Description of the underlying I/O failure.
        details:  String,
        /// Position of the `print` statement.
        position: Position,
    },
}

impl RuntimeError {
    /// Position of the failing operator or statement.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Overflow { position, .. } | Self::OutputFailed { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overflow { operation,
                             left,
                             right,
                             position, } => write!(f,
                                                   "Error on {position}: Integer overflow while computing {left} {operation} {right}."),
            Self::OutputFailed { details, position } => {
                write!(f, "Error on {position}: Failed to write output: {details}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
