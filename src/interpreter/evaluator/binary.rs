use crate::{
    ast::BinaryOperator, error::RuntimeError, interpreter::evaluator::core::EvalResult,
    util::position::Position,
};

/// Evaluates a binary operation between two integers.
///
/// Arithmetic is checked: a result outside the `i64` range is an error, never
/// a wrapped or saturated value.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `position`: Position of the operator, for error reporting.
///
/// # Errors
/// Returns `RuntimeError::Overflow` when the result does not fit.
///
/// # Example
/// ```
/// use tally::{
///     ast::BinaryOperator, interpreter::evaluator::binary::eval_binary,
///     util::position::Position,
/// };
///
/// let position = Position::default();
///
/// assert_eq!(eval_binary(BinaryOperator::Add, 4, 124, position).unwrap(), 128);
/// assert!(eval_binary(BinaryOperator::Sub, i64::MIN, 1, position).is_err());
/// ```
pub fn eval_binary(op: BinaryOperator,
                   left: i64,
                   right: i64,
                   position: Position)
                   -> EvalResult<i64> {
    op.apply(left, right).ok_or(RuntimeError::Overflow { operation: op,
                                                         left,
                                                         right,
                                                         position })
}
