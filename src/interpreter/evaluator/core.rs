use log::trace;

use crate::{
    ast::{BinaryOperator, Expr, Program, Statement},
    error::RuntimeError,
    interpreter::evaluator::{binary::eval_binary, output::Output},
    util::position::Position,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// A pending unit of work in the expression walk.
enum Step<'e> {
    /// Evaluate a node, pushing its value.
    Visit(&'e Expr),
    /// Pop two values and push the result of the operator.
    Apply(BinaryOperator, Position),
}

/// Stores the runtime evaluation context.
///
/// The only state is the output sink that `print` statements write to;
/// evaluation never modifies the AST.
///
/// ## Usage
///
/// Create a context around a sink, evaluate a program with
/// [`Context::eval_program`], then take the sink back with
/// [`Context::into_output`].
pub struct Context<O: Output> {
    output: O,
}

impl<O: Output> Context<O> {
    /// Creates an evaluation context writing to `output`.
    #[must_use]
    pub const fn new(output: O) -> Self {
        Self { output }
    }

    /// Borrows the output sink.
    pub const fn output(&self) -> &O {
        &self.output
    }

    /// Consumes the context and returns the output sink.
    pub fn into_output(self) -> O {
        self.output
    }

    /// Evaluates an expression and returns its value.
    ///
    /// The left operand of a binary operation is evaluated before the right.
    /// The tree is walked with an explicit work stack, so arbitrarily long
    /// operator chains are evaluated without deep recursion.
    ///
    /// # Errors
    /// Returns `RuntimeError::Overflow` if any intermediate result leaves the
    /// `i64` range.
    ///
    /// # Example
    /// ```
    /// use tally::{
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::evaluator::core::Context,
    ///     util::position::Position,
    /// };
    ///
    /// let position = Position::default();
    /// let expr = Expr::BinaryOp { op: BinaryOperator::Add,
    ///                             left: Box::new(Expr::Literal { value: 4, position }),
    ///                             right: Box::new(Expr::Literal { value: 124, position }),
    ///                             position };
    ///
    /// let context = Context::new(Vec::<i64>::new());
    /// assert_eq!(context.eval(&expr).unwrap(), 128);
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<i64> {
        let mut steps = vec![Step::Visit(expr)];
        let mut values = Vec::new();

        while let Some(step) = steps.pop() {
            match step {
                Step::Visit(Expr::Literal { value, .. }) => values.push(*value),
                Step::Visit(Expr::BinaryOp { op,
                                             left,
                                             right,
                                             position, }) => {
                    steps.push(Step::Apply(*op, *position));
                    steps.push(Step::Visit(right));
                    steps.push(Step::Visit(left));
                },
                Step::Apply(op, position) => {
                    let (Some(right), Some(left)) = (values.pop(), values.pop()) else {
                        unreachable!("both operands are evaluated before their operator");
                    };
                    values.push(eval_binary(op, left, right, position)?);
                },
            }
        }

        let Some(value) = values.pop() else {
            unreachable!("an expression always leaves one value");
        };
        Ok(value)
    }

    /// Evaluates a single statement.
    ///
    /// A print statement evaluates its expression and emits the value. It
    /// produces no value of its own.
    ///
    /// # Errors
    /// - Any error raised while evaluating the expression.
    /// - `RuntimeError::OutputFailed` if the sink rejects the value.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<()> {
        match statement {
            Statement::Print { expr, position } => {
                let value = self.eval(expr)?;
                trace!("print at {position} emits {value}");
                self.output
                    .emit(value)
                    .map_err(|e| RuntimeError::OutputFailed { details:  e.to_string(),
                                                              position: *position, })
            },
        }
    }

    /// Evaluates every statement of a program in order.
    ///
    /// Stops at the first failure. Values emitted before the failure remain in
    /// the sink.
    ///
    /// # Errors
    /// Returns the first error raised by a statement.
    pub fn eval_program(&mut self, program: &Program) -> EvalResult<()> {
        for statement in &program.statements {
            self.eval_statement(statement)?;
        }
        Ok(())
    }
}
