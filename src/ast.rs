use std::{fmt, mem};

use crate::util::position::Position;

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
}

impl BinaryOperator {
    /// Applies the operator with overflow checking.
    ///
    /// Returns `None` when the exact result does not fit in an `i64`.
    ///
    /// # Example
    /// ```
    /// use tally::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Sub.apply(10, 3), Some(7));
    /// assert_eq!(BinaryOperator::Add.apply(i64::MAX, 1), None);
    /// ```
    #[must_use]
    pub const fn apply(self, left: i64, right: i64) -> Option<i64> {
        match self {
            Self::Add => left.checked_add(right),
            Self::Sub => left.checked_sub(right),
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "+"),
            Self::Sub => write!(f, "-"),
        }
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every node owns its children, so a parsed expression is a plain tree. The
/// position stored in each node points at the token the node was built from:
/// the literal itself, or the operator of a binary operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal.
    Literal {
        /// The literal value.
        value:    i64,
        /// Position of the literal.
        position: Position,
    },
    /// A binary operation.
    BinaryOp {
        /// The operator.
        op:       BinaryOperator,
        /// Left operand.
        left:     Box<Self>,
        /// Right operand.
        right:    Box<Self>,
        /// Position of the operator.
        position: Position,
    },
}

impl Expr {
    /// Position of the token this node was built from.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Literal { position, .. } | Self::BinaryOp { position, .. } => *position,
        }
    }

    /// Moves the children out of a binary node, leaving literals behind.
    fn take_children(&mut self) -> Option<(Self, Self)> {
        match self {
            Self::Literal { .. } => None,
            Self::BinaryOp { left, right, .. } => {
                let placeholder = || Self::Literal { value:    0,
                                                     position: Position::default(), };
                Some((mem::replace(&mut **left, placeholder()),
                      mem::replace(&mut **right, placeholder())))
            },
        }
    }
}

/// Long operator chains build trees as deep as they are long, so children are
/// released from a heap worklist instead of by recursion.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending: Vec<Self> = self.take_children()
                                         .into_iter()
                                         .flat_map(|(left, right)| [left, right])
                                         .collect();
        while let Some(mut expr) = pending.pop() {
            if let Some((left, right)) = expr.take_children() {
                pending.push(left);
                pending.push(right);
            }
        }
    }
}

/// A piece of an expression still to be written.
enum Piece<'e> {
    Node(&'e Expr),
    Open,
    Close,
    Operator(BinaryOperator),
}

/// Schedules an operand, wrapped in parentheses if it is itself an
/// operation. Pieces are popped, so they are pushed in reverse.
fn push_operand<'e>(pieces: &mut Vec<Piece<'e>>, operand: &'e Expr) {
    if matches!(operand, Expr::BinaryOp { .. }) {
        pieces.push(Piece::Close);
        pieces.push(Piece::Node(operand));
        pieces.push(Piece::Open);
    } else {
        pieces.push(Piece::Node(operand));
    }
}

/// Writes the expression in source syntax, parenthesizing every nested
/// binary operation so the grouping is explicit. The result parses back to
/// the same tree.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pieces = vec![Piece::Node(self)];

        while let Some(piece) = pieces.pop() {
            match piece {
                Piece::Node(Self::Literal { value, .. }) => write!(f, "{value}")?,
                Piece::Node(Self::BinaryOp { op, left, right, .. }) => {
                    push_operand(&mut pieces, right);
                    pieces.push(Piece::Operator(*op));
                    push_operand(&mut pieces, left);
                },
                Piece::Open => f.write_str("(")?,
                Piece::Close => f.write_str(")")?,
                Piece::Operator(op) => write!(f, " {op} ")?,
            }
        }

        Ok(())
    }
}

/// A top-level statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `print(<expr>);`
    Print {
        /// The expression whose value is emitted.
        expr:     Expr,
        /// Position of the `print` keyword.
        position: Position,
    },
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Print { expr, .. } => write!(f, "print({expr});"),
        }
    }
}

/// A parsed program: its statements in source order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    /// The top-level statements.
    pub statements: Vec<Statement>,
}

/// One statement per line.
impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            writeln!(f, "{statement}")?;
        }
        Ok(())
    }
}
