use crate::{ast::BinaryOperator, interpreter::lexer::TokenKind};

/// Binding power shared by `+` and `-`.
pub const ADDITIVE_BINDING_POWER: u8 = 10;

/// How a chain of operators with equal binding power groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// `a - b - c` groups as `(a - b) - c`.
    Left,
    /// `a - b - c` groups as `a - (b - c)`.
    Right,
}

/// Everything the parser needs to know about a binary operator token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorInfo {
    /// The AST operator the token stands for.
    pub operator:      BinaryOperator,
    /// Precedence; higher binds tighter.
    pub binding_power: u8,
    /// Grouping of equal-precedence chains.
    pub associativity: Associativity,
}

impl OperatorInfo {
    /// Minimum binding power for the right-hand operand.
    ///
    /// Left-associative operators require a strictly tighter operator on their
    /// right, right-associative ones accept an equal one.
    #[must_use]
    pub const fn right_binding_power(self) -> u8 {
        match self.associativity {
            Associativity::Left => self.binding_power.saturating_add(1),
            Associativity::Right => self.binding_power,
        }
    }
}

/// A static mapping from operator tokens to their [`OperatorInfo`].
///
/// Tokens that are absent from the table (`;`, `print`, parentheses) have no
/// binding power and end an expression.
#[derive(Debug, Clone, Copy)]
pub struct PrecedenceTable {
    entries: &'static [(TokenKind, OperatorInfo)],
}

impl PrecedenceTable {
    /// Creates a table from its entries.
    #[must_use]
    pub const fn new(entries: &'static [(TokenKind, OperatorInfo)]) -> Self {
        Self { entries }
    }

    /// Looks up the operator information of a token kind.
    ///
    /// # Example
    /// ```
    /// use tally::interpreter::{grammar::PRECEDENCE, lexer::TokenKind};
    ///
    /// assert_eq!(PRECEDENCE.lookup(TokenKind::Plus).map(|info| info.binding_power),
    ///            Some(10));
    /// assert!(PRECEDENCE.lookup(TokenKind::Semicolon).is_none());
    /// ```
    #[must_use]
    pub fn lookup(&self, kind: TokenKind) -> Option<OperatorInfo> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == kind)
            .map(|(_, info)| *info)
    }

    /// The token kinds that act as binary operators.
    pub fn operators(&self) -> impl Iterator<Item = TokenKind> + '_ {
        self.entries.iter().map(|(kind, _)| *kind)
    }
}

/// The precedence table of the language.
pub static PRECEDENCE: PrecedenceTable =
    PrecedenceTable::new(&[(TokenKind::Plus,
                            OperatorInfo { operator:      BinaryOperator::Add,
                                           binding_power: ADDITIVE_BINDING_POWER,
                                           associativity: Associativity::Left, }),
                           (TokenKind::Minus,
                            OperatorInfo { operator:      BinaryOperator::Sub,
                                           binding_power: ADDITIVE_BINDING_POWER,
                                           associativity: Associativity::Left, })]);
