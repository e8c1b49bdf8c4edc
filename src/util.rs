/// Source position bookkeeping.
///
/// This module provides the `Position` type that tokens, AST nodes and errors
/// carry so that every failure can be traced back to a byte offset, a line and
/// a column in the original source text.
pub mod position;
