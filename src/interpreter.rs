/// The evaluator module walks the AST and produces the program's output.
///
/// The evaluator computes the value of every expression with checked integer
/// arithmetic and hands the value of each `print` statement to an output sink.
/// It is the last stage of the pipeline.
///
/// # Responsibilities
/// - Evaluates expressions left operand first.
/// - Emits printed values, in program order, to an injected `Output`.
/// - Reports runtime errors such as integer overflow.
pub mod evaluator;
/// The grammar module declares the operator precedence table.
///
/// Binary operators are described by a binding power and an associativity.
/// The table is a constant consulted by the parser and never mutated.
pub mod grammar;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to a number, an operator, a delimiter, or the
/// `print` keyword. The stream always ends with an `End` token.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, lexeme and
///   position.
/// - Enforces the keyword boundary, so `printx` is not `print`.
/// - Reports lexical errors for invalid characters and oversized literals.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// Statements are parsed by recursive descent and expressions by precedence
/// climbing over the grammar's precedence table.
///
/// # Responsibilities
/// - Converts tokens into statements and expression trees.
/// - Resolves precedence and associativity of binary operators.
/// - Reports the expected and the found token on any mismatch.
pub mod parser;
