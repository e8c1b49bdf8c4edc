/// Binary operator evaluation.
///
/// Implements checked addition and subtraction.
pub mod binary;

/// Core evaluation logic and context management.
///
/// Contains the evaluation context that owns the output sink, and the walk
/// over expressions, statements and programs.
pub mod core;

/// Output sinks.
///
/// Declares the `Output` trait that `print` statements write to, together
/// with a collecting sink and a writer-backed sink.
pub mod output;
