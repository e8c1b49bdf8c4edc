use std::io::{self, Write};

/// A sink that receives the values of executed `print` statements, in program
/// order.
pub trait Output {
    /// Emits one value.
    ///
    /// # Errors
    /// Returns an I/O error if the value could not be delivered.
    fn emit(&mut self, value: i64) -> io::Result<()>;
}

/// Collects values in memory.
impl Output for Vec<i64> {
    fn emit(&mut self, value: i64) -> io::Result<()> {
        self.push(value);
        Ok(())
    }
}

impl<O: Output + ?Sized> Output for &mut O {
    fn emit(&mut self, value: i64) -> io::Result<()> {
        (**self).emit(value)
    }
}

/// Writes each value in decimal followed by a newline.
///
/// # Example
/// ```
/// use tally::interpreter::evaluator::output::{Output, WriteOutput};
///
/// let mut output = WriteOutput::new(Vec::new());
/// output.emit(6).unwrap();
/// output.emit(-2).unwrap();
///
/// assert_eq!(output.into_inner(), b"6\n-2\n");
/// ```
#[derive(Debug)]
pub struct WriteOutput<W> {
    writer: W,
}

impl<W: Write> WriteOutput<W> {
    /// Wraps a writer.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Output for WriteOutput<W> {
    fn emit(&mut self, value: i64) -> io::Result<()> {
        writeln!(self.writer, "{value}")
    }
}
