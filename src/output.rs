use std::io;

/**
 * Abstraction of an output writer used by bytelit to emit generated source. Everything written
 * through it ends up on standard output, so diagnostics must go elsewhere.
 */
pub trait OutputWriter {
    /**
     * Write the content to the output.
     */
    fn write(&mut self, content: String) -> io::Result<&mut dyn OutputWriter>;

    /**
     * Write the content followed by a line terminator.
     */
    fn writeln(&mut self, content: String) -> io::Result<&mut dyn OutputWriter> {
        self.write(format!("{}\n", content))
    }
}
