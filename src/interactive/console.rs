//! Console implementations

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Text input/output used by the game loop
pub trait Console {
    /// Show text to the player
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn prompt(&mut self, text: &str) -> io::Result<()>;

    /// Read one line of input without its line terminator
    ///
    /// End of input is reported as an empty line.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read.
    fn read_line(&mut self) -> io::Result<String>;
}

/// Console over any buffered reader and writer
pub struct LineConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Give back the writer, e.g. to inspect captured output
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl LineConsole<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process's stdin and stdout
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn prompt(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()
    }

    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        self.reader.read_line(&mut line)?;

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        Ok(line)
    }
}

/// Console fed from pre-recorded replies, capturing everything shown
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    replies: VecDeque<String>,
    output: String,
    reads: usize,
}

impl ScriptedConsole {
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: replies.into_iter().map(Into::into).collect(),
            output: String::new(),
            reads: 0,
        }
    }

    /// Everything written through `prompt` so far
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Number of lines the game asked for
    #[must_use]
    pub const fn reads(&self) -> usize {
        self.reads
    }
}

impl Console for ScriptedConsole {
    fn prompt(&mut self, text: &str) -> io::Result<()> {
        self.output.push_str(text);
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<String> {
        self.reads += 1;
        Ok(self.replies.pop_front().unwrap_or_default())
    }
}
