use std::io::{BufRead, Write};

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::error::ShellError;

/// Where command lines come from.
pub trait LineSource {
    /// Shows `prompt` and blocks for one line. `Ok(None)` means end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ShellError>;
}

/// Line editing on a terminal.
///
/// Lines are never added to the editor's history.
pub struct EditorInput {
    editor: DefaultEditor,
}

impl EditorInput {
    pub fn new() -> Result<Self, ShellError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineSource for EditorInput {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ShellError> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            // ^C drops the half-typed line.
            Err(ReadlineError::Interrupted) => Ok(Some(String::new())),
            Err(ReadlineError::Eof) => {
                println!();
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Reads from a pipe or file: the prompt is written to `out`, then one
/// line is read from `reader`.
pub struct PlainInput<R, W> {
    reader: R,
    out: W,
}

impl<R: BufRead, W: Write> PlainInput<R, W> {
    pub fn new(reader: R, out: W) -> Self {
        Self { reader, out }
    }
}

impl<R: BufRead, W: Write> LineSource for PlainInput<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ShellError> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;

        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}
