use super::{Command, CommandError};
use crate::core::Continuation;
use std::io::Write;

#[derive(Clone)]
pub struct ExitCommand;

impl Default for ExitCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ExitCommand {
    fn execute(&self, _args: &[&str], _out: &mut dyn Write) -> Result<Continuation, CommandError> {
        Ok(Continuation::Stop)
    }
}
