use super::{Command, CommandError};
use crate::core::Continuation;
use std::env;
use std::io::Write;

#[derive(Clone)]
pub struct CdCommand;

impl Default for CdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for CdCommand {
    fn execute(&self, args: &[&str], _out: &mut dyn Write) -> Result<Continuation, CommandError> {
        let target = args.get(1).ok_or_else(|| {
            CommandError::InvalidArguments("expected argument to \"cd\"".to_string())
        })?;

        env::set_current_dir(target)?;
        Ok(Continuation::Continue)
    }
}
