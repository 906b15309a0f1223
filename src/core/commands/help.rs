use super::{Command, CommandError};
use crate::core::Continuation;
use std::io::Write;

#[derive(Clone)]
pub struct HelpCommand {
    builtins: &'static [&'static str],
}

impl HelpCommand {
    pub fn new(builtins: &'static [&'static str]) -> Self {
        Self { builtins }
    }
}

impl Command for HelpCommand {
    fn execute(&self, _args: &[&str], out: &mut dyn Write) -> Result<Continuation, CommandError> {
        writeln!(out, "Cool Shell")?;
        writeln!(out, "Type program names and arguments, and hit enter.")?;
        writeln!(out, "The following are built in:")?;
        for name in self.builtins {
            writeln!(out, "    {}", name)?;
        }
        writeln!(out, "Use the man command for information on other programs.")?;
        out.flush()?;

        Ok(Continuation::Continue)
    }
}
