use std::collections::BTreeMap;
use std::io::Write;

mod cd;
mod exit;
mod help;

pub use cd::CdCommand;
pub use exit::ExitCommand;
pub use help::HelpCommand;

use super::Continuation;
use crate::error::os_error_text;

/// Builtin names in the order `help` lists them.
const BUILTIN_NAMES: [&str; 3] = ["cd", "help", "exit"];

#[derive(Debug)]
pub enum CommandError {
    InvalidArguments(String),
    IoError(std::io::Error),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::InvalidArguments(msg) => write!(f, "{}", msg),
            CommandError::IoError(err) => write!(f, "{}", os_error_text(err)),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::IoError(err)
    }
}

/// A command that runs inside the shell process.
///
/// `args[0]` is the command's own name.
pub trait Command {
    fn execute(&self, args: &[&str], out: &mut dyn Write) -> Result<Continuation, CommandError>;
}

#[derive(Clone)]
pub enum Builtin {
    Cd(CdCommand),
    Help(HelpCommand),
    Exit(ExitCommand),
}

impl Command for Builtin {
    fn execute(&self, args: &[&str], out: &mut dyn Write) -> Result<Continuation, CommandError> {
        match self {
            Builtin::Cd(cmd) => cmd.execute(args, out),
            Builtin::Help(cmd) => cmd.execute(args, out),
            Builtin::Exit(cmd) => cmd.execute(args, out),
        }
    }
}

/// The fixed table of builtins.
///
/// Entries are created in [`BuiltinRegistry::new`] and there is no way to
/// add or remove one afterwards.
#[derive(Clone)]
pub struct BuiltinRegistry {
    commands: BTreeMap<&'static str, Builtin>,
}

impl Default for BuiltinRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl BuiltinRegistry {
    pub fn new() -> Self {
        let mut commands = BTreeMap::new();
        commands.insert("cd", Builtin::Cd(CdCommand::new()));
        commands.insert("help", Builtin::Help(HelpCommand::new(Self::names())));
        commands.insert("exit", Builtin::Exit(ExitCommand::new()));

        Self { commands }
    }

    /// Exact, case-sensitive lookup.
    pub fn lookup(&self, name: &str) -> Option<&Builtin> {
        self.commands.get(name)
    }

    pub fn names() -> &'static [&'static str] {
        &BUILTIN_NAMES
    }
}
