use std::io::Write;

use super::commands::{BuiltinRegistry, Command};
use super::Continuation;
use crate::highlight::Highlighter;
use crate::process::{Launcher, ProcessExecutor};

/// Routes one argument vector to a builtin or to the launcher.
pub struct Dispatcher<L = ProcessExecutor> {
    registry: BuiltinRegistry,
    launcher: L,
    program_name: &'static str,
    highlighter: Highlighter,
}

impl Dispatcher<ProcessExecutor> {
    pub fn new(program_name: &'static str, highlighter: Highlighter) -> Self {
        Self::with_launcher(ProcessExecutor::new(), program_name, highlighter)
    }
}

impl<L: Launcher> Dispatcher<L> {
    pub fn with_launcher(launcher: L, program_name: &'static str, highlighter: Highlighter) -> Self {
        Self {
            registry: BuiltinRegistry::new(),
            launcher,
            program_name,
            highlighter,
        }
    }

    /// Runs `args` and reports any failure on `err`.
    ///
    /// Only the `exit` builtin yields [`Continuation::Stop`]. Failed builtins,
    /// failed launches and failing children all continue.
    pub fn dispatch(&self, args: &[&str], out: &mut dyn Write, err: &mut dyn Write) -> Continuation {
        let Some((&name, rest)) = args.split_first() else {
            return Continuation::Continue;
        };

        if let Some(builtin) = self.registry.lookup(name) {
            return match builtin.execute(args, out) {
                Ok(continuation) => continuation,
                Err(e) => {
                    self.report(err, &e.to_string());
                    Continuation::Continue
                }
            };
        }

        if let Err(e) = self.launcher.launch(name, rest) {
            self.report(err, &e.to_string());
        }
        Continuation::Continue
    }

    fn report(&self, err: &mut dyn Write, message: &str) {
        let line = self.highlighter.diagnostic(self.program_name, message);
        // Nowhere left to report a failing error stream.
        let _ = writeln!(err, "{}", line);
        let _ = err.flush();
    }
}
