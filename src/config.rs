use std::io::{self, IsTerminal};

/// Runtime settings, read once from the process environment.
///
/// The shell takes no flags and reads no files; everything here follows
/// from how the process was started.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Prefix of every diagnostic.
    pub program_name: &'static str,
    /// Stdin is a terminal: read lines with the line editor.
    pub interactive: bool,
    /// Stderr is a terminal: diagnostics may be colored.
    pub color: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            program_name: "cool_shell",
            interactive: false,
            color: false,
        }
    }
}

impl ShellConfig {
    pub fn from_env() -> Self {
        Self {
            interactive: io::stdin().is_terminal(),
            color: io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
            ..Self::default()
        }
    }
}
