pub mod commands;
pub mod dispatch;
pub mod tokenizer;

pub use commands::{BuiltinRegistry, CommandError};
pub use dispatch::Dispatcher;
pub use tokenizer::tokenize;

/// What the read-eval loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    Continue,
    Stop,
}

impl Continuation {
    pub fn should_continue(self) -> bool {
        self == Continuation::Continue
    }
}
