use std::io;

mod prompt;

pub use prompt::{Prompt, PromptSource, SystemPrompt};

use crate::{
    config::ShellConfig,
    core::{tokenize, Dispatcher},
    error::ShellError,
    highlight::Highlighter,
    input::{EditorInput, LineSource, PlainInput},
};

pub struct Shell {
    input: Box<dyn LineSource>,
    prompt: Box<dyn PromptSource>,
    dispatcher: Dispatcher,
}

impl Shell {
    pub fn new(config: ShellConfig) -> Result<Self, ShellError> {
        let input: Box<dyn LineSource> = if config.interactive {
            Box::new(EditorInput::new()?)
        } else {
            Box::new(PlainInput::new(io::stdin().lock(), io::stdout()))
        };

        Ok(Self::with_input(config, input, Box::new(SystemPrompt)))
    }

    pub fn with_input(
        config: ShellConfig,
        input: Box<dyn LineSource>,
        prompt: Box<dyn PromptSource>,
    ) -> Self {
        let highlighter = Highlighter::new(config.color);
        Self {
            input,
            prompt,
            dispatcher: Dispatcher::new(config.program_name, highlighter),
        }
    }

    /// Runs until `exit` or end of input.
    ///
    /// Returns an error only when the prompt cannot be built or the input
    /// itself fails.
    pub fn run(&mut self) -> Result<(), ShellError> {
        loop {
            let prompt = self.prompt.render()?;
            let Some(line) = self.input.read_line(&prompt)? else {
                return Ok(());
            };

            let args = tokenize(&line);
            let continuation = self
                .dispatcher
                .dispatch(&args, &mut io::stdout(), &mut io::stderr());

            if !continuation.should_continue() {
                return Ok(());
            }
        }
    }
}
