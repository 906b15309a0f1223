use cool_shell::config::ShellConfig;
use cool_shell::error::ShellError;
use cool_shell::highlight::Highlighter;
use cool_shell::shell::Shell;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = ShellConfig::from_env();
    let program_name = config.program_name;
    let highlighter = Highlighter::new(config.color);

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", highlighter.diagnostic(program_name, &e.to_string()));
            ExitCode::FAILURE
        }
    }
}

fn run(config: ShellConfig) -> Result<(), ShellError> {
    // SIGINT ends the foreground child, never the shell.
    ctrlc::set_handler(|| {})?;

    let mut shell = Shell::new(config)?;
    shell.run()
}
