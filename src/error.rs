use std::ffi::CStr;
use std::fmt;
use std::io;

/// Renders an OS error the way `perror` does: the bare `strerror` text.
///
/// Errors that carry no OS code fall back to their own message.
pub fn os_error_text(err: &io::Error) -> String {
    match err.raw_os_error() {
        Some(code) => {
            let text = unsafe { CStr::from_ptr(libc::strerror(code)) };
            text.to_string_lossy().into_owned()
        }
        None => err.to_string(),
    }
}

#[derive(Debug)]
pub enum ShellError {
    Readline(rustyline::error::ReadlineError),
    Io(std::io::Error),
    /// User, host or working directory could not be determined.
    Prompt(String),
    CtrlC(String),
}

impl From<rustyline::error::ReadlineError> for ShellError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        ShellError::Readline(err)
    }
}

impl From<std::io::Error> for ShellError {
    fn from(err: std::io::Error) -> Self {
        ShellError::Io(err)
    }
}

impl From<ctrlc::Error> for ShellError {
    fn from(err: ctrlc::Error) -> Self {
        ShellError::CtrlC(err.to_string())
    }
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellError::Readline(e) => write!(f, "readline error: {}", e),
            ShellError::Io(e) => write!(f, "{}", os_error_text(e)),
            ShellError::Prompt(msg) => write!(f, "{}", msg),
            ShellError::CtrlC(msg) => write!(f, "cannot install Ctrl-C handler: {}", msg),
        }
    }
}

impl std::error::Error for ShellError {}
