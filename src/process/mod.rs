use std::fmt;

use crate::error::os_error_text;

pub mod executor;

pub use executor::ProcessExecutor;

#[derive(Debug)]
pub enum ProcessError {
    /// An argument holds a NUL byte and cannot be handed to the OS.
    InvalidArgument(String),
    Spawn(std::io::Error),
    Wait(std::io::Error),
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::InvalidArgument(arg) => {
                write!(f, "argument contains a NUL byte: {:?}", arg)
            }
            ProcessError::Spawn(e) => write!(f, "{}", os_error_text(e)),
            ProcessError::Wait(e) => write!(f, "wait failed: {}", os_error_text(e)),
        }
    }
}

impl std::error::Error for ProcessError {}

/// How a child process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildExit {
    Exited(i32),
    Signaled(i32),
}

impl ChildExit {
    pub fn success(self) -> bool {
        self == ChildExit::Exited(0)
    }
}

/// Runs an external program and blocks until it has exited or been killed.
///
/// The child sees `program` followed by `args` as its argument list. A
/// child that is merely stopped has not ended; implementations keep
/// waiting past it.
pub trait Launcher {
    fn launch(&self, program: &str, args: &[&str]) -> Result<ChildExit, ProcessError>;
}
