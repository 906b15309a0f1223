use std::env;
use std::ffi::CStr;
use std::io;

use crate::error::{os_error_text, ShellError};

const HOSTNAME_LIMIT: usize = 256;

/// What the prompt shows: `(<user>@<host>) <cwd> >>> `.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub user: String,
    pub host: String,
    pub cwd: String,
}

impl Prompt {
    /// Looks up the current user, host name and working directory.
    ///
    /// Any failure here is fatal to the shell.
    pub fn gather() -> Result<Self, ShellError> {
        Ok(Self {
            user: current_user()?,
            host: host_name()?,
            cwd: current_dir()?,
        })
    }

    pub fn render(&self) -> String {
        format!("({}@{}) {} >>> ", self.user, self.host, self.cwd)
    }
}

/// Produces the prompt text shown before each line is read.
pub trait PromptSource {
    fn render(&self) -> Result<String, ShellError>;
}

/// Prompt built from the live user, host and working directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemPrompt;

impl PromptSource for SystemPrompt {
    fn render(&self) -> Result<String, ShellError> {
        Ok(Prompt::gather()?.render())
    }
}

fn current_user() -> Result<String, ShellError> {
    let uid = unsafe { libc::getuid() };
    let entry = unsafe { libc::getpwuid(uid) };
    if entry.is_null() {
        return Err(ShellError::Prompt(format!("no user entry for uid {}", uid)));
    }

    let name = unsafe { CStr::from_ptr((*entry).pw_name) };
    Ok(name.to_string_lossy().into_owned())
}

fn host_name() -> Result<String, ShellError> {
    let mut buf = [0u8; HOSTNAME_LIMIT];
    if unsafe { libc::gethostname(buf.as_mut_ptr().cast(), buf.len()) } != 0 {
        return Err(ShellError::Prompt(os_error_text(&io::Error::last_os_error())));
    }

    let len = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    Ok(String::from_utf8_lossy(&buf[..len]).into_owned())
}

fn current_dir() -> Result<String, ShellError> {
    let cwd = env::current_dir().map_err(|e| ShellError::Prompt(os_error_text(&e)))?;
    Ok(cwd.to_string_lossy().into_owned())
}
