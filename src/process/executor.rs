use std::ffi::{CStr, CString};
use std::io::{self, Write};

use super::{ChildExit, Launcher, ProcessError};

const DIAGNOSTIC_PREFIX: &[u8] = b"cool_shell: ";

/// Launches programs with `fork` and `execvp`, then waits with `waitpid`.
///
/// The child inherits the shell's environment, working directory and
/// standard streams. Executable lookup through `PATH` is left to `execvp`.
#[derive(Clone, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl Launcher for ProcessExecutor {
    fn launch(&self, program: &str, args: &[&str]) -> Result<ChildExit, ProcessError> {
        // Everything the child needs is built before forking.
        let c_args = std::iter::once(program)
            .chain(args.iter().copied())
            .map(|arg| {
                CString::new(arg).map_err(|_| ProcessError::InvalidArgument(arg.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let mut argv: Vec<*const libc::c_char> = c_args.iter().map(|arg| arg.as_ptr()).collect();
        argv.push(std::ptr::null());

        // Otherwise buffered output would be written by both processes.
        let _ = io::stdout().flush();

        match unsafe { libc::fork() } {
            -1 => Err(ProcessError::Spawn(io::Error::last_os_error())),
            0 => exec_child(&argv),
            pid => wait_for_exit(pid),
        }
    }
}

/// Replaces the child's image. Never returns into shell code.
///
/// Between `fork` and `_exit` only async-signal-safe calls are made: no
/// allocation and no locked Rust streams.
fn exec_child(argv: &[*const libc::c_char]) -> ! {
    unsafe {
        libc::execvp(argv[0], argv.as_ptr());

        let errno = io::Error::last_os_error().raw_os_error().unwrap_or(0);
        let reason = CStr::from_ptr(libc::strerror(errno)).to_bytes();
        write_stderr(DIAGNOSTIC_PREFIX);
        write_stderr(reason);
        write_stderr(b"\n");
        libc::_exit(1)
    }
}

unsafe fn write_stderr(bytes: &[u8]) {
    libc::write(libc::STDERR_FILENO, bytes.as_ptr().cast(), bytes.len());
}

fn wait_for_exit(pid: libc::pid_t) -> Result<ChildExit, ProcessError> {
    let mut status: libc::c_int = 0;
    loop {
        if unsafe { libc::waitpid(pid, &mut status, libc::WUNTRACED) } == -1 {
            let err = io::Error::last_os_error();
            if err.kind() == io::ErrorKind::Interrupted {
                continue;
            }
            return Err(ProcessError::Wait(err));
        }

        if libc::WIFEXITED(status) {
            return Ok(ChildExit::Exited(libc::WEXITSTATUS(status)));
        }
        if libc::WIFSIGNALED(status) {
            return Ok(ChildExit::Signaled(libc::WTERMSIG(status)));
        }
        // Stopped, not finished.
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_reported() {
        let executor = ProcessExecutor::new();

        assert_eq!(executor.launch("true", &[]).unwrap(), ChildExit::Exited(0));
        assert_eq!(executor.launch("false", &[]).unwrap(), ChildExit::Exited(1));
        assert_eq!(
            executor.launch("sh", &["-c", "exit 7"]).unwrap(),
            ChildExit::Exited(7)
        );
    }

    #[test]
    fn test_signaled_child() {
        let executor = ProcessExecutor::new();

        let exit = executor.launch("sh", &["-c", "kill -TERM $$"]).unwrap();
        assert_eq!(exit, ChildExit::Signaled(libc::SIGTERM));
        assert!(!exit.success());
    }

    #[test]
    fn test_waits_past_stopped_child() {
        let executor = ProcessExecutor::new();

        // The child stops itself; a background helper resumes it a moment later.
        let exit = executor
            .launch("sh", &["-c", "(sleep 1; kill -CONT $$) & kill -STOP $$; exit 3"])
            .unwrap();
        assert_eq!(exit, ChildExit::Exited(3));
    }

    #[test]
    fn test_missing_executable_fails_in_child() {
        let executor = ProcessExecutor::new();

        let exit = executor
            .launch("cool-shell-test-no-such-program", &[])
            .unwrap();
        assert_eq!(exit, ChildExit::Exited(1));
    }

    #[test]
    fn test_nul_byte_is_rejected() {
        let executor = ProcessExecutor::new();

        let result = executor.launch("echo", &["a\0b"]);
        assert!(matches!(result, Err(ProcessError::InvalidArgument(_))));

        let result = executor.launch("ec\0ho", &[]);
        assert!(matches!(result, Err(ProcessError::InvalidArgument(_))));
    }

    #[test]
    fn test_program_name_is_argv_zero() {
        let executor = ProcessExecutor::new();

        let exit = executor
            .launch("sh", &["-c", "test \"$0\" = sh && test \"$1\" = two", "sh", "two"])
            .unwrap();
        assert_eq!(exit, ChildExit::Exited(0));
    }
}
