//! Subprocess execution with captured output and a hard timeout.
//!
//! Used for `git` lookups during identity resolution and by the hidden
//! checks to run lab programs in isolation. Input is written and output
//! drained on helper threads, so the deadline covers every pipe. No
//! retries: a non-zero exit or a timeout is reported to the caller as-is.

use crate::error::{LabError, LabResult};
use std::ffi::OsStr;
use std::io::{self, Read, Write};
use std::process::{Child, ChildStderr, ChildStdin, ChildStdout, Command, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Per-program limit applied by the hidden checks.
pub const HIDDEN_TEST_TIMEOUT: Duration = Duration::from_secs(10);

const POLL_INTERVAL: Duration = Duration::from_millis(10);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captured {
    /// `None` when the process was terminated by a signal.
    pub status_code: Option<i32>,
    pub stdout:      String,
    pub stderr:      String,
}

impl Captured {
    pub fn success(&self) -> bool {
        self.status_code == Some(0)
    }

    /// Turn a non-zero exit into `LabError::ProcessFailed` carrying stderr.
    pub fn ensure_success(self) -> LabResult<Self> {
        if self.success() {
            Ok(self)
        } else {
            Err(LabError::ProcessFailed {
                code:   self.status_code,
                stderr: self.stderr,
            })
        }
    }
}

/// Run `program` with `args`, feed it `stdin` (or nothing), and wait at
/// most `timeout` for it to exit. The child is killed on expiry.
pub fn run_captured<S: AsRef<OsStr>>(
    program: impl AsRef<OsStr>,
    args: &[S],
    stdin: Option<&str>,
    timeout: Duration,
) -> LabResult<Captured> {
    let program = program.as_ref();
    let mut child = Command::new(program)
        .args(args)
        .stdin(if stdin.is_some() { Stdio::piped() } else { Stdio::null() })
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    let out_reader = spawn_reader(child.stdout.take());
    let err_reader = spawn_reader(child.stderr.take());
    let writer = stdin
        .zip(child.stdin.take())
        .map(|(input, pipe)| spawn_writer(pipe, input.to_owned()));

    let status_code = wait_with_timeout(&mut child, timeout, program)?;
    if let Some(writer) = writer {
        join_helper(writer)?;
    }
    Ok(Captured {
        status_code,
        stdout: join_helper(out_reader)?,
        stderr: join_helper(err_reader)?,
    })
}

fn wait_with_timeout(child: &mut Child, timeout: Duration, program: &OsStr) -> LabResult<Option<i32>> {
    let deadline = Instant::now() + timeout;
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(status.code());
        }
        if Instant::now() >= deadline {
            log::warn!("{} exceeded {}s, killing", program.to_string_lossy(), timeout.as_secs());
            let _ = child.kill();
            let _ = child.wait();
            return Err(LabError::Timeout { secs: timeout.as_secs() });
        }
        thread::sleep(POLL_INTERVAL);
    }
}

trait Pipe: Read + Send + 'static {}
impl Pipe for ChildStdout {}
impl Pipe for ChildStderr {}

fn spawn_reader<P: Pipe>(pipe: Option<P>) -> JoinHandle<io::Result<String>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            pipe.read_to_end(&mut buf)?;
        }
        Ok(String::from_utf8_lossy(&buf).into_owned())
    })
}

/// The pipe is closed when the thread ends, which is the child's EOF.
fn spawn_writer(mut pipe: ChildStdin, input: String) -> JoinHandle<io::Result<()>> {
    thread::spawn(move || match pipe.write_all(input.as_bytes()) {
        // A child that exits without reading its input closes the pipe early.
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    })
}

fn join_helper<T>(handle: JoinHandle<io::Result<T>>) -> LabResult<T> {
    handle
        .join()
        .map_err(|_| anyhow::anyhow!("pipe helper thread panicked"))?
        .map_err(LabError::from)
}
