//! Controller subprocess over stdin/stdout.

use std::ffi::OsStr;
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
use std::process::{Child, ChildStdin, Command, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, TryRecvError};
use std::thread;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::{ChannelError, ChannelResult, LineChannel, ProcessError, ProtocolError};

/// How long to wait for a child that closed its stdout to be reapable, so
/// the error can say whether it exited.
const EXIT_GRACE: Duration = Duration::from_millis(200);
const EXIT_POLL: Duration = Duration::from_millis(10);

/// A controller launched as a child process.
///
/// The simulator writes frames to the child's stdin and reads responses from
/// its stdout.  A background thread moves stdout lines into a channel so
/// [`read_line`][LineChannel::read_line] can wait with a deadline; a second
/// thread forwards every stderr line to the log at `warn` level.
///
/// # Cleanup
///
/// Dropping a `ProcessChannel` closes the child's stdin, kills the child if
/// it is still running, and reaps it.  This happens on every path out of a
/// run, including errors and panics that unwind.
pub struct ProcessChannel {
    program: String,
    child:   Child,
    stdin:   Option<BufWriter<ChildStdin>>,
    lines:   Receiver<io::Result<String>>,
}

impl ProcessChannel {
    /// Launch `program` with `args`.
    pub fn spawn<P, I, S>(program: P, args: I) -> Result<Self, ProcessError>
    where
        P: AsRef<OsStr>,
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let program_os = program.as_ref();
        let program = program_os.to_string_lossy().into_owned();
        let mut child = Command::new(program_os)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| ProcessError::Launch { program: program.clone(), source })?;

        let stdin = child.stdin.take().map(BufWriter::new);
        let (tx, lines) = mpsc::channel();
        if let Some(stdout) = child.stdout.take() {
            thread::spawn(move || {
                for line in BufReader::new(stdout).lines() {
                    let failed = line.is_err();
                    if tx.send(line).is_err() || failed {
                        break;
                    }
                }
            });
        }
        if let Some(stderr) = child.stderr.take() {
            forward_stderr(program.clone(), stderr);
        }

        debug!(program = %program, pid = child.id(), "controller launched");
        Ok(Self { program, child, stdin, lines })
    }

    /// The controller's program path.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// The error to report once the controller's pipes are gone: an exit if
    /// the child has terminated, otherwise `closed`.
    fn gone(&mut self, closed: ChannelError) -> ChannelError {
        let mut waited = Duration::ZERO;
        loop {
            match self.child.try_wait() {
                Ok(Some(status)) => return ProcessError::Exited { status }.into(),
                Ok(None) if waited < EXIT_GRACE => {
                    thread::sleep(EXIT_POLL);
                    waited += EXIT_POLL;
                }
                Ok(None) => return closed,
                Err(e) => return ProcessError::Io(e).into(),
            }
        }
    }

    fn on_write_error(&mut self, e: io::Error) -> ChannelError {
        if e.kind() == io::ErrorKind::BrokenPipe {
            self.gone(ProcessError::Io(e).into())
        } else {
            ProcessError::Io(e).into()
        }
    }
}

impl LineChannel for ProcessChannel {
    fn write_line(&mut self, line: &str) -> ChannelResult<()> {
        let Some(stdin) = self.stdin.as_mut() else {
            return Err(ProtocolError::ChannelClosed.into());
        };
        match writeln!(stdin, "{line}") {
            Ok(()) => Ok(()),
            Err(e) => Err(self.on_write_error(e)),
        }
    }

    fn flush(&mut self) -> ChannelResult<()> {
        let Some(stdin) = self.stdin.as_mut() else {
            return Err(ProtocolError::ChannelClosed.into());
        };
        match stdin.flush() {
            Ok(()) => Ok(()),
            Err(e) => Err(self.on_write_error(e)),
        }
    }

    fn read_line(&mut self, timeout: Duration) -> ChannelResult<String> {
        match self.lines.recv_timeout(timeout) {
            Ok(Ok(line)) => Ok(line),
            Ok(Err(e)) => Err(ProcessError::Io(e).into()),
            Err(RecvTimeoutError::Timeout) => Err(ProcessError::Timeout {
                waited_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            }
            .into()),
            Err(RecvTimeoutError::Disconnected) => Err(self.gone(ProtocolError::ChannelClosed.into())),
        }
    }

    fn poll_line(&mut self) -> ChannelResult<Option<String>> {
        match self.lines.try_recv() {
            Ok(Ok(line)) => Ok(Some(line)),
            Ok(Err(e)) => Err(ProcessError::Io(e).into()),
            // A closed stdout surfaces on the next write or read.
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => Ok(None),
        }
    }
}

impl Drop for ProcessChannel {
    fn drop(&mut self) {
        // Closing stdin first lets a well-behaved controller see EOF.
        if let Some(mut stdin) = self.stdin.take() {
            let _ = stdin.flush();
        }
        if !matches!(self.child.try_wait(), Ok(Some(_))) {
            if let Err(e) = self.child.kill() {
                warn!(program = %self.program, error = %e, "failed to kill controller");
            }
        }
        match self.child.wait() {
            Ok(status) => info!(program = %self.program, %status, "controller session closed"),
            Err(e) => warn!(program = %self.program, error = %e, "failed to reap controller"),
        }
    }
}

/// Log every stderr line from the controller until it closes the stream.
fn forward_stderr<R: Read + Send + 'static>(program: String, stderr: R) {
    thread::spawn(move || {
        for line in BufReader::new(stderr).lines() {
            match line {
                Ok(line) => warn!(target: "lift::controller", program = %program, "{line}"),
                Err(_) => break,
            }
        }
    });
}
