//! The `LineChannel` trait.

use std::time::Duration;

use crate::ChannelResult;

/// A bidirectional, line-oriented pipe to a controller.
///
/// Implemented by [`ProcessChannel`][crate::ProcessChannel] for real
/// subprocesses and by [`ScriptedChannel`][crate::ScriptedChannel] for tests.
pub trait LineChannel {
    /// Queue one line (without its terminator) for the controller.
    fn write_line(&mut self, line: &str) -> ChannelResult<()>;

    /// Push every queued line to the controller.
    fn flush(&mut self) -> ChannelResult<()>;

    /// Block for at most `timeout` waiting for the next complete line.
    fn read_line(&mut self, timeout: Duration) -> ChannelResult<String>;

    /// A line the controller has already written, without waiting.
    fn poll_line(&mut self) -> ChannelResult<Option<String>>;

    /// Write every line of a frame, then flush.
    fn write_frame(&mut self, lines: &[String]) -> ChannelResult<()> {
        for line in lines {
            self.write_line(line)?;
        }
        self.flush()
    }
}
