//! An in-memory `LineChannel` that replays canned responses.

use std::collections::VecDeque;
use std::time::Duration;

use crate::{ChannelResult, LineChannel, ProcessError, ProtocolError};

enum Reply {
    Line(String),
    /// Already waiting when the next frame is about to be written.
    Early(String),
    Timeout,
    Closed,
}

/// A fake controller for tests: records every written line and answers
/// reads from a queue.
///
/// Once the queue is exhausted, reads return the fallback line if one was
/// set, otherwise [`ProtocolError::ChannelClosed`].
///
/// ```rust,ignore
/// let channel = ScriptedChannel::new()
///     .respond("S S")
///     .respond("U D")
///     .then_timeout();
/// ```
#[derive(Default)]
pub struct ScriptedChannel {
    written:  Vec<String>,
    pending:  Vec<String>,
    replies:  VecDeque<Reply>,
    fallback: Option<String>,
    flushes:  usize,
}

impl ScriptedChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every read with `line` once the scripted replies run out.
    pub fn repeating(line: impl Into<String>) -> Self {
        Self { fallback: Some(line.into()), ..Self::default() }
    }

    /// Queue a response line.
    pub fn respond(mut self, line: impl Into<String>) -> Self {
        self.replies.push_back(Reply::Line(line.into()));
        self
    }

    /// Queue a line the controller writes before it is sent the next frame.
    pub fn respond_early(mut self, line: impl Into<String>) -> Self {
        self.replies.push_back(Reply::Early(line.into()));
        self
    }

    /// Queue a read that times out.
    pub fn then_timeout(mut self) -> Self {
        self.replies.push_back(Reply::Timeout);
        self
    }

    /// Queue a read that finds the channel closed.
    pub fn then_close(mut self) -> Self {
        self.replies.push_back(Reply::Closed);
        self
    }

    /// Every flushed line, in write order.
    pub fn written(&self) -> &[String] {
        &self.written
    }

    /// How many times the channel was flushed.
    pub fn flushes(&self) -> usize {
        self.flushes
    }
}

impl LineChannel for ScriptedChannel {
    fn write_line(&mut self, line: &str) -> ChannelResult<()> {
        self.pending.push(line.to_owned());
        Ok(())
    }

    fn flush(&mut self) -> ChannelResult<()> {
        self.written.append(&mut self.pending);
        self.flushes += 1;
        Ok(())
    }

    fn read_line(&mut self, timeout: Duration) -> ChannelResult<String> {
        match self.replies.pop_front() {
            Some(Reply::Line(line) | Reply::Early(line)) => Ok(line),
            Some(Reply::Timeout) => Err(ProcessError::Timeout {
                waited_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            }
            .into()),
            Some(Reply::Closed) => Err(ProtocolError::ChannelClosed.into()),
            None => self
                .fallback
                .clone()
                .ok_or_else(|| ProtocolError::ChannelClosed.into()),
        }
    }

    fn poll_line(&mut self) -> ChannelResult<Option<String>> {
        if !matches!(self.replies.front(), Some(Reply::Early(_))) {
            return Ok(None);
        }
        match self.replies.pop_front() {
            Some(Reply::Early(line)) => Ok(Some(line)),
            _ => Ok(None),
        }
    }
}
