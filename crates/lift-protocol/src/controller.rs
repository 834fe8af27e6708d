//! Session framing on top of a [`LineChannel`].

use std::time::Duration;

use lift_building::{Directive, WorldView};
use lift_core::FloorIndexing;
use tracing::{debug, info};

use crate::codec::{self, CONTINUE, SESSION_OPEN};
use crate::{ChannelResult, DirectiveSource, LineChannel, ProtocolError};

/// Drives one controller session: `N` on open, then one full round trip per
/// tick, `C`-prefixed from the second tick on.
pub struct Controller<C: LineChannel> {
    channel:   C,
    indexing:  FloorIndexing,
    timeout:   Duration,
    opened:    bool,
    exchanges: u64,
    /// Reused frame buffer.
    frame:     Vec<String>,
}

impl<C: LineChannel> Controller<C> {
    pub fn new(channel: C, indexing: FloorIndexing, timeout: Duration) -> Self {
        Self {
            channel,
            indexing,
            timeout,
            opened: false,
            exchanges: 0,
            frame: Vec::new(),
        }
    }

    /// Completed round trips.
    #[inline]
    pub fn exchanges(&self) -> u64 {
        self.exchanges
    }

    #[inline]
    pub fn channel(&self) -> &C {
        &self.channel
    }

    /// Unwrap the inner channel (e.g. to inspect a scripted transcript).
    pub fn into_channel(self) -> C {
        self.channel
    }
}

impl<C: LineChannel> DirectiveSource for Controller<C> {
    fn open(&mut self, view: &WorldView<'_>) -> ChannelResult<()> {
        if self.opened {
            return Ok(());
        }
        self.channel.write_line(SESSION_OPEN)?;
        self.channel.flush()?;
        self.opened = true;
        info!(
            floors = view.floor_count(),
            carriages = view.carriage_count(),
            "controller session opened"
        );
        Ok(())
    }

    fn decide(&mut self, view: &WorldView<'_>) -> ChannelResult<Vec<Directive>> {
        self.open(view)?;

        self.frame.clear();
        if self.exchanges > 0 {
            self.frame.push(CONTINUE.to_owned());
        }
        codec::encode_state(view, self.indexing, &mut self.frame);
        // Anything already waiting was not written in answer to this frame.
        if let Some(line) = self.channel.poll_line()? {
            return Err(ProtocolError::UnsolicitedResponse { line }.into());
        }
        self.channel.write_frame(&self.frame)?;

        let line = self.channel.read_line(self.timeout)?;
        let directives = codec::parse_response(&line, view.carriage_count())?;
        self.exchanges += 1;
        debug!(tick = view.tick.0, response = %line, "controller responded");
        Ok(directives)
    }
}
