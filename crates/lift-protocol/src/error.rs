//! Controller error types.
//!
//! Both kinds are fatal to the current run: the simulation stops, releases
//! the controller process, and surfaces the error.  Nothing is retried.

use std::process::ExitStatus;

use thiserror::Error;

/// The controller said something the simulator cannot use.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("expected {expected} directives, got {got} in response {line:?}")]
    WrongTokenCount {
        expected: usize,
        got:      usize,
        line:     String,
    },

    #[error("unrecognized directive {token:?} at position {position} (expected S, U or D)")]
    UnknownToken { position: usize, token: String },

    #[error("controller closed its output before responding")]
    ChannelClosed,

    #[error("controller wrote {line:?} before the frame it answers was sent")]
    UnsolicitedResponse { line: String },
}

/// The controller process could not be run or stopped answering.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("failed to launch controller {program:?}: {source}")]
    Launch {
        program: String,
        #[source]
        source:  std::io::Error,
    },

    #[error("controller exited unexpectedly ({status})")]
    Exited { status: ExitStatus },

    #[error("controller did not respond within {waited_ms} ms")]
    Timeout { waited_ms: u64 },

    #[error("controller pipe error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    #[error("process error: {0}")]
    Process(#[from] ProcessError),
}

pub type ChannelResult<T> = Result<T, ChannelError>;
