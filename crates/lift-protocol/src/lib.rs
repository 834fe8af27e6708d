//! `lift-protocol`: how the simulator talks to an external controller.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                     |
//! |----------------|--------------------------------------------------------------|
//! | [`channel`]    | `LineChannel` trait: write lines, flush, bounded line read   |
//! | [`process`]    | `ProcessChannel`: controller subprocess over stdin/stdout    |
//! | [`scripted`]   | `ScriptedChannel`: in-memory fake for tests and replays      |
//! | [`codec`]      | Frame encoding and response parsing                          |
//! | [`controller`] | `Controller<C>`: session framing on top of any `LineChannel` |
//! | [`source`]     | `DirectiveSource` trait, `IdleDirectives`                    |
//! | [`error`]      | `ProtocolError`, `ProcessError`, `ChannelError`              |
//!
//! # Wire format
//!
//! Every line is newline-terminated with no trailing whitespace.
//!
//! ```text
//! N                       session open (once)
//! C                       before every tick frame except the first
//! per floor, in order:    "{hasUp}{hasDown}"  countUp  countDown
//! per carriage, in order: "{occupied}{direction}"  floor  "{full}"  pressedMask
//! ← one response line:    S|U|D per carriage, whitespace separated
//! ```
//!
//! `direction` is `0` down, `1` up, `2` otherwise.  `occupied` is `0` only
//! for an empty carriage that is not in forced recovery.  `floor` is
//! numbered per [`FloorIndexing`][lift_core::FloorIndexing]; `pressedMask`
//! has one `0`/`1` per floor, `1` where some rider is headed.

pub mod channel;
pub mod codec;
pub mod controller;
pub mod error;
pub mod process;
pub mod scripted;
pub mod source;


pub use channel::LineChannel;
pub use controller::Controller;
pub use error::{ChannelError, ChannelResult, ProcessError, ProtocolError};
pub use process::ProcessChannel;
pub use scripted::ScriptedChannel;
pub use source::{DirectiveSource, IdleDirectives};
