//! The `DirectiveSource` trait: where per-tick carriage directives come from.

use lift_building::{Directive, WorldView};

use crate::ChannelResult;

/// Produces one [`Directive`] per carriage each tick.
///
/// The simulation loop calls [`open`][Self::open] once before the first
/// tick and [`decide`][Self::decide] once at the start of every tick.
/// Any error is fatal to the run.
pub trait DirectiveSource {
    /// Start a session.  Default: nothing to do.
    fn open(&mut self, _view: &WorldView<'_>) -> ChannelResult<()> {
        Ok(())
    }

    /// Return exactly `view.carriage_count()` directives, in carriage order.
    fn decide(&mut self, view: &WorldView<'_>) -> ChannelResult<Vec<Directive>>;
}

/// A [`DirectiveSource`] that tells every carriage to stay put.
///
/// Useful for headless smoke runs and tests that only exercise the
/// autonomous parts of the carriage state machine.
pub struct IdleDirectives;

impl DirectiveSource for IdleDirectives {
    fn decide(&mut self, view: &WorldView<'_>) -> ChannelResult<Vec<Directive>> {
        Ok(vec![Directive::Stay; view.carriage_count()])
    }
}
