//! Carriage movement state and controller directives.

/// The movement state of a carriage.
///
/// `ForcedRecovery` is only ever entered by the boundary clamp inside
/// [`Carriage::step`][crate::Carriage::step]; no [`Directive`] maps to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MovementState {
    #[default]
    Idle,
    MovingUp,
    MovingDown,
    /// Clamped at the top or bottom while empty; the carriage now seeks the
    /// nearest floor with waiting passengers on its own.
    ForcedRecovery,
}

impl MovementState {
    /// Floors travelled per tick in this state: `+1`, `-1` or `0`.
    #[inline]
    pub fn delta(self) -> i64 {
        match self {
            MovementState::MovingUp   => 1,
            MovementState::MovingDown => -1,
            MovementState::Idle | MovementState::ForcedRecovery => 0,
        }
    }

    /// Lower-case name used in output files and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            MovementState::Idle           => "idle",
            MovementState::MovingUp       => "up",
            MovementState::MovingDown     => "down",
            MovementState::ForcedRecovery => "recovery",
        }
    }
}

/// A per-tick instruction from the controller for one carriage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Directive {
    /// Hold position (`S`).
    Stay,
    /// Head up (`U`).
    Up,
    /// Head down (`D`).
    Down,
}

impl From<Directive> for MovementState {
    fn from(directive: Directive) -> Self {
        match directive {
            Directive::Stay => MovementState::Idle,
            Directive::Up   => MovementState::MovingUp,
            Directive::Down => MovementState::MovingDown,
        }
    }
}
