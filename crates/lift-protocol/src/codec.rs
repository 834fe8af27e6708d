//! Frame encoding and response parsing.
//!
//! Pure functions over a [`WorldView`]; no I/O happens here.

use lift_building::{Carriage, Directive, Floor, MovementState, WorldView};
use lift_core::FloorIndexing;

use crate::ProtocolError;

/// First line of a session.
pub const SESSION_OPEN: &str = "N";

/// First line of every tick frame after the first.
pub const CONTINUE: &str = "C";

/// Append the per-floor and per-carriage lines for one tick to `out`.
pub fn encode_state(view: &WorldView<'_>, indexing: FloorIndexing, out: &mut Vec<String>) {
    for floor in view.floors() {
        encode_floor(floor, out);
    }
    for carriage in view.carriages {
        encode_carriage(carriage, view.floor_count(), indexing, out);
    }
}

fn encode_floor(floor: &Floor, out: &mut Vec<String>) {
    out.push(format!(
        "{}{}",
        u8::from(floor.has_up_request()),
        u8::from(floor.has_down_request())
    ));
    out.push(floor.count_up().to_string());
    out.push(floor.count_down().to_string());
}

fn encode_carriage(
    carriage:    &Carriage,
    floor_count: usize,
    indexing:    FloorIndexing,
    out:         &mut Vec<String>,
) {
    out.push(format!(
        "{}{}",
        u8::from(!carriage.is_available()),
        direction_code(carriage.state())
    ));
    out.push(indexing.encode(carriage.floor()).to_string());
    out.push(u8::from(carriage.is_full()).to_string());
    out.push(pressed_mask(carriage, floor_count));
}

/// `0` down, `1` up, `2` for idle and forced recovery.
pub fn direction_code(state: MovementState) -> u8 {
    match state {
        MovementState::MovingDown => 0,
        MovementState::MovingUp   => 1,
        MovementState::Idle | MovementState::ForcedRecovery => 2,
    }
}

/// One `0`/`1` per floor, `1` where at least one rider is headed.
pub fn pressed_mask(carriage: &Carriage, floor_count: usize) -> String {
    let mut mask = vec![b'0'; floor_count];
    for rider in carriage.riders() {
        if let Some(slot) = mask.get_mut(rider.destination.index()) {
            *slot = b'1';
        }
    }
    mask.into_iter().map(char::from).collect()
}

/// Parse one response line into exactly `carriages` directives.
pub fn parse_response(line: &str, carriages: usize) -> Result<Vec<Directive>, ProtocolError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != carriages {
        return Err(ProtocolError::WrongTokenCount {
            expected: carriages,
            got:      tokens.len(),
            line:     line.to_owned(),
        });
    }
    tokens
        .into_iter()
        .enumerate()
        .map(|(position, token)| match token {
            "S" => Ok(Directive::Stay),
            "U" => Ok(Directive::Up),
            "D" => Ok(Directive::Down),
            other => Err(ProtocolError::UnknownToken { position, token: other.to_owned() }),
        })
        .collect()
}
