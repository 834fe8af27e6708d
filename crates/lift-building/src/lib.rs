//! `lift-building`: the simulated building.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                        |
//! |---------------|-----------------------------------------------------------------|
//! | [`passenger`] | `Passenger`: one arrival request                                |
//! | [`movement`]  | `MovementState` (closed sum type), `Directive`                  |
//! | [`floor`]     | `Floor`: FIFO waiting queue, arrival generator, unhappiness     |
//! | [`floors`]    | `Floors`: ordered floor list and the query handle carriages see |
//! | [`carriage`]  | `Carriage`: boarded queue and the per-tick state machine        |
//! | [`world`]     | `World`: owns floors, carriages, tick counter, score            |
//! | [`view`]      | `WorldView<'a>` and owned `BuildingSnapshot` (read-only)        |
//! | [`error`]     | `BuildingError`, `InvariantViolation`                           |
//!
//! # Ownership
//!
//! `World` owns every `Floor` and `Carriage` exclusively.  A carriage never
//! holds a reference back to the world; instead `World` lends it the
//! [`Floors`] handle for the duration of its tick, which is all the
//! carriage needs to board passengers and find the nearest waiting floor.
//!
//! A passenger's location is structural: it lives in exactly one
//! `VecDeque`, either a floor's waiting queue or a carriage's boarded queue,
//! and moving it between the two is a move of the value itself.

pub mod carriage;
pub mod error;
pub mod floor;
pub mod floors;
pub mod movement;
pub mod passenger;
pub mod view;
pub mod world;


pub use carriage::{Carriage, CarriageTick};
pub use error::{BuildingError, BuildingResult, InvariantViolation};
pub use floor::{Floor, FloorTick};
pub use floors::Floors;
pub use movement::{Directive, MovementState};
pub use passenger::Passenger;
pub use view::{BuildingSnapshot, CarriageSnapshot, FloorSnapshot, WorldView};
pub use world::World;
