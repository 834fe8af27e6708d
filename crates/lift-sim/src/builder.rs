//! Fluent builder for constructing a [`Sim`].

use lift_building::World;
use lift_core::SimConfig;
use lift_protocol::DirectiveSource;

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<D>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: floors, carriages, capacity, ticks, seed, …
/// - `D: DirectiveSource`: usually a [`lift_protocol::Controller`] wrapping
///   a [`lift_protocol::ProcessChannel`]
///
/// # Optional inputs
///
/// | Method       | Default                                   |
/// |--------------|-------------------------------------------|
/// | `.world(w)`  | `World::new(&config)`: empty, cars at 0   |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, controller).build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<D: DirectiveSource> {
    config: SimConfig,
    source: D,
    world:  Option<World>,
}

impl<D: DirectiveSource> SimBuilder<D> {
    pub fn new(config: SimConfig, source: D) -> Self {
        Self { config, source, world: None }
    }

    /// Start from a prepared building (seeded queues, placed carriages).
    ///
    /// Its floor and carriage counts must match the config.
    pub fn world(mut self, world: World) -> Self {
        self.world = Some(world);
        self
    }

    /// Validate inputs and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<D>> {
        self.config
            .validate()
            .map_err(|e| SimError::Config(e.to_string()))?;

        let world = match self.world {
            Some(w) => {
                if w.floors().len() != self.config.floors
                    || w.carriages().len() != self.config.carriages
                {
                    return Err(SimError::Config(format!(
                        "prepared world has {} floors and {} carriages, config expects {} and {}",
                        w.floors().len(),
                        w.carriages().len(),
                        self.config.floors,
                        self.config.carriages,
                    )));
                }
                w
            }
            None => World::new(&self.config)?,
        };

        Ok(Sim {
            config: self.config,
            world,
            source: self.source,
            opened: false,
        })
    }
}
