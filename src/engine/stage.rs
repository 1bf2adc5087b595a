//! Multi-instance coordinator.
//!
//! The stage owns the engine configuration and RNG, spawns one firework
//! per chat message, and advances all live instances independently. It is
//! single-threaded and cooperative: the host drives it from its own
//! animation loop, and instances never share mutable state.

use super::{Firework, RenderSnapshot};
use crate::config::EngineConfig;
use crate::message::{derive_params, MessageEvent};
use serde::Serialize;
use std::collections::HashMap;

/// Opaque handle for one live firework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FireworkId(u64);

#[derive(Debug, thiserror::Error)]
pub enum SpawnError {
    /// Blank text is filtered upstream; hitting this means the host's
    /// input validation broke.
    #[error("message text is empty")]
    EmptyMessage,
}

pub struct Stage {
    config: EngineConfig,
    rng: fastrand::Rng,
    next_id: u64,
    fireworks: HashMap<FireworkId, Firework>,
}

impl Stage {
    pub fn new(config: EngineConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        Self {
            config,
            rng,
            next_id: 0,
            fireworks: HashMap::new(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Derive visual parameters from a message and mount a new firework.
    pub fn spawn(&mut self, event: &MessageEvent) -> Result<FireworkId, SpawnError> {
        if event.text.trim().is_empty() {
            return Err(SpawnError::EmptyMessage);
        }

        let params = derive_params(event, &self.config, &mut self.rng);
        log::debug!(
            "spawning {} firework at ({:.0},{:.0}) size {:.1}",
            params.shape.name(),
            params.target.x,
            params.target.y,
            params.size
        );

        // each instance gets its own forked RNG so instances stay independent
        let instance_rng = fastrand::Rng::with_seed(self.rng.u64(..));
        let id = FireworkId(self.next_id);
        self.next_id += 1;
        self.fireworks
            .insert(id, Firework::new(params, &self.config, instance_rng));
        Ok(id)
    }

    pub fn get(&self, id: FireworkId) -> Option<&Firework> {
        self.fireworks.get(&id)
    }

    pub fn get_mut(&mut self, id: FireworkId) -> Option<&mut Firework> {
        self.fireworks.get_mut(&id)
    }

    pub fn contains(&self, id: FireworkId) -> bool {
        self.fireworks.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.fireworks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fireworks.is_empty()
    }

    /// Advance every live instance by the same wall-clock delta, then
    /// unmount the ones that completed (their `on_end` has already fired
    /// from inside their own tick).
    pub fn tick_all(&mut self, dt_secs: f32) {
        self.fireworks.retain(|_, firework| !firework.tick(dt_secs));
    }

    /// Synchronous teardown: the instance is dropped immediately, no
    /// further ticks run for it and none of its callbacks fire.
    pub fn remove(&mut self, id: FireworkId) -> bool {
        self.fireworks.remove(&id).is_some()
    }

    /// Snapshots of all live instances, for hosts that render the whole
    /// stage at once.
    pub fn snapshots(&self) -> Vec<(FireworkId, &RenderSnapshot)> {
        let mut all: Vec<_> = self
            .fireworks
            .iter()
            .map(|(id, fw)| (*id, fw.snapshot()))
            .collect();
        all.sort_by_key(|(id, _)| id.0);
        all
    }
}
