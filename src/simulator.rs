//! Simulation engine seam.
//!
//! The adapter does not simulate anything itself. It hands a
//! [`SimulatorConfig`] to a [`SimulatorFactory`] and keeps the resulting
//! [`Simulator`] for the rest of its lifetime. Engines live in their own
//! crates and implement both traits.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AerResult;

/// Construction arguments for a simulation engine instance.
#[derive(Clone, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Name of the engine.
    pub name: String,
    /// Additional construction arguments.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl SimulatorConfig {
    /// Create a new engine configuration with no extra arguments.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: serde_json::Map::new(),
        }
    }

    /// Add an extra construction argument.
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

impl fmt::Debug for SimulatorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimulatorConfig")
            .field("name", &self.name)
            .field("extra", &self.extra)
            .finish()
    }
}

/// An instanced simulation engine, opaque to the adapter.
///
/// `Send + Sync` so the orchestrator can share the owning adapter across
/// threads.
pub trait Simulator: Send + Sync {
    /// Get the name of this engine.
    fn name(&self) -> &str;
}

/// Trait for creating simulation engines from configuration.
pub trait SimulatorFactory: Simulator + Sized {
    /// Create an engine from configuration.
    ///
    /// # Errors
    ///
    /// [`AerError::Construction`](crate::AerError::Construction) if the
    /// engine cannot be instanced with the given arguments.
    fn from_config(config: SimulatorConfig) -> AerResult<Self>;
}
