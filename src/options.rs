//! Option validation for the Aer simulator.
//!
//! The orchestrator forwards simulator options as a free-form string→value
//! map. Before anything touches the simulation engine, the map is checked
//! against the fixed set of recognized keys and one mutual-exclusion rule:
//! a noise model may come from an explicit `noise_model` object or be
//! derived from a `noise_model_backend`, never both.

use serde_json::Value;
use tracing::debug;

use crate::error::{AerError, AerResult};

/// Free-form option map as forwarded by the orchestrator.
pub type OptionMap = serde_json::Map<String, Value>;

/// Option keys the Aer simulator adapter recognizes.
pub const RECOGNIZED_OPTIONS: [&str; 6] = [
    "backend_named",
    "configuration",
    "method",
    "noise_model",
    "noise_model_backend",
    "properties",
];

/// Simulator configuration distilled from a validated option map.
///
/// All fields start out absent and are selectively populated during
/// validation. Immutable once built — the adapter instances the engine
/// immediately after validation succeeds.
#[derive(Debug, Clone, Default)]
pub struct ValidatedConfig {
    /// Backend configuration object, opaque to the adapter.
    pub configuration: Option<Value>,
    /// Backend properties object, opaque to the adapter.
    pub properties: Option<Value>,
    /// Provider owning the named backend, if any.
    pub provider: Option<Value>,
    /// Requested simulation method (e.g. `statevector`).
    pub method: Option<Value>,
    /// Backend to mimic, resolved from `backend_named`.
    pub backend: Option<Value>,
    /// Name of the backend whose noise characteristics to mimic.
    pub backend_named: Option<Value>,
}

impl ValidatedConfig {
    /// Validate an option map and distill it into a configuration.
    ///
    /// # Errors
    ///
    /// - [`AerError::UnrecognizedOption`] if any key is outside
    ///   [`RECOGNIZED_OPTIONS`]; the error names the offending key.
    /// - [`AerError::ConflictingOptions`] if both `noise_model` and
    ///   `noise_model_backend` are supplied.
    pub fn from_options(options: &OptionMap) -> AerResult<Self> {
        for key in options.keys() {
            if !RECOGNIZED_OPTIONS.contains(&key.as_str()) {
                return Err(AerError::UnrecognizedOption(key.clone()));
            }
        }

        if options.contains_key("noise_model") && options.contains_key("noise_model_backend") {
            return Err(AerError::ConflictingOptions);
        }

        let mut config = Self::default();
        if let Some(method) = options.get("method") {
            debug!("Simulation method requested: {}", method);
            config.method = Some(method.clone());
        }

        debug!("Validated {} simulator option(s)", options.len());
        Ok(config)
    }

    /// The requested simulation method as a string, if one was supplied
    /// as a string value.
    pub fn method_str(&self) -> Option<&str> {
        self.method.as_ref().and_then(Value::as_str)
    }
}
