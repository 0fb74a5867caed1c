//! Aer simulator adapter.

use tracing::debug;

use crate::error::AerResult;
use crate::options::{OptionMap, ValidatedConfig};
use crate::simulator::{Simulator, SimulatorConfig, SimulatorFactory};

/// Engine name passed to the factory.
const ENGINE_NAME: &str = "aer_simulator";

/// Manages a configured Aer simulator instance for the orchestrator.
///
/// Construction validates the forwarded options and immediately instances
/// the simulation engine; a constructed adapter is always ready. Any
/// validation or construction failure aborts construction and surfaces to
/// the caller.
pub struct AerAdapter {
    /// Configuration distilled from the validated options.
    config: ValidatedConfig,
    /// The instanced engine, owned for the adapter's lifetime.
    simulator: Box<dyn Simulator>,
}

impl std::fmt::Debug for AerAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AerAdapter")
            .field("config", &self.config)
            .field("simulator", &self.simulator.name())
            .finish()
    }
}

impl AerAdapter {
    /// Validate `options` and instance a simulation engine via `F`.
    ///
    /// # Errors
    ///
    /// Propagates validation errors from
    /// [`ValidatedConfig::from_options`] and construction errors from
    /// [`SimulatorFactory::from_config`].
    pub fn new<F>(options: &OptionMap) -> AerResult<Self>
    where
        F: SimulatorFactory + 'static,
    {
        let config = ValidatedConfig::from_options(options)?;
        let simulator = F::from_config(Self::construction_args(&config))?;
        debug!("Instanced simulation engine: {}", simulator.name());

        Ok(Self {
            config,
            simulator: Box::new(simulator),
        })
    }

    /// Translate a validated configuration into engine construction
    /// arguments.
    ///
    /// TODO: forward `method` (and a resolved noise model) into the
    /// arguments; the engine currently always starts with its defaults.
    fn construction_args(_config: &ValidatedConfig) -> SimulatorConfig {
        SimulatorConfig::new(ENGINE_NAME)
    }

    /// The requested simulation method, if one was supplied.
    pub fn method(&self) -> Option<&str> {
        self.config.method_str()
    }

    /// The configuration distilled from the validated options.
    pub fn config(&self) -> &ValidatedConfig {
        &self.config
    }

    /// The instanced simulation engine.
    pub fn simulator(&self) -> &dyn Simulator {
        self.simulator.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AerError;
    use serde_json::json;

    /// Engine stub that records the construction arguments it received.
    struct StubEngine {
        config: SimulatorConfig,
    }

    impl Simulator for StubEngine {
        fn name(&self) -> &str {
            &self.config.name
        }
    }

    impl SimulatorFactory for StubEngine {
        fn from_config(config: SimulatorConfig) -> AerResult<Self> {
            Ok(Self { config })
        }
    }

    /// Engine stub that always refuses construction.
    struct FailingEngine;

    impl Simulator for FailingEngine {
        fn name(&self) -> &str {
            "failing"
        }
    }

    impl SimulatorFactory for FailingEngine {
        fn from_config(_config: SimulatorConfig) -> AerResult<Self> {
            Err(AerError::Construction("out of memory".into()))
        }
    }

    fn options(pairs: &[(&str, serde_json::Value)]) -> OptionMap {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_adapter_with_method() {
        let opts = options(&[("method", json!("statevector"))]);
        let adapter = AerAdapter::new::<StubEngine>(&opts).unwrap();

        assert_eq!(adapter.method(), Some("statevector"));
        assert_eq!(adapter.simulator().name(), "aer_simulator");
    }

    #[test]
    fn test_adapter_without_method() {
        let adapter = AerAdapter::new::<StubEngine>(&OptionMap::new()).unwrap();
        assert!(adapter.method().is_none());
    }

    #[test]
    fn test_adapter_rejects_unknown_option() {
        let opts = options(&[("bogus_key", json!(1))]);
        let err = AerAdapter::new::<StubEngine>(&opts).unwrap_err();
        assert!(matches!(err, AerError::UnrecognizedOption(ref k) if k == "bogus_key"));
    }

    #[test]
    fn test_adapter_rejects_conflicting_noise_options() {
        let opts = options(&[
            ("noise_model", json!("x")),
            ("noise_model_backend", json!("y")),
        ]);
        let err = AerAdapter::new::<StubEngine>(&opts).unwrap_err();
        assert!(matches!(err, AerError::ConflictingOptions));
    }

    #[test]
    fn test_adapter_propagates_construction_failure() {
        let err = AerAdapter::new::<FailingEngine>(&OptionMap::new()).unwrap_err();
        assert!(matches!(err, AerError::Construction(_)));
    }

    #[test]
    fn test_construction_args_carry_no_options() {
        // Faithful to the current translation step: options validate but
        // none are forwarded to the engine.
        let opts = options(&[
            ("method", json!("density_matrix")),
            ("noise_model", json!("depolarizing")),
        ]);
        let adapter = AerAdapter::new::<StubEngine>(&opts).unwrap();
        let args = AerAdapter::construction_args(adapter.config());

        assert_eq!(args.name, ENGINE_NAME);
        assert!(args.extra.is_empty());
    }
}
