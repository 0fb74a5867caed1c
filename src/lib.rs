//! QisJob Aer Simulator Adapter
//!
//! This crate adapts free-form keyword options forwarded by a job
//! orchestrator into a valid configuration for instancing an Aer-style
//! quantum-circuit simulation engine. It validates the option set,
//! enforces one mutual-exclusion rule, and delegates construction to an
//! external engine behind the [`SimulatorFactory`] seam. Simulation,
//! noise modeling, and backend execution belong to the engine, not here.
//!
//! # Recognized options
//!
//! | Option | Meaning |
//! |--------|---------|
//! | `backend_named` | Name of a backend whose noise characteristics to mimic |
//! | `configuration` | Backend configuration object |
//! | `method` | Simulation method (e.g. `statevector`, `density_matrix`) |
//! | `noise_model` | Explicit noise model object |
//! | `noise_model_backend` | Backend to derive a noise model from |
//! | `properties` | Backend properties object |
//!
//! `noise_model` and `noise_model_backend` are mutually exclusive; any key
//! outside this table fails validation.
//!
//! # Example
//!
//! ```ignore
//! use qisjob_aer::{AerAdapter, OptionMap};
//! use my_engine::Engine;
//! use serde_json::json;
//!
//! let mut options = OptionMap::new();
//! options.insert("method".into(), json!("statevector"));
//!
//! let adapter = AerAdapter::new::<Engine>(&options)?;
//! assert_eq!(adapter.method(), Some("statevector"));
//! # Ok::<(), qisjob_aer::AerError>(())
//! ```

pub mod adapter;
pub mod error;
pub mod options;
pub mod simulator;

pub use adapter::AerAdapter;
pub use error::{AerError, AerResult};
pub use options::{OptionMap, RECOGNIZED_OPTIONS, ValidatedConfig};
pub use simulator::{Simulator, SimulatorConfig, SimulatorFactory};
