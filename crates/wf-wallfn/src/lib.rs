//! wf-wallfn: near-wall turbulence closures for finite-volume solvers.
//!
//! Provides:
//! - Velocity wall functions: friction velocity, `y+`, `u+`-based corrections
//!   for six closures (disabled, Werner & Wengle power law, one-scale log law,
//!   two-scale log law, scalable two-scale log law, Van Driest)
//! - Scalar wall function: exchange coefficient correction (Prandtl-Taylor or
//!   Arpaci-Larsen thermal sublayers)
//! - Viscous-sublayer / log-layer counters and their partition reduction
//! - Parallel evaluation over the wall faces of a partition
//!
//! Every closure is a pure function of the face state and the immutable
//! [`WallFunctionConfig`]; the solver owns the counters.
//!
//! # Example
//!
//! ```
//! use wf_core::FaceId;
//! use wf_wallfn::{FaceInputs, RegimeCounters, WallFunctionConfig, WallFunctionType};
//!
//! let config = WallFunctionConfig::new(WallFunctionType::TwoScalesScalableLog);
//! let inputs = FaceInputs::new(1.5e-5, 12.0, 2e-3).with_turbulence(3e-4, 0.4);
//!
//! let mut counters = RegimeCounters::default();
//! let out = wf_wallfn::evaluate_and_count(&config, FaceId::from_index(0), &inputs, &mut counters);
//! let scalar = wf_wallfn::correct(0.71, 0.85, out.yplus, out.dplus).unwrap();
//!
//! assert_eq!(counters.total(), 1);
//! assert!(scalar.htur > 0.0);
//! ```

pub mod batch;
pub mod common;
pub mod config;
pub mod constants;
pub mod counters;
pub mod disabled;
pub mod dispatch;
pub mod error;
pub mod face;
pub mod log_law;
pub mod power_law;
pub mod scalar;
pub mod two_scales;
pub mod van_driest;

// Re-exports
pub use batch::{BatchOutcome, evaluate_faces};
pub use config::{DEFAULT_YPLULI, WallFunctionConfig, WallFunctionType};
pub use counters::{AtomicRegimeCounters, PartitionReduce, RegimeCounters, SerialReduce};
pub use disabled::disabled;
pub use dispatch::{evaluate, evaluate_and_count};
pub use error::{WallError, WallResult};
pub use face::{FaceInputs, Regime, WallFunctionOutput};
pub use log_law::{FrictionVelocitySolve, one_scale_log, solve_friction_velocity};
pub use power_law::one_scale_power;
pub use scalar::{ScalarCorrection, ScalarModel, correct};
pub use two_scales::{two_scales_log, two_scales_scalable};
pub use van_driest::{VanDriestMode, two_scales_vdriest, van_driest_uplus};
