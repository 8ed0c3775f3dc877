//! wf-core: shared foundation for the wallflow crates.
//!
//! Contains:
//! - units (uom SI types + constructors for near-wall quantities)
//! - numeric (Real + tolerances + float helpers)
//! - ids (compact boundary-face identifiers)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{WfError, WfResult};
pub use ids::*;
pub use numeric::*;
pub use units::*;
