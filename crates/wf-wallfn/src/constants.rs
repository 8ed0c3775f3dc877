//! Turbulence constants shared by the near-wall closures.

use wf_core::Real;

/// von Karman constant.
pub const XKAPPA: Real = 0.42;

/// Additive constant of the logarithmic law, `u+ = ln(y+)/kappa + CSTLOG`.
pub const CSTLOG: Real = 5.2;

/// Werner & Wengle power law `u+ = APOW * y+^BPOW`.
pub const APOW: Real = 8.3;
pub const BPOW: Real = 1.0 / 7.0;
pub const DPOW: Real = 1.0 / (1.0 + BPOW);

pub const CMU: Real = 0.09;

/// `CMU^(1/4)`
pub const CMU025: Real = 0.547_722_557_505_166_1;

/// Rotta return-to-isotropy and isotropisation-of-production constants of
/// the Reynolds-stress model.
pub const CRIJ1: Real = 1.8;
pub const CRIJ2: Real = 0.6;

/// Van Driest damping constant `A`.
pub const VDRIEST: Real = 25.6;
