//! No wall model: laminar wall stress.

use crate::face::{Regime, WallFunctionOutput};
use wf_core::Real;

/// `ustar = sqrt(vel * nu / y)`, always counted in the viscous sublayer.
pub fn disabled(l_visc: Real, t_visc: Real, vel: Real, y: Real) -> WallFunctionOutput {
    let ustar = (vel * l_visc / y).sqrt();
    WallFunctionOutput {
        ustar,
        uk: ustar,
        yplus: ustar * y / l_visc,
        dplus: 0.0,
        ypup: l_visc / (l_visc + t_visc),
        cofimp: 0.0,
        lmk: 0.0,
        regime: Regime::ViscousSublayer,
        wall_function_active: false,
    }
}
