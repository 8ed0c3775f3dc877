//! One velocity scale, Werner & Wengle power law.

use crate::common::werner_wengle_ustar;
use crate::constants::{APOW, BPOW, DPOW};
use crate::face::{Regime, WallFunctionOutput};
use wf_core::Real;

/// Closed-form power law, falling back to `u+ = y+` when `y+ <= ypluli`.
pub fn one_scale_power(ypluli: Real, l_visc: Real, vel: Real, y: Real) -> WallFunctionOutput {
    let ydvisc = y / l_visc;
    let ustar = werner_wengle_ustar(vel, ydvisc);
    let yplus = ustar * ydvisc;

    if yplus <= ypluli {
        return WallFunctionOutput::linear_sublayer(vel, ydvisc);
    }

    WallFunctionOutput {
        ustar,
        uk: ustar,
        yplus,
        dplus: 0.0,
        ypup: vel.powf(2.0 * DPOW - 1.0) / APOW.powf(2.0 * DPOW),
        cofimp: 1.0
            + BPOW * ustar.powf(BPOW + 1.0 - 1.0 / DPOW) * (2.0_f64.powf(BPOW - 1.0) - 2.0),
        lmk: 0.0,
        regime: Regime::LogLayer,
        wall_function_active: true,
    }
}
