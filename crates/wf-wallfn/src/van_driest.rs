//! Two velocity scales wall function with a Van Driest mixing length.
//!
//! `u+` integrates `dy+ / (1 + L_m)` with `L_m = kappa y+ (1 - exp(-y+/A))`.
//! A polynomial fit of the integral is used up to `y+ = 200`, and a log law
//! anchored on the fit beyond. Rough walls extend the mixing length following
//! Rotta with the Cebeci & Chang shift.

use crate::constants::{CRIJ1, CRIJ2, VDRIEST, XKAPPA};
use crate::face::{Regime, WallFunctionOutput};
use wf_core::Real;

/// Upper `yr+` of the linear profile.
pub const VDRIEST_SUBLAYER_LIMIT: Real = 0.1;

/// Upper `yr+` of the polynomial fit.
pub const VDRIEST_FIT_LIMIT: Real = 200.0;

/// `u+` of the fit at `VDRIEST_FIT_LIMIT`.
pub const VDRIEST_UPLUS_AT_FIT_LIMIT: Real = 16.088_739_022_054_59;

/// Floor on `y+` for zero tangential stress.
const YPLUS_FLOOR: Real = 1e-4;

/// Coefficients of `ln(u+)` as a polynomial in `0.25 ln(yr+)`, lowest degree
/// first.
const UPLUS_FIT: [Real; 11] = [
    -0.0091921, 3.9577, 0.031578, -0.51013, -2.3254, -0.72665, 2.969, 0.48506, -1.5944, 0.087309,
    0.1987,
];

/// How `uk` is obtained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VanDriestMode {
    /// Recompute `uk` from the wall-normal Reynolds stress and `k`.
    Full,
    /// Reuse a caller-supplied `uk`; only `u+` (hence `ustar`) is of interest.
    UplusOnly { uk: Real },
}

/// Dimensionless Van Driest mixing length at `yplus`.
#[inline]
pub fn mixing_length(yplus: Real) -> Real {
    XKAPPA * yplus * (1.0 - (-yplus / VDRIEST).exp())
}

/// Dimensionless shift `dy+` for the dimensionless roughness `kr+`.
#[inline]
pub fn roughness_shift(krplus: Real) -> Real {
    0.9 * (krplus.sqrt() - krplus * (-krplus / 6.0).exp())
}

/// Velocity profile `u+(y+)` for a wall shift `dyrp`.
pub fn van_driest_uplus(yplus: Real, dyrp: Real) -> Real {
    let yrplus = yplus + dyrp;
    if yrplus <= VDRIEST_SUBLAYER_LIMIT {
        yplus
    } else if yrplus <= VDRIEST_FIT_LIMIT {
        let y1 = 0.25 * yrplus.ln();
        UPLUS_FIT
            .iter()
            .rev()
            .fold(0.0, |acc, a| acc * y1 + a)
            .exp()
    } else {
        VDRIEST_UPLUS_AT_FIT_LIMIT + (yrplus / (VDRIEST_FIT_LIMIT + dyrp)).ln() / XKAPPA
    }
}

/// `uk` from the wall-normal Reynolds stress, `((1 - C2)/C1 rnnb k)^(1/4)`.
#[inline]
pub fn reynolds_stress_uk(rnnb: Real, kinetic_en: Real) -> Real {
    ((1.0 - CRIJ2) / CRIJ1 * rnnb * kinetic_en).sqrt().sqrt()
}

pub fn two_scales_vdriest(
    l_visc: Real,
    vel: Real,
    y: Real,
    rnnb: Real,
    kinetic_en: Real,
    roughness: Real,
    mode: VanDriestMode,
) -> WallFunctionOutput {
    let uk = match mode {
        VanDriestMode::Full => reynolds_stress_uk(rnnb, kinetic_en),
        VanDriestMode::UplusOnly { uk } => uk,
    };

    let yplus = (uk * y / l_visc).max(YPLUS_FLOOR);
    let dyrp = roughness_shift(uk * roughness / l_visc);
    let yrplus = yplus + dyrp;
    let uplus = van_driest_uplus(yplus, dyrp);

    if yrplus <= VDRIEST_SUBLAYER_LIMIT {
        return WallFunctionOutput {
            ustar: vel / uplus,
            uk,
            yplus,
            dplus: 0.0,
            ypup: 1.0,
            cofimp: 0.0,
            lmk: 0.0,
            regime: Regime::ViscousSublayer,
            wall_function_active: false,
        };
    }

    let ypup = yplus / uplus;
    let lmk = mixing_length(yplus);
    let lmk15 = mixing_length(1.5 * yplus);
    let cofimp = if yrplus <= VDRIEST_FIT_LIMIT {
        1.0 - (2.0 / (1.0 + lmk) - 1.0 / (1.0 + lmk15)) * ypup
    } else {
        1.0 - (2.0 / lmk - 1.0 / lmk15) * ypup
    };

    WallFunctionOutput {
        ustar: vel / uplus,
        uk,
        yplus,
        dplus: 0.0,
        ypup,
        cofimp,
        lmk,
        regime: Regime::LogLayer,
        wall_function_active: true,
    }
}
