//! Two velocity scales (friction and turbulent kinetic energy) log laws.

use crate::common::{EPSILON_YPLUS, blended_uk, log_law_uplus, production_ratio};
use crate::constants::XKAPPA;
use crate::face::{Regime, WallFunctionOutput};
use wf_core::Real;

/// Log law with `uk` from the turbulent kinetic energy; switches to the
/// viscous sublayer for `y+ <= ypluli`.
pub fn two_scales_log(
    ypluli: Real,
    l_visc: Real,
    t_visc: Real,
    vel: Real,
    y: Real,
    kinetic_en: Real,
) -> WallFunctionOutput {
    let uk = blended_uk(l_visc, vel, y, kinetic_en);
    let yplus = uk * y / l_visc;

    if yplus > ypluli {
        let uplus = log_law_uplus(yplus);
        let ypup = yplus / uplus;
        let rcprod = production_ratio(l_visc, t_visc, yplus);
        return WallFunctionOutput {
            ustar: vel / uplus,
            uk,
            yplus,
            dplus: 0.0,
            ypup,
            cofimp: 1.0 - ypup / XKAPPA * (2.0 * rcprod - 1.0 / (2.0 * yplus)),
            lmk: 0.0,
            regime: Regime::LogLayer,
            wall_function_active: true,
        };
    }

    // Legacy estimate kept bit-for-bit with the former sublayer treatment.
    let ustar = if yplus > EPSILON_YPLUS {
        (vel / yplus).abs()
    } else {
        0.0
    };

    WallFunctionOutput {
        ustar,
        uk,
        yplus,
        dplus: 0.0,
        ypup: 1.0,
        cofimp: 0.0,
        lmk: 0.0,
        regime: Regime::ViscousSublayer,
        wall_function_active: false,
    }
}

/// Scalable wall function: below `ypluli` the wall is shifted by
/// `dplus = ypluli - y+` so the log law is always evaluated at `y+ >= ypluli`.
///
/// Shifted faces are counted in the viscous sublayer but keep the wall
/// function active.
pub fn two_scales_scalable(
    ypluli: Real,
    l_visc: Real,
    t_visc: Real,
    vel: Real,
    y: Real,
    kinetic_en: Real,
) -> WallFunctionOutput {
    let uk = blended_uk(l_visc, vel, y, kinetic_en);
    let raw_yplus = uk * y / l_visc;

    let (yplus, dplus, regime) = if raw_yplus > ypluli {
        (raw_yplus, 0.0, Regime::LogLayer)
    } else {
        (ypluli, ypluli - raw_yplus, Regime::ViscousSublayer)
    };

    let uplus = log_law_uplus(yplus);
    let ypup = (yplus - dplus) / uplus;
    let rcprod = production_ratio(l_visc, t_visc, yplus);

    WallFunctionOutput {
        ustar: vel / uplus,
        uk,
        yplus,
        dplus,
        ypup,
        cofimp: 1.0 - ypup / XKAPPA * (2.0 * rcprod - 1.0 / (2.0 * yplus - dplus)),
        lmk: 0.0,
        regime,
        wall_function_active: true,
    }
}
