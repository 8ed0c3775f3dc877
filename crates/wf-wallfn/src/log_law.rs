//! One velocity scale, piecewise linear / logarithmic law.
//!
//! The log branch solves the implicit law
//! `vel / ustar = ln(y ustar / nu) / kappa + B` with a fixed-point iteration.
//! Reaching the iteration cap is reported and the last iterate is kept: the
//! solver tolerates locally imprecise wall values.

use crate::common::{log_law_uplus, werner_wengle_ustar};
use crate::constants::{CSTLOG, XKAPPA};
use crate::face::{Regime, WallFunctionOutput};
use wf_core::{FaceId, Real};

pub const LOG_LAW_MAX_ITER: usize = 100;
pub const LOG_LAW_REL_TOL: Real = 1e-3;

/// Outcome of the friction-velocity fixed-point iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrictionVelocitySolve {
    pub ustar: Real,
    /// Iterations performed after the first update
    pub iterations: usize,
    pub converged: bool,
}

/// Fixed-point solve seeded with the Werner & Wengle estimate, or the smallest
/// `ustar` that keeps the iteration convergent.
pub fn solve_friction_velocity(vel: Real, ydvisc: Real) -> FrictionVelocitySolve {
    solve_friction_velocity_capped(vel, ydvisc, LOG_LAW_MAX_ITER)
}

pub(crate) fn solve_friction_velocity_capped(
    vel: Real,
    ydvisc: Real,
    max_iter: usize,
) -> FrictionVelocitySolve {
    let update = |ustaro: Real| {
        (XKAPPA * vel + ustaro) / ((ydvisc * ustaro).ln() + XKAPPA * CSTLOG + 1.0)
    };

    let ustarwer = werner_wengle_ustar(vel.abs(), ydvisc);
    let ustarmin = (-CSTLOG * XKAPPA).exp() / ydvisc;
    let mut ustaro = ustarwer.max(ustarmin);
    let mut ustar = update(ustaro);

    let mut iterations = 0;
    while iterations < max_iter && (ustar - ustaro).abs() >= LOG_LAW_REL_TOL * ustaro {
        ustaro = ustar;
        ustar = update(ustaro);
        iterations += 1;
    }

    FrictionVelocitySolve {
        ustar,
        iterations,
        converged: iterations < max_iter,
    }
}

/// Classification on the local Reynolds number `vel * y / nu` against
/// `ypluli^2`.
pub fn one_scale_log(
    ypluli: Real,
    face: FaceId,
    l_visc: Real,
    vel: Real,
    y: Real,
) -> WallFunctionOutput {
    one_scale_log_capped(ypluli, face, l_visc, vel, y, LOG_LAW_MAX_ITER)
}

pub(crate) fn one_scale_log_capped(
    ypluli: Real,
    face: FaceId,
    l_visc: Real,
    vel: Real,
    y: Real,
    max_iter: usize,
) -> WallFunctionOutput {
    let ydvisc = y / l_visc;
    let reynolds = vel * ydvisc;

    if reynolds <= ypluli * ypluli {
        return WallFunctionOutput::linear_sublayer(vel, ydvisc);
    }

    let solve = solve_friction_velocity_capped(vel, ydvisc, max_iter);
    if !solve.converged {
        tracing::warn!(
            face = %face,
            ustar = solve.ustar,
            iterations = solve.iterations,
            "non-convergence in the computation of the friction velocity"
        );
    }

    let ustar = solve.ustar;
    let yplus = ustar * ydvisc;
    let ypup = yplus / log_law_uplus(yplus);

    WallFunctionOutput {
        ustar,
        uk: ustar,
        yplus,
        dplus: 0.0,
        ypup,
        cofimp: 1.0 - ypup / XKAPPA * 1.5 / yplus,
        lmk: 0.0,
        regime: Regime::LogLayer,
        wall_function_active: true,
    }
}
