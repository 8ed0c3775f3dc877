//! Helpers shared by several closures.

use crate::constants::{APOW, BPOW, CMU025, CSTLOG, DPOW, XKAPPA};
use wf_core::Real;

/// Guard below which `y+` is treated as zero in the two-scale sublayer branch.
pub const EPSILON_YPLUS: Real = 1e-12;

/// Log law `u+ = ln(y+)/kappa + B`.
#[inline]
pub fn log_law_uplus(yplus: Real) -> Real {
    yplus.ln() / XKAPPA + CSTLOG
}

/// Werner & Wengle friction velocity, `(vel / (A * (y/nu)^B))^D`.
#[inline]
pub fn werner_wengle_ustar(vel: Real, ydvisc: Real) -> Real {
    (vel / (APOW * ydvisc.powf(BPOW))).powf(DPOW)
}

/// Turbulent kinetic energy velocity scale, blended with the laminar estimate
/// `sqrt(nu * vel / y)` when `k` vanishes.
pub fn blended_uk(l_visc: Real, vel: Real, y: Real, kinetic_en: Real) -> Real {
    let re = kinetic_en.sqrt() * y / l_visc;
    let g = (-re / 11.0).exp();
    ((1.0 - g) * CMU025 * CMU025 * kinetic_en + g * l_visc * vel / y).sqrt()
}

/// Production correction from the mixing-length viscosity `kappa * nu * y+`,
/// bounded by kappa.
pub fn production_ratio(l_visc: Real, t_visc: Real, yplus: Real) -> Real {
    let ml_visc = XKAPPA * l_visc * yplus;
    // t_visc == 0 gives +inf here and the ratio saturates at kappa
    XKAPPA.min((ml_visc / t_visc).sqrt().max(1.0) / yplus)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_law_at_unit_yplus_is_the_constant() {
        assert_eq!(log_law_uplus(1.0), CSTLOG);
    }

    #[test]
    fn blended_uk_limits() {
        // k = 0: laminar estimate only
        let uk = blended_uk(1e-5, 1.0, 1e-3, 0.0);
        assert!((uk - 0.1).abs() < 1e-12);

        // large k*y/nu: turbulent estimate Cmu^1/4 sqrt(k)
        let uk = blended_uk(1e-5, 1.0, 0.1, 1.0);
        assert!((uk - CMU025).abs() < 1e-9);
    }

    #[test]
    fn production_ratio_is_bounded_without_turbulent_viscosity() {
        assert_eq!(production_ratio(1e-5, 0.0, 50.0), XKAPPA);
        let r = production_ratio(1e-5, 1e-3, 50.0);
        assert!(r > 0.0 && r <= XKAPPA);
    }
}
