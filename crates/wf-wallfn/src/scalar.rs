//! Correction of the fluid/wall exchange coefficient for scalars.
//!
//! `htur = Pr (y+ - d+) / T+`, with `T+` from a similarity model between the
//! dynamic and thermal sublayers:
//! - Prandtl-Taylor (two sublayers) for small laminar Prandtl numbers such as
//!   liquid metals,
//! - Arpaci-Larsen (three sublayers) for liquids and gases.
//!
//! The exchange coefficient of the boundary condition is then
//! `h = K / d * htur`.

use crate::constants::XKAPPA;
use crate::error::WallResult;
use wf_core::numeric::ensure_positive;
use wf_core::units::{Length, ThermalConductivity};
use wf_core::Real;

/// Laminar Prandtl number from which the three-sublayer model applies.
pub const PRL_THREE_SUBLAYERS: Real = 0.1;

/// Thermal sublayer structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ScalarModel {
    PrandtlTaylor,
    ArpaciLarsen,
}

impl ScalarModel {
    pub fn select(prl: Real) -> Self {
        if prl < PRL_THREE_SUBLAYERS {
            ScalarModel::PrandtlTaylor
        } else {
            ScalarModel::ArpaciLarsen
        }
    }

    /// `y+` below which the thermal profile is laminar.
    pub fn yplim(self, prl: Real, prt: Real) -> Real {
        match self {
            ScalarModel::PrandtlTaylor => prt / (prl * XKAPPA),
            ScalarModel::ArpaciLarsen => (1000.0 / prl).cbrt(),
        }
    }

    /// Turbulent-region `T+` at `yplus` (only meaningful above `yplim`).
    pub fn tplus(self, prl: Real, prt: Real, yplus: Real) -> Real {
        match self {
            ScalarModel::PrandtlTaylor => {
                let yplim = self.yplim(prl, prt);
                prl * yplim + prt / XKAPPA * (yplus / yplim).ln()
            }
            ScalarModel::ArpaciLarsen => {
                let yp2 = (XKAPPA * 1000.0 / prt).sqrt();
                let a2 = 15.0 * prl.powf(2.0 / 3.0);
                if yplus < yp2 {
                    a2 - 500.0 / (yplus * yplus)
                } else {
                    let beta2 = a2 - 500.0 / (yp2 * yp2);
                    beta2 + prt / XKAPPA * (yplus / yp2).ln()
                }
            }
        }
    }
}

/// Corrected exchange coefficient for one face and one scalar.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScalarCorrection {
    pub htur: Real,
    pub yplim: Real,
    pub model: ScalarModel,
}

impl ScalarCorrection {
    /// `h = K / d * htur` [W/(m²·K)] for fluid conductivity `K` and wall
    /// distance `d`.
    pub fn exchange_coefficient(&self, conductivity: ThermalConductivity, distance: Length) -> Real {
        conductivity.value / distance.value * self.htur
    }
}

/// Exchange coefficient correction from the `yplus`/`dplus` of the velocity
/// wall function at the same face.
pub fn correct(prl: Real, prt: Real, yplus: Real, dplus: Real) -> WallResult<ScalarCorrection> {
    ensure_positive(prl, "laminar Prandtl number")?;
    ensure_positive(prt, "turbulent Prandtl number")?;

    let model = ScalarModel::select(prl);
    let yplim = model.yplim(prl, prt);
    let yp = yplus - dplus;

    let htur = if yp <= yplim {
        1.0
    } else {
        prl * yp / model.tplus(prl, prt, yplus)
    };

    Ok(ScalarCorrection { htur, yplim, model })
}
