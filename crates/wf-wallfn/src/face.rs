//! Per-face closure inputs and outputs.

use wf_core::numeric::{ensure_non_negative, ensure_positive};
use wf_core::units::{KinVisc, Length, Velocity};
use wf_core::{Real, WfResult};

/// Flow state at one boundary face, in SI units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FaceInputs {
    /// Kinematic viscosity [m²/s]
    pub l_visc: Real,
    /// Turbulent kinematic viscosity [m²/s]
    pub t_visc: Real,
    /// Cell-centre velocity projected on the wall tangent plane [m/s]
    pub vel: Real,
    /// Wall distance of the cell centre [m]
    pub y: Real,
    /// Wall-normal Reynolds stress `n.(R n)` [m²/s²]
    pub rnnb: Real,
    /// Turbulent kinetic energy [m²/s²]
    pub kinetic_en: Real,
    /// Equivalent sand-grain roughness of the wall [m]
    pub roughness: Real,
}

impl FaceInputs {
    /// Laminar state with no turbulence information.
    pub fn new(l_visc: Real, vel: Real, y: Real) -> Self {
        Self {
            l_visc,
            vel,
            y,
            ..Self::default()
        }
    }

    pub fn from_quantities(l_visc: KinVisc, vel: Velocity, y: Length) -> Self {
        Self::new(l_visc.value, vel.value, y.value)
    }

    pub fn with_turbulence(mut self, t_visc: Real, kinetic_en: Real) -> Self {
        self.t_visc = t_visc;
        self.kinetic_en = kinetic_en;
        self
    }

    pub fn with_rnnb(mut self, rnnb: Real) -> Self {
        self.rnnb = rnnb;
        self
    }

    pub fn with_roughness(mut self, roughness: Length) -> Self {
        self.roughness = roughness.value;
        self
    }

    /// Check the caller contract: positive viscosity and distance, everything
    /// else finite and non-negative.
    pub fn validate(&self) -> WfResult<()> {
        ensure_positive(self.l_visc, "kinematic viscosity")?;
        ensure_positive(self.y, "wall distance")?;
        ensure_non_negative(self.vel, "tangential velocity")?;
        ensure_non_negative(self.t_visc, "turbulent viscosity")?;
        ensure_non_negative(self.rnnb, "wall-normal Reynolds stress")?;
        ensure_non_negative(self.kinetic_en, "turbulent kinetic energy")?;
        ensure_non_negative(self.roughness, "wall roughness")?;
        Ok(())
    }
}

/// Near-wall regime a face was counted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Regime {
    ViscousSublayer,
    LogLayer,
}

/// Result of one velocity wall-function evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WallFunctionOutput {
    /// Friction velocity
    pub ustar: Real,
    /// Velocity scale based on the turbulent kinetic energy; `ustar` for
    /// one-scale models
    pub uk: Real,
    /// Dimensionless wall distance
    pub yplus: Real,
    /// Dimensionless wall shift, non-zero only for the scalable closure
    pub dplus: Real,
    /// `y+ / u+`, ratio used to rescale the wall-projected velocity
    pub ypup: Real,
    /// `|U_F| / |U_I'|`, keeps the turbulence production right at the wall
    pub cofimp: Real,
    /// Van Driest dimensionless mixing length (0 for the other closures)
    pub lmk: Real,
    /// Counter the face goes to
    pub regime: Regime,
    /// False when the face is resolved in the viscous sublayer and the wall
    /// function is switched off
    pub wall_function_active: bool,
}

impl WallFunctionOutput {
    /// Solver flag: 0 in the viscous sublayer, 1 otherwise.
    pub fn iuntur(&self) -> i32 {
        i32::from(self.wall_function_active)
    }

    /// Linear profile `u+ = y+` with the wall function switched off.
    pub(crate) fn linear_sublayer(vel: Real, ydvisc: Real) -> Self {
        let ustar = (vel / ydvisc).sqrt();
        Self {
            ustar,
            uk: ustar,
            yplus: ustar * ydvisc,
            dplus: 0.0,
            ypup: 1.0,
            cofimp: 0.0,
            lmk: 0.0,
            regime: Regime::ViscousSublayer,
            wall_function_active: false,
        }
    }
}
