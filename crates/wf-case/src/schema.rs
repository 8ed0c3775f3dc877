//! Case file schema.
//!
//! A case is a frozen snapshot of the near-wall state of one mesh partition:
//! the wall-function descriptor, the transported scalars and the wall faces.

use serde::{Deserialize, Serialize};
use wf_core::{FaceId, Real};
use wf_wallfn::{FaceInputs, WallFunctionConfig};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Case {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub wall_functions: WallFunctionConfig,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scalars: Vec<ScalarDef>,
    #[serde(default)]
    pub faces: Vec<FaceDef>,
}

/// Transported scalar with its molecular and turbulent Prandtl (or Schmidt)
/// numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalarDef {
    pub name: String,
    pub prl: Real,
    #[serde(default = "default_prt")]
    pub prt: Real,
    /// Fluid conductivity [W/(m·K)], enables the dimensional exchange
    /// coefficient in reports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conductivity_w_per_mk: Option<Real>,
}

fn default_prt() -> Real {
    0.85
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceDef {
    /// 0-based boundary face index within the partition.
    pub id: u32,
    pub l_visc: Real,
    #[serde(default)]
    pub t_visc: Real,
    pub vel: Real,
    pub y: Real,
    #[serde(default)]
    pub rnnb: Real,
    #[serde(default)]
    pub kinetic_en: Real,
    #[serde(default)]
    pub roughness: Real,
}

impl FaceDef {
    pub fn inputs(&self) -> FaceInputs {
        FaceInputs {
            l_visc: self.l_visc,
            t_visc: self.t_visc,
            vel: self.vel,
            y: self.y,
            rnnb: self.rnnb,
            kinetic_en: self.kinetic_en,
            roughness: self.roughness,
        }
    }
}

impl Case {
    pub fn new(name: impl Into<String>, wall_functions: WallFunctionConfig) -> Self {
        Self {
            version: crate::LATEST_VERSION,
            name: name.into(),
            wall_functions,
            scalars: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Faces in the form taken by [`wf_wallfn::evaluate_faces`].
    pub fn face_inputs(&self) -> Vec<(FaceId, FaceInputs)> {
        self.faces
            .iter()
            .map(|f| (FaceId::from_index(f.id), f.inputs()))
            .collect()
    }
}
