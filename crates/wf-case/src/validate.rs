//! Case validation logic.

use crate::schema::{Case, FaceDef, ScalarDef};
use std::collections::HashSet;
use wf_core::WfError;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid face {id}: {source}")]
    InvalidFace {
        id: u32,
        #[source]
        source: WfError,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_case(case: &Case) -> Result<(), ValidationError> {
    if case.version == 0 || case.version > crate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: case.version,
        });
    }

    let ypluli = case.wall_functions.ypluli;
    if case.wall_functions.validate().is_err() {
        return Err(ValidationError::InvalidValue {
            field: "wall_functions.ypluli".to_string(),
            value: ypluli.to_string(),
            reason: "must be positive and finite".to_string(),
        });
    }

    let mut scalar_names = HashSet::new();
    for scalar in &case.scalars {
        if !scalar_names.insert(scalar.name.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: scalar.name.clone(),
                context: "scalars".to_string(),
            });
        }
        validate_scalar(scalar)?;
    }

    let mut face_ids = HashSet::new();
    for face in &case.faces {
        if !face_ids.insert(face.id) {
            return Err(ValidationError::DuplicateId {
                id: face.id.to_string(),
                context: "faces".to_string(),
            });
        }
        validate_face(face)?;
    }

    Ok(())
}

fn validate_scalar(scalar: &ScalarDef) -> Result<(), ValidationError> {
    let checks = [
        ("prl", Some(scalar.prl)),
        ("prt", Some(scalar.prt)),
        ("conductivity_w_per_mk", scalar.conductivity_w_per_mk),
    ];
    for (field, value) in checks {
        if let Some(v) = value {
            if !v.is_finite() || v <= 0.0 {
                return Err(ValidationError::InvalidValue {
                    field: format!("scalars.{}.{}", scalar.name, field),
                    value: v.to_string(),
                    reason: "must be positive and finite".to_string(),
                });
            }
        }
    }
    Ok(())
}

fn validate_face(face: &FaceDef) -> Result<(), ValidationError> {
    // from_index saturates at the top of the range
    if face.id == u32::MAX {
        return Err(ValidationError::InvalidValue {
            field: "faces.id".to_string(),
            value: face.id.to_string(),
            reason: "exceeds the face index range".to_string(),
        });
    }
    face.inputs()
        .validate()
        .map_err(|source| ValidationError::InvalidFace {
            id: face.id,
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wf_wallfn::{WallFunctionConfig, WallFunctionType};

    fn face(id: u32) -> FaceDef {
        FaceDef {
            id,
            l_visc: 1.5e-5,
            t_visc: 0.0,
            vel: 3.0,
            y: 1e-3,
            rnnb: 0.0,
            kinetic_en: 0.0,
            roughness: 0.0,
        }
    }

    fn case() -> Case {
        let mut case = Case::new("plate", WallFunctionConfig::new(WallFunctionType::OneScaleLog));
        case.faces = vec![face(0), face(1)];
        case
    }

    #[test]
    fn accepts_minimal_case() {
        assert!(validate_case(&case()).is_ok());
    }

    #[test]
    fn rejects_future_version() {
        let mut c = case();
        c.version = crate::LATEST_VERSION + 1;
        assert!(matches!(
            validate_case(&c),
            Err(ValidationError::UnsupportedVersion { .. })
        ));
    }

    #[test]
    fn rejects_duplicate_faces() {
        let mut c = case();
        c.faces.push(face(1));
        match validate_case(&c) {
            Err(ValidationError::DuplicateId { id, context }) => {
                assert_eq!(id, "1");
                assert_eq!(context, "faces");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn rejects_bad_face_values() {
        let mut c = case();
        c.faces[1].vel = -1.0;
        assert!(matches!(
            validate_case(&c),
            Err(ValidationError::InvalidFace { id: 1, .. })
        ));

        let mut c = case();
        c.faces[0].y = 0.0;
        assert!(matches!(
            validate_case(&c),
            Err(ValidationError::InvalidFace { id: 0, .. })
        ));
    }

    #[test]
    fn rejects_bad_scalars() {
        let mut c = case();
        c.scalars.push(ScalarDef {
            name: "temperature".to_string(),
            prl: 0.0,
            prt: 0.85,
            conductivity_w_per_mk: None,
        });
        assert!(matches!(
            validate_case(&c),
            Err(ValidationError::InvalidValue { .. })
        ));
    }

    #[test]
    fn rejects_non_positive_ypluli() {
        let mut c = case();
        c.wall_functions.ypluli = 0.0;
        assert!(validate_case(&c).is_err());
    }
}
