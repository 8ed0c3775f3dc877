use wf_case::*;
use wf_wallfn::{Regime, WallFunctionConfig, WallFunctionType};

fn channel_case() -> Case {
    let mut case = Case::new(
        "Heated channel",
        WallFunctionConfig::new(WallFunctionType::TwoScalesScalableLog),
    );
    case.scalars.push(ScalarDef {
        name: "temperature".to_string(),
        prl: 0.71,
        prt: 0.85,
        conductivity_w_per_mk: Some(0.026),
    });
    case.faces = vec![
        FaceDef {
            id: 0,
            l_visc: 1.5e-5,
            t_visc: 2e-4,
            vel: 8.0,
            y: 2e-3,
            rnnb: 0.0,
            kinetic_en: 0.3,
            roughness: 0.0,
        },
        FaceDef {
            id: 7,
            l_visc: 1.5e-5,
            t_visc: 0.0,
            vel: 0.05,
            y: 1e-4,
            rnnb: 0.0,
            kinetic_en: 0.0,
            roughness: 0.0,
        },
    ];
    case
}

#[test]
fn roundtrip_yaml_channel() {
    let case = channel_case();
    validate_case(&case).unwrap();

    let path = std::env::temp_dir().join("wf_case_roundtrip_channel.yaml");
    save_yaml(&path, &case).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(case, loaded);
}

#[test]
fn roundtrip_json_channel() {
    let case = channel_case();

    let path = std::env::temp_dir().join("wf_case_roundtrip_channel.json");
    save_json(&path, &case).unwrap();
    let loaded = load(&path).unwrap();

    assert_eq!(case, loaded);
}

#[test]
fn yaml_defaults_are_filled_in() {
    let yaml = r#"
version: 1
name: Minimal
wall_functions:
  model: one_scale_power
faces:
  - id: 3
    l_visc: 1.0e-6
    vel: 0.5
    y: 0.001
"#;
    let case: Case = serde_yaml::from_str(yaml).unwrap();
    validate_case(&case).unwrap();

    assert_eq!(case.wall_functions.model, WallFunctionType::OneScalePower);
    assert_eq!(case.wall_functions.ypluli, wf_wallfn::DEFAULT_YPLULI);
    assert!(!case.wall_functions.exchange_correlation);
    assert!(case.scalars.is_empty());

    let face = &case.faces[0];
    assert_eq!(face.t_visc, 0.0);
    assert_eq!(face.kinetic_en, 0.0);
    assert_eq!(face.roughness, 0.0);
}

#[test]
fn scalar_prt_defaults() {
    let yaml = r#"
version: 1
name: Scalar default
scalars:
  - name: temperature
    prl: 7.0
"#;
    let case: Case = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(case.wall_functions.model, WallFunctionType::TwoScalesLog);
    assert_eq!(case.scalars[0].prt, 0.85);
    assert_eq!(case.scalars[0].conductivity_w_per_mk, None);
}

#[test]
fn loaded_case_feeds_batch_evaluation() {
    let case = channel_case();
    let faces = case.face_inputs();
    assert_eq!(faces[1].0.index(), 7);

    let outcome = wf_wallfn::evaluate_faces(&case.wall_functions, &faces).unwrap();
    assert_eq!(outcome.outputs.len(), 2);
    assert_eq!(outcome.counters.total(), 2);

    // a creeping face next to the wall is shifted, hence counted in the sublayer
    assert_eq!(outcome.outputs[1].regime, Regime::ViscousSublayer);
    assert!(outcome.outputs[1].dplus > 0.0);
}

#[test]
fn load_rejects_invalid_case() {
    let yaml = r#"
version: 1
name: Broken
faces:
  - id: 0
    l_visc: -1.0e-6
    vel: 0.5
    y: 0.001
"#;
    let path = std::env::temp_dir().join("wf_case_invalid.yaml");
    std::fs::write(&path, yaml).unwrap();

    assert!(matches!(
        load_yaml(&path),
        Err(CaseError::Validation(ValidationError::InvalidFace { id: 0, .. }))
    ));
}

#[test]
fn unknown_extension_is_rejected() {
    let path = std::env::temp_dir().join("wf_case_unknown.toml");
    assert!(matches!(load(&path), Err(CaseError::UnknownFormat { .. })));
}
