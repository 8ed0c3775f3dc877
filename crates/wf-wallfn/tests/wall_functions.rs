//! End-to-end checks of the velocity and scalar wall functions.

use wf_core::{FaceId, Tolerances, nearly_equal};
use wf_wallfn::{
    DEFAULT_YPLULI, FaceInputs, Regime, RegimeCounters, SerialReduce, WallFunctionConfig,
    WallFunctionType, correct, evaluate, evaluate_and_count, evaluate_faces, van_driest_uplus,
};

fn tol() -> Tolerances {
    Tolerances {
        abs: 1e-12,
        rel: 1e-9,
    }
}

#[test]
fn disabled_model_laminar_face() {
    let config = WallFunctionConfig::new(WallFunctionType::Disabled);
    let inputs = FaceInputs::new(1e-5, 1.0, 0.001);
    let mut counters = RegimeCounters::default();

    let out = evaluate_and_count(&config, FaceId::from_index(0), &inputs, &mut counters);

    assert!(nearly_equal(out.ustar, 0.1, tol()));
    assert!(nearly_equal(out.yplus, 10.0, tol()));
    assert_eq!(out.iuntur(), 0);
    assert_eq!(counters, RegimeCounters { nsubla: 1, nlogla: 0 });
}

#[test]
fn power_law_log_layer_face() {
    let config = WallFunctionConfig::new(WallFunctionType::OneScalePower);
    let inputs = FaceInputs::new(1.5e-5, 20.0, 0.01);
    let mut counters = RegimeCounters::default();

    let out = evaluate_and_count(&config, FaceId::from_index(4), &inputs, &mut counters);

    assert!(out.yplus > DEFAULT_YPLULI);
    assert_eq!(out.regime, Regime::LogLayer);
    assert_eq!(out.iuntur(), 1);
    assert_eq!(counters, RegimeCounters { nsubla: 0, nlogla: 1 });

    // closed forms of the power law
    let (a, b, d) = (8.3_f64, 1.0_f64 / 7.0, 7.0_f64 / 8.0);
    let ydvisc: f64 = 0.01 / 1.5e-5;
    let ustar = (20.0 / (a * ydvisc.powf(b))).powf(d);
    let ypup = 20.0_f64.powf(2.0 * d - 1.0) / a.powf(2.0 * d);
    let cofimp = 1.0 + b * ustar.powf(b + 1.0 - 1.0 / d) * (2.0_f64.powf(b - 1.0) - 2.0);
    assert!(nearly_equal(out.ustar, ustar, tol()));
    assert!(nearly_equal(out.ypup, ypup, tol()));
    assert!(nearly_equal(out.cofimp, cofimp, tol()));
}

#[test]
fn power_law_sublayer_matches_linear_profile() {
    let config = WallFunctionConfig::new(WallFunctionType::OneScalePower);
    let (l_visc, vel, y) = (1e-5, 0.02, 5e-4);
    let out = evaluate(&config, FaceId::from_index(0), &FaceInputs::new(l_visc, vel, y));
    assert_eq!(out.regime, Regime::ViscousSublayer);
    assert!(nearly_equal(out.ustar, (vel * l_visc / y).sqrt(), tol()));
    assert!(nearly_equal(out.yplus, out.ustar * y / l_visc, tol()));
}

#[test]
fn one_scale_log_both_regimes() {
    let config = WallFunctionConfig::new(WallFunctionType::OneScaleLog);
    let face = FaceId::from_index(0);

    // vel * y / nu = 100 < ypluli^2
    let slow = evaluate(&config, face, &FaceInputs::new(1e-5, 1.0, 1e-3));
    assert_eq!(slow.regime, Regime::ViscousSublayer);
    assert!(nearly_equal(slow.ustar, (1.0_f64 * 1e-5 / 1e-3).sqrt(), tol()));

    let fast = evaluate(&config, face, &FaceInputs::new(1e-5, 1.0, 0.01));
    assert_eq!(fast.regime, Regime::LogLayer);
    let uplus = 1.0 / fast.ustar;
    let law = fast.yplus.ln() / 0.42 + 5.2;
    assert!((uplus - law).abs() / law < 1e-3);
}

#[test]
fn scalable_floors_yplus_and_feeds_scalar() {
    let config = WallFunctionConfig::new(WallFunctionType::TwoScalesScalableLog);
    let inputs = FaceInputs::new(1e-5, 0.3, 5e-5).with_turbulence(0.0, 1e-3);
    let out = evaluate(&config, FaceId::from_index(0), &inputs);

    assert_eq!(out.yplus, DEFAULT_YPLULI);
    assert!(out.dplus > 0.0);
    assert_eq!(out.regime, Regime::ViscousSublayer);
    assert_eq!(out.iuntur(), 1);

    // the scalar wall function sees the raw distance y+ - d+
    let scalar = correct(0.71, 0.85, out.yplus, out.dplus).unwrap();
    assert_eq!(scalar.htur, 1.0);
}

#[test]
fn van_driest_continuity_at_fit_limit() {
    let below = van_driest_uplus(200.0, 0.0);
    let above = van_driest_uplus(200.0 + 1e-9, 0.0);
    assert!((below - above).abs() < 1e-2);
}

#[test]
fn van_driest_through_dispatch() {
    let config = WallFunctionConfig::new(WallFunctionType::TwoScalesVanDriest);
    let inputs = FaceInputs::new(1.5e-5, 10.0, 0.01)
        .with_turbulence(1e-3, 0.5)
        .with_rnnb(0.3);
    let out = evaluate(&config, FaceId::from_index(0), &inputs);
    assert_eq!(out.regime, Regime::LogLayer);
    assert!(out.lmk > 0.0);
    assert!(nearly_equal(out.ustar, 10.0 / van_driest_uplus(out.yplus, 0.0), tol()));
}

#[test]
fn partition_pass_reduces_counters() {
    let config = WallFunctionConfig::new(WallFunctionType::TwoScalesLog);
    let faces: Vec<_> = (0..200_u32)
        .map(|i| {
            let y = 1e-5 * f64::from(i + 1);
            let inputs = FaceInputs::new(1.5e-5, 5.0, y).with_turbulence(1e-4, 0.2);
            (FaceId::from_index(i), inputs)
        })
        .collect();

    let outcome = evaluate_faces(&config, &faces).unwrap();
    let global = outcome.counters.reduce(&SerialReduce);
    global.log_summary("wall");

    assert_eq!(global.total(), 200);
    assert!(global.nsubla > 0 && global.nlogla > 0);
    let sublayer = outcome
        .outputs
        .iter()
        .filter(|o| o.regime == Regime::ViscousSublayer)
        .count() as u64;
    assert_eq!(sublayer, global.nsubla);
}
