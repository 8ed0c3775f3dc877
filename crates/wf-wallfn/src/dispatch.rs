//! Single entry point selecting the closure from the configuration.

use crate::config::{WallFunctionConfig, WallFunctionType};
use crate::counters::RegimeCounters;
use crate::disabled::disabled;
use crate::face::{FaceInputs, WallFunctionOutput};
use crate::log_law::one_scale_log;
use crate::power_law::one_scale_power;
use crate::two_scales::{two_scales_log, two_scales_scalable};
use crate::van_driest::{VanDriestMode, two_scales_vdriest};
use wf_core::FaceId;

/// Friction velocity, `y+` and the boundary-condition corrections for one
/// face.
///
/// Pure: the regime in the returned value is the counter increment, see
/// [`evaluate_and_count`]. Callers guarantee `l_visc > 0` and `y > 0`
/// ([`FaceInputs::validate`]).
pub fn evaluate(
    config: &WallFunctionConfig,
    face: FaceId,
    inputs: &FaceInputs,
) -> WallFunctionOutput {
    debug_assert!(
        inputs.l_visc > 0.0 && inputs.y > 0.0,
        "face {face}: wall functions need l_visc > 0 and y > 0"
    );

    let FaceInputs {
        l_visc,
        t_visc,
        vel,
        y,
        rnnb,
        kinetic_en,
        roughness,
    } = *inputs;
    let ypluli = config.ypluli;

    match config.model {
        WallFunctionType::Disabled => disabled(l_visc, t_visc, vel, y),
        WallFunctionType::OneScalePower => one_scale_power(ypluli, l_visc, vel, y),
        WallFunctionType::OneScaleLog => one_scale_log(ypluli, face, l_visc, vel, y),
        WallFunctionType::TwoScalesLog => {
            two_scales_log(ypluli, l_visc, t_visc, vel, y, kinetic_en)
        }
        WallFunctionType::TwoScalesScalableLog => {
            two_scales_scalable(ypluli, l_visc, t_visc, vel, y, kinetic_en)
        }
        WallFunctionType::TwoScalesVanDriest => two_scales_vdriest(
            l_visc,
            vel,
            y,
            rnnb,
            kinetic_en,
            roughness,
            VanDriestMode::Full,
        ),
    }
}

/// [`evaluate`] and record the face in the caller's counters.
pub fn evaluate_and_count(
    config: &WallFunctionConfig,
    face: FaceId,
    inputs: &FaceInputs,
    counters: &mut RegimeCounters,
) -> WallFunctionOutput {
    let out = evaluate(config, face, inputs);
    counters.record(out.regime);
    out
}
