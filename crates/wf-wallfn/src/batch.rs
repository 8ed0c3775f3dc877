//! Evaluation of all wall faces of one mesh partition.

use crate::config::WallFunctionConfig;
use crate::counters::RegimeCounters;
use crate::dispatch::evaluate;
use crate::error::{WallError, WallResult};
use crate::face::{FaceInputs, WallFunctionOutput};
use rayon::prelude::*;
use wf_core::FaceId;

/// Outputs in input order plus the partition-local counters.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchOutcome {
    pub outputs: Vec<WallFunctionOutput>,
    pub counters: RegimeCounters,
}

/// Validate every face, then evaluate them in parallel.
///
/// Counters are tallied per rayon job and summed, so the result does not
/// depend on the thread count.
pub fn evaluate_faces(
    config: &WallFunctionConfig,
    faces: &[(FaceId, FaceInputs)],
) -> WallResult<BatchOutcome> {
    config.validate()?;
    for (face, inputs) in faces {
        inputs.validate().map_err(|source| WallError::Face {
            face: *face,
            source,
        })?;
    }

    let outputs: Vec<WallFunctionOutput> = faces
        .par_iter()
        .map(|(face, inputs)| evaluate(config, *face, inputs))
        .collect();

    let counters = outputs
        .par_iter()
        .fold(RegimeCounters::default, |mut acc, out| {
            acc.record(out.regime);
            acc
        })
        .reduce(RegimeCounters::default, |a, b| a + b);

    tracing::debug!(
        model = config.model.name(),
        faces = faces.len(),
        nsubla = counters.nsubla,
        nlogla = counters.nlogla,
        "evaluated wall faces"
    );

    Ok(BatchOutcome { outputs, counters })
}
