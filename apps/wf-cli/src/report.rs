//! Per-face evaluation report.

use serde::Serialize;
use wf_case::Case;
use wf_core::units::{m, w_per_mk};
use wf_core::{FaceId, Real};
use wf_wallfn::{RegimeCounters, ScalarModel, SerialReduce, WallFunctionOutput};

use crate::AppResult;

#[derive(Debug, Serialize)]
pub struct CaseReport {
    pub name: String,
    pub model: &'static str,
    pub ypluli: Real,
    pub faces: Vec<FaceReport>,
    pub counters: RegimeCounters,
}

#[derive(Debug, Serialize)]
pub struct FaceReport {
    pub id: FaceId,
    pub iuntur: i32,
    #[serde(flatten)]
    pub output: WallFunctionOutput,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub scalars: Vec<ScalarReport>,
}

#[derive(Debug, Serialize)]
pub struct ScalarReport {
    pub name: String,
    pub model: ScalarModel,
    pub yplim: Real,
    pub htur: Real,
    /// Dimensional exchange coefficient [W/(m²·K)] when a conductivity is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hflui: Option<Real>,
}

pub fn build_report(case: &Case) -> AppResult<CaseReport> {
    let config = &case.wall_functions;
    let faces = case.face_inputs();
    let outcome = wf_wallfn::evaluate_faces(config, &faces)?;

    let mut reports = Vec::with_capacity(faces.len());
    for ((id, inputs), output) in faces.iter().zip(outcome.outputs) {
        let mut scalars = Vec::new();
        if !config.exchange_correlation {
            for scalar in &case.scalars {
                let corr = wf_wallfn::correct(scalar.prl, scalar.prt, output.yplus, output.dplus)?;
                scalars.push(ScalarReport {
                    name: scalar.name.clone(),
                    model: corr.model,
                    yplim: corr.yplim,
                    htur: corr.htur,
                    hflui: scalar
                        .conductivity_w_per_mk
                        .map(|k| corr.exchange_coefficient(w_per_mk(k), m(inputs.y))),
                });
            }
        }
        reports.push(FaceReport {
            id: *id,
            iuntur: output.iuntur(),
            output,
            scalars,
        });
    }

    // Single-process run: the partition is the whole case.
    let counters = outcome.counters.reduce(&SerialReduce);
    counters.log_summary(&case.name);

    Ok(CaseReport {
        name: case.name.clone(),
        model: config.model.name(),
        ypluli: config.ypluli,
        faces: reports,
        counters,
    })
}

pub fn print_table(report: &CaseReport) {
    println!(
        "Case '{}': model={} ypluli={:.4}",
        report.name, report.model, report.ypluli
    );
    println!(
        "  {:>8} {:>12} {:>12} {:>12} {:>10} {:>10} {:>10} {:>6}",
        "face", "y+", "u*", "uk", "d+", "y+/u+", "cofimp", "iuntur"
    );
    for face in &report.faces {
        let out = &face.output;
        println!(
            "  {:>8} {:>12.4e} {:>12.4e} {:>12.4e} {:>10.4} {:>10.4} {:>10.4} {:>6}",
            face.id, out.yplus, out.ustar, out.uk, out.dplus, out.ypup, out.cofimp, face.iuntur
        );
        for s in &face.scalars {
            let model = match s.model {
                ScalarModel::PrandtlTaylor => "prandtl-taylor",
                ScalarModel::ArpaciLarsen => "arpaci-larsen",
            };
            match s.hflui {
                Some(h) => println!(
                    "           {}: htur={:.4} yplim={:.3} ({}) h={:.4e} W/m2K",
                    s.name, s.htur, s.yplim, model, h
                ),
                None => println!(
                    "           {}: htur={:.4} yplim={:.3} ({})",
                    s.name, s.htur, s.yplim, model
                ),
            }
        }
    }
    print_counters(&report.counters);
}

fn print_counters(counters: &RegimeCounters) {
    println!("\nRegimes:");
    println!("  Viscous sublayer: {}", counters.nsubla);
    println!("  Log layer:        {}", counters.nlogla);
    println!("  Total:            {}", counters.total());
}
