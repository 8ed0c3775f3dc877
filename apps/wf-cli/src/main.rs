use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use wf_core::Real;
use wf_wallfn::common::log_law_uplus;
use wf_wallfn::van_driest::{mixing_length, roughness_shift};

mod report;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Case error: {0}")]
    Case(#[from] wf_case::CaseError),

    #[error("Wall function error: {0}")]
    Wall(#[from] wf_wallfn::WallError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

#[derive(Parser)]
#[command(name = "wf-cli")]
#[command(about = "Near-wall turbulence closures - offline evaluation tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate case file syntax and values
    Validate {
        /// Path to the case file (.yaml, .yml or .json)
        case_path: PathBuf,
    },
    /// Evaluate the wall functions on every face of a case
    Evaluate {
        /// Path to the case file (.yaml, .yml or .json)
        case_path: PathBuf,
        /// Print the report as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the Van Driest velocity profile next to the log law
    Profile {
        /// Smallest y+
        #[arg(long, default_value_t = 0.1)]
        min: Real,
        /// Largest y+
        #[arg(long, default_value_t = 1000.0)]
        max: Real,
        /// Number of log-spaced points
        #[arg(long, default_value_t = 25)]
        points: usize,
        /// Dimensionless wall roughness kr+
        #[arg(long, default_value_t = 0.0)]
        krplus: Real,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { case_path } => cmd_validate(&case_path),
        Commands::Evaluate { case_path, json } => cmd_evaluate(&case_path, json),
        Commands::Profile {
            min,
            max,
            points,
            krplus,
        } => cmd_profile(min, max, points, krplus),
    }
}

fn cmd_validate(case_path: &Path) -> AppResult<()> {
    println!("Validating case: {}", case_path.display());
    let case = wf_case::load(case_path)?;
    println!(
        "✓ Case is valid ({} faces, {} scalars)",
        case.faces.len(),
        case.scalars.len()
    );
    Ok(())
}

fn cmd_evaluate(case_path: &Path, json: bool) -> AppResult<()> {
    let case = wf_case::load(case_path)?;
    tracing::debug!(
        case = %case.name,
        model = case.wall_functions.model.name(),
        faces = case.faces.len(),
        "evaluating case"
    );

    let report = report::build_report(&case)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        report::print_table(&report);
    }
    Ok(())
}

/// One point of the Van Driest profile.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ProfileRow {
    yplus: Real,
    uplus: Real,
    log_law: Real,
    /// Mixing length at `yplus`, as reported in the closure's `lmk`
    lmk: Real,
}

fn profile_rows(min: Real, max: Real, points: usize, dyrp: Real) -> Vec<ProfileRow> {
    let ratio = (max / min).ln() / (points - 1) as Real;
    (0..points)
        .map(|i| {
            let yplus = min * (ratio * i as Real).exp();
            ProfileRow {
                yplus,
                uplus: wf_wallfn::van_driest_uplus(yplus, dyrp),
                log_law: log_law_uplus(yplus),
                lmk: mixing_length(yplus),
            }
        })
        .collect()
}

fn cmd_profile(min: Real, max: Real, points: usize, krplus: Real) -> AppResult<()> {
    if !(min > 0.0 && max > min) {
        return Err(AppError::InvalidInput(format!(
            "y+ range must satisfy 0 < min < max, got [{}, {}]",
            min, max
        )));
    }
    if points < 2 {
        return Err(AppError::InvalidInput(
            "at least 2 profile points are required".to_string(),
        ));
    }
    if !(krplus >= 0.0 && krplus.is_finite()) {
        return Err(AppError::InvalidInput(format!(
            "kr+ must be non-negative, got {}",
            krplus
        )));
    }

    let dyrp = roughness_shift(krplus);

    println!("Van Driest profile (kr+ = {}, dy+ = {:.4})", krplus, dyrp);
    println!("  {:>12} {:>12} {:>12} {:>12}", "y+", "u+", "log law", "Lm");
    for row in profile_rows(min, max, points, dyrp) {
        println!(
            "  {:>12.4e} {:>12.4} {:>12.4} {:>12.4}",
            row.yplus, row.uplus, row.log_law, row.lmk
        );
    }
    Ok(())
}
