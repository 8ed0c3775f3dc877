//! wf-case: case file format for offline wall-function evaluation.

pub mod schema;
pub mod validate;

pub use schema::*;
pub use validate::{ValidationError, validate_case};

pub const LATEST_VERSION: u32 = 1;

pub type CaseResult<T> = Result<T, CaseError>;

#[derive(thiserror::Error, Debug)]
pub enum CaseError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unknown case file extension: {path}")]
    UnknownFormat { path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &std::path::Path) -> CaseResult<Case> {
    let content = std::fs::read_to_string(path)?;
    let case: Case = serde_yaml::from_str(&content)?;
    validate_case(&case)?;
    Ok(case)
}

pub fn save_yaml(path: &std::path::Path, case: &Case) -> CaseResult<()> {
    validate_case(case)?;
    let content = serde_yaml::to_string(case)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> CaseResult<Case> {
    let content = std::fs::read_to_string(path)?;
    let case: Case = serde_json::from_str(&content)?;
    validate_case(&case)?;
    Ok(case)
}

pub fn save_json(path: &std::path::Path, case: &Case) -> CaseResult<()> {
    validate_case(case)?;
    let content = serde_json::to_string_pretty(case)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load by extension: `.json` is JSON, `.yaml`/`.yml` is YAML.
pub fn load(path: &std::path::Path) -> CaseResult<Case> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => load_json(path),
        Some("yaml") | Some("yml") => load_yaml(path),
        _ => Err(CaseError::UnknownFormat {
            path: path.display().to_string(),
        }),
    }
}
