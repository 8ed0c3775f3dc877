use thiserror::Error;

pub type WfResult<T> = Result<T, WfError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WfError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Non-positive value for {what}: {value}")]
    NonPositive { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Negative value for {what}: {value}")]
    Negative { what: &'static str, value: f64 },
}
