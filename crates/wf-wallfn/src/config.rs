//! Wall-function model selection.
//!
//! The descriptor is built once at simulation setup and passed by reference to
//! every evaluation; nothing here is global or mutable.

use crate::error::{WallError, WallResult};
use wf_core::Real;

/// Default `y+` limit between the viscous sublayer and the log layer.
pub const DEFAULT_YPLULI: Real = 10.88;

/// Near-wall closure variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WallFunctionType {
    /// No wall model, laminar stress estimate.
    Disabled,
    /// One velocity scale, Werner & Wengle power law.
    OneScalePower,
    /// One velocity scale, piecewise linear / log law.
    OneScaleLog,
    /// Two velocity scales (friction and turbulent kinetic energy), log law.
    #[default]
    TwoScalesLog,
    /// Two velocity scales with the wall shifted out of the sublayer.
    TwoScalesScalableLog,
    /// Two velocity scales with a Van Driest mixing-length profile.
    TwoScalesVanDriest,
}

impl WallFunctionType {
    pub const ALL: [WallFunctionType; 6] = [
        WallFunctionType::Disabled,
        WallFunctionType::OneScalePower,
        WallFunctionType::OneScaleLog,
        WallFunctionType::TwoScalesLog,
        WallFunctionType::TwoScalesScalableLog,
        WallFunctionType::TwoScalesVanDriest,
    ];

    /// Integer selector used by the solver's setup files (0..=5).
    pub fn code(self) -> i32 {
        match self {
            WallFunctionType::Disabled => 0,
            WallFunctionType::OneScalePower => 1,
            WallFunctionType::OneScaleLog => 2,
            WallFunctionType::TwoScalesLog => 3,
            WallFunctionType::TwoScalesScalableLog => 4,
            WallFunctionType::TwoScalesVanDriest => 5,
        }
    }

    pub fn from_code(code: i32) -> WallResult<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.code() == code)
            .ok_or(WallError::UnknownModel { code })
    }

    pub fn name(self) -> &'static str {
        match self {
            WallFunctionType::Disabled => "disabled",
            WallFunctionType::OneScalePower => "one_scale_power",
            WallFunctionType::OneScaleLog => "one_scale_log",
            WallFunctionType::TwoScalesLog => "two_scales_log",
            WallFunctionType::TwoScalesScalableLog => "two_scales_scalable_log",
            WallFunctionType::TwoScalesVanDriest => "two_scales_van_driest",
        }
    }

}

/// Immutable wall-function descriptor.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WallFunctionConfig {
    /// Selected closure.
    #[cfg_attr(feature = "serde", serde(default))]
    pub model: WallFunctionType,

    /// Exchange coefficient for scalars taken from an external correlation
    /// instead of the scalar wall function.
    #[cfg_attr(feature = "serde", serde(default))]
    pub exchange_correlation: bool,

    /// `y+` limit of the viscous sublayer.
    #[cfg_attr(feature = "serde", serde(default = "default_ypluli"))]
    pub ypluli: Real,
}

#[cfg(feature = "serde")]
fn default_ypluli() -> Real {
    DEFAULT_YPLULI
}

impl Default for WallFunctionConfig {
    fn default() -> Self {
        Self::new(WallFunctionType::default())
    }
}

impl WallFunctionConfig {
    pub fn new(model: WallFunctionType) -> Self {
        Self {
            model,
            exchange_correlation: false,
            ypluli: DEFAULT_YPLULI,
        }
    }

    /// Override the sublayer limit.
    pub fn with_ypluli(mut self, ypluli: Real) -> WallResult<Self> {
        self.ypluli = ypluli;
        self.validate()?;
        Ok(self)
    }

    pub fn with_exchange_correlation(mut self, enabled: bool) -> Self {
        self.exchange_correlation = enabled;
        self
    }

    pub fn validate(&self) -> WallResult<()> {
        if !self.ypluli.is_finite() || self.ypluli <= 0.0 {
            return Err(WallError::InvalidConfig {
                what: "ypluli must be positive and finite",
            });
        }
        Ok(())
    }
}
