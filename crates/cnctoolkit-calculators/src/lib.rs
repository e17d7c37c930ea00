//! # CNCToolkit Calculators
//!
//! The five machining calculation engines:
//!
//! - [`tool_overhang`] — recommended tool stick-out with derated speed/feed
//! - [`scallop`] — ball-nose cusp height and surface quality
//! - [`helical_ramp`] — ramp angles for helical and linear entry strategies
//! - [`cutting_conditions`] — spindle speed and table feed from material data
//! - [`stock_allowance`] — per-side stock allowances by material and feature
//!
//! Every engine is a pure function of its inputs over fixed reference
//! tables; there is no shared mutable state and no I/O.

pub mod cutting_conditions;
pub mod helical_ramp;
pub mod scallop;
pub mod stock_allowance;
pub mod tool_overhang;

pub use cutting_conditions::{
    CuttingConditionParameters, CuttingConditionSolver, CuttingConditions, MachiningMode,
    RangeSelector, FEED_RATE_LIMITS, SPINDLE_SPEED_LIMITS,
};
pub use helical_ramp::{
    RampDetail, RampResult, RampStrategy, RampWarning, SafetyTier, EXTERNAL_WIDTH_BAND,
    MIN_HOLE_DIAMETER_FACTOR,
};
pub use scallop::{ScallopHeightCalculator, ScallopResult, SurfaceQuality};
pub use stock_allowance::{StockAllowanceLookup, StockAllowanceResult};
pub use tool_overhang::{
    OverhangRecommendation, ToolMaterial, ToolOverhangAdvisor, ToolOverhangOutcome,
    ToolOverhangParameters,
};
