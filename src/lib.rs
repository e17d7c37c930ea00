//! # CNCToolkit
//!
//! A machining calculation toolkit for CNC programmers and operators:
//!
//! - Tool overhang (stick-out) recommendations
//! - Ball-nose scallop height and surface quality
//! - Helical and linear ramp angle safety checks
//! - Spindle speed and feed rate from material cutting data
//! - Stock allowance lookups by material and feature
//!
//! ## Architecture
//!
//! CNCToolkit is organized as a workspace:
//!
//! 1. **cnctoolkit-core** - Error taxonomy and static machining reference data
//! 2. **cnctoolkit-calculators** - The five calculation engines
//! 3. **cnctoolkit** - Command-line front end
//!
//! All calculations are pure: fixed reference tables in, numbers and
//! advisories out, no I/O and no shared mutable state.

pub use cnctoolkit_core::{
    CalcError, CuttingProfileTable, FeatureType, MaterialCuttingProfile, ReferenceStepoverTable,
    Result, StockAllowanceEntry, StockAllowanceTable, WorkpieceMaterial, FINISHING_MARGIN_MM,
};

pub use cnctoolkit_calculators::{
    CuttingConditionParameters, CuttingConditionSolver, CuttingConditions, MachiningMode,
    OverhangRecommendation, RampDetail, RampResult, RampStrategy, RampWarning, RangeSelector,
    SafetyTier, ScallopHeightCalculator, ScallopResult, StockAllowanceLookup,
    StockAllowanceResult, SurfaceQuality, ToolMaterial, ToolOverhangAdvisor, ToolOverhangOutcome,
    ToolOverhangParameters,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output on stderr, keeping stdout free for results
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
