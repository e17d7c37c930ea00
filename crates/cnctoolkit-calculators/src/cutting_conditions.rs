//! Cutting condition solver
//!
//! Turns a material/tool pairing into a spindle speed and table feed via the
//! standard formulas M = VC * 1000 / (pi * D) and F = M * N * fz, with the
//! cutting speed and feed-per-tooth picked from the material's tabulated
//! ranges. Results are clamped to the machine envelope and the clamping is
//! reported rather than hidden.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tracing::{debug, warn};

use cnctoolkit_core::{
    require_positive, CalcError, CuttingProfileTable, Result, WorkpieceMaterial,
};

/// Machine spindle envelope (RPM)
pub const SPINDLE_SPEED_LIMITS: (f64, f64) = (100.0, 20_000.0);

/// Machine feed envelope (mm/min)
pub const FEED_RATE_LIMITS: (f64, f64) = (10.0, 5_000.0);

/// Which pass the conditions are for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MachiningMode {
    /// Material removal pass, higher feed per tooth
    Roughing,
    /// Surface quality pass, lower feed per tooth
    Finishing,
}

impl std::fmt::Display for MachiningMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MachiningMode::Roughing => write!(f, "Roughing"),
            MachiningMode::Finishing => write!(f, "Finishing"),
        }
    }
}

/// Where in a tabulated (min, max) range to land
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangeSelector {
    /// Top of the range
    High,
    /// Midpoint of the range
    Mid,
    /// Bottom of the range
    Low,
}

impl RangeSelector {
    /// Pick a value from an ordered (min, max) range
    pub fn pick(self, range: (f64, f64)) -> f64 {
        match self {
            RangeSelector::High => range.1,
            RangeSelector::Mid => (range.0 + range.1) / 2.0,
            RangeSelector::Low => range.0,
        }
    }
}

impl std::fmt::Display for RangeSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RangeSelector::High => write!(f, "High"),
            RangeSelector::Mid => write!(f, "Mid"),
            RangeSelector::Low => write!(f, "Low"),
        }
    }
}

/// Parameters for the cutting condition solver
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CuttingConditionParameters {
    /// Workpiece material
    pub material: WorkpieceMaterial,
    /// Tool diameter D (mm)
    pub tool_diameter: f64,
    /// Number of cutting teeth N
    pub tooth_count: u32,
    /// Roughing or finishing pass
    pub mode: MachiningMode,
    /// Where in the cutting speed range to land
    pub speed_selector: RangeSelector,
    /// Where in the feed-per-tooth range to land
    pub feed_selector: RangeSelector,
}

/// Solved cutting conditions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CuttingConditions {
    /// Selected cutting speed VC (m/min)
    pub cutting_speed: f64,
    /// Selected feed per tooth fz (mm/tooth)
    pub feed_per_tooth: f64,
    /// Spindle speed M after clamping (RPM)
    pub spindle_speed: f64,
    /// Table feed F after clamping (mm/min)
    pub feed_rate: f64,
    /// The computed spindle speed fell outside the machine envelope
    pub spindle_clamped: bool,
    /// The computed feed rate fell outside the machine envelope
    pub feed_clamped: bool,
    /// Tabulated cutting speed range for the material (m/min)
    pub vc_range: (f64, f64),
    /// Tabulated feed-per-tooth range for the material and mode (mm/tooth)
    pub fz_range: (f64, f64),
}

/// Cutting condition solver backed by the standard profile table
pub struct CuttingConditionSolver {
    profiles: CuttingProfileTable,
}

impl CuttingConditionSolver {
    /// Create a solver backed by the standard profile table
    pub fn new() -> Self {
        Self {
            profiles: CuttingProfileTable::standard(),
        }
    }

    /// Solve spindle speed and feed rate for the given parameters
    pub fn solve(&self, params: &CuttingConditionParameters) -> Result<CuttingConditions> {
        let diameter = require_positive("tool_diameter", params.tool_diameter)?;
        if params.tooth_count == 0 {
            return Err(CalcError::invalid_input("tooth_count", 0.0));
        }

        let profile = self.profiles.get(params.material);
        let fz_range = match params.mode {
            MachiningMode::Roughing => profile.fz_rough,
            MachiningMode::Finishing => profile.fz_finish,
        };

        let cutting_speed = params.speed_selector.pick(profile.vc_range);
        let feed_per_tooth = params.feed_selector.pick(fz_range);

        let raw_spindle = cutting_speed * 1000.0 / (PI * diameter);
        let spindle_speed = raw_spindle.clamp(SPINDLE_SPEED_LIMITS.0, SPINDLE_SPEED_LIMITS.1);
        let spindle_clamped = spindle_speed != raw_spindle;
        if spindle_clamped {
            warn!(
                raw_spindle,
                spindle_speed, "computed spindle speed clamped to machine envelope"
            );
        }

        // Feed is computed from the clamped spindle speed so that the output
        // pair is actually runnable on the machine.
        let raw_feed = spindle_speed * f64::from(params.tooth_count) * feed_per_tooth;
        let feed_rate = raw_feed.clamp(FEED_RATE_LIMITS.0, FEED_RATE_LIMITS.1);
        let feed_clamped = feed_rate != raw_feed;
        if feed_clamped {
            warn!(
                raw_feed,
                feed_rate, "computed feed rate clamped to machine envelope"
            );
        }

        debug!(
            %params.material,
            cutting_speed,
            feed_per_tooth,
            spindle_speed,
            feed_rate,
            "cutting conditions solved"
        );

        Ok(CuttingConditions {
            cutting_speed,
            feed_per_tooth,
            spindle_speed,
            feed_rate,
            spindle_clamped,
            feed_clamped,
            vc_range: profile.vc_range,
            fz_range,
        })
    }
}

impl Default for CuttingConditionSolver {
    fn default() -> Self {
        Self::new()
    }
}
