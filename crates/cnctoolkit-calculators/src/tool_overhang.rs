//! Tool overhang (stick-out) advisor
//!
//! Recommends how far a tool should protrude from the holder for a given
//! cut, using an empirical rule derated by tool material rigidity and
//! cutting depth, clamped to the stable L/D band.

use serde::{Deserialize, Serialize};
use tracing::debug;

use cnctoolkit_core::{require_positive, Result};

/// Multiplier of tool diameter at the heart of the overhang rule
const BASE_OVERHANG_MULTIPLIER: f64 = 3.0;

/// Stable stick-out band as multiples of tool diameter (L/D)
const LD_BAND: (f64, f64) = (1.5, 5.0);

/// Cutting depth above this many diameters gets a warning instead of a
/// recommendation
const MAX_DEPTH_DIAMETER_RATIO: f64 = 2.0;

/// Cutting tool material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub enum ToolMaterial {
    /// Tungsten carbide
    TungstenCarbide,
    /// High speed steel
    HighSpeedSteel,
    /// Ceramic
    Ceramic,
}

impl ToolMaterial {
    /// Rigidity factor applied to the base overhang rule
    ///
    /// Carbide is the 1.0 baseline; HSS flexes more and gets a shorter
    /// stick-out, ceramic is stiffer and tolerates a longer one.
    pub fn rigidity_factor(self) -> f64 {
        match self {
            ToolMaterial::TungstenCarbide => 1.0,
            ToolMaterial::HighSpeedSteel => 0.7,
            ToolMaterial::Ceramic => 1.3,
        }
    }
}

impl std::fmt::Display for ToolMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToolMaterial::TungstenCarbide => write!(f, "Tungsten Carbide"),
            ToolMaterial::HighSpeedSteel => write!(f, "High Speed Steel"),
            ToolMaterial::Ceramic => write!(f, "Ceramic"),
        }
    }
}

/// Parameters for the tool overhang advisor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolOverhangParameters {
    /// Tool diameter (mm)
    pub tool_diameter: f64,
    /// Tool material
    pub tool_material: ToolMaterial,
    /// Programmed spindle speed (RPM)
    pub spindle_speed: f64,
    /// Programmed feed rate (mm/min)
    pub feed_rate: f64,
    /// Cutting depth (mm)
    pub cutting_depth: f64,
}

/// A computed stick-out recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverhangRecommendation {
    /// Recommended stick-out length (mm)
    pub optimal_length: f64,
    /// Stick-out length over tool diameter
    pub ld_ratio: f64,
    /// Derated spindle speed to run at this stick-out (RPM)
    pub suggested_speed: u32,
    /// Derated feed rate to run at this stick-out (mm/min)
    pub suggested_feed: u32,
    /// Whether the raw rule landed outside the stable L/D band and was
    /// forced back into it
    pub clamped: bool,
}

/// Outcome of an overhang calculation
///
/// The depth check is policy, not validation: an over-deep cut is a valid
/// request, but the advisor declines to recommend a stick-out for it and
/// tells the caller to warn the operator instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ToolOverhangOutcome {
    /// A usable recommendation
    Recommendation(OverhangRecommendation),
    /// Cutting depth exceeds twice the tool diameter; no recommendation
    DepthWarning {
        /// The requested cutting depth (mm)
        cutting_depth: f64,
        /// Largest depth the advisor will recommend for (mm)
        max_recommended_depth: f64,
    },
}

/// Tool overhang advisor
pub struct ToolOverhangAdvisor {
    params: ToolOverhangParameters,
}

impl ToolOverhangAdvisor {
    /// Create a new advisor with the given parameters
    pub fn new(params: ToolOverhangParameters) -> Self {
        Self { params }
    }

    /// Compute the stick-out recommendation
    pub fn advise(&self) -> Result<ToolOverhangOutcome> {
        let p = &self.params;

        let diameter = require_positive("tool_diameter", p.tool_diameter)?;
        let speed = require_positive("spindle_speed", p.spindle_speed)?;
        let feed = require_positive("feed_rate", p.feed_rate)?;
        let depth = require_positive("cutting_depth", p.cutting_depth)?;

        let max_recommended_depth = diameter * MAX_DEPTH_DIAMETER_RATIO;
        if depth > max_recommended_depth {
            debug!(depth, max_recommended_depth, "cut too deep for a stick-out recommendation");
            return Ok(ToolOverhangOutcome::DepthWarning {
                cutting_depth: depth,
                max_recommended_depth,
            });
        }

        let factor = p.tool_material.rigidity_factor();
        let raw = diameter * BASE_OVERHANG_MULTIPLIER * factor * (1.0 - depth / 10.0);

        let (lo, hi) = (diameter * LD_BAND.0, diameter * LD_BAND.1);
        let optimal_length = raw.clamp(lo, hi);
        let clamped = optimal_length != raw;
        if clamped {
            debug!(raw, optimal_length, "overhang forced into stable L/D band");
        }

        Ok(ToolOverhangOutcome::Recommendation(OverhangRecommendation {
            optimal_length,
            ld_ratio: optimal_length / diameter,
            suggested_speed: (speed * 0.9) as u32,
            suggested_feed: (feed * 0.8) as u32,
            clamped,
        }))
    }
}
