//! Helical ramp angle calculator
//!
//! Computes the ramp (plunge) angle for three entry strategies: helical
//! interpolation into a hole, helical milling around a boss, and a straight
//! linear ramp. Each strategy carries its own required inputs and its own
//! safety classification table; the tables are deliberately kept separate
//! because their band counts and thresholds differ.

use serde::{Deserialize, Serialize};
use tracing::debug;

use cnctoolkit_core::{require_positive, CalcError, Result};

/// Minimum workable hole diameter as a multiple of tool diameter
pub const MIN_HOLE_DIAMETER_FACTOR: f64 = 1.2;

/// Recommended cutting width band for external helical milling, as
/// fractions of tool diameter
pub const EXTERNAL_WIDTH_BAND: (f64, f64) = (0.5, 0.8);

/// Ramp entry strategy with its required inputs
///
/// Selecting a variant fixes the required-field set at compile time; there
/// is no way to invoke a strategy with a field missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RampStrategy {
    /// Helical interpolation down into a hole
    InternalHelical {
        /// Tool diameter Dc (mm)
        tool_diameter: f64,
        /// Total cutting depth d (mm)
        depth: f64,
        /// Finished hole diameter Dm (mm)
        hole_diameter: f64,
    },
    /// Helical milling around the outside of a boss
    ExternalHelical {
        /// Tool diameter Dc (mm)
        tool_diameter: f64,
        /// Total cutting depth d (mm)
        depth: f64,
        /// Boss diameter Dm (mm)
        boss_diameter: f64,
        /// Radial cutting width W per revolution (mm)
        width: f64,
    },
    /// Straight linear ramp into the material
    Ramp {
        /// Total cutting depth d (mm)
        depth: f64,
        /// Horizontal ramp length L (mm)
        length: f64,
    },
}

/// Safety classification of a ramp angle
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SafetyTier {
    /// Angle too shallow to cut efficiently
    TooShallow,
    /// Below the usual working band
    Shallow,
    /// Stable working range
    Safe,
    /// Upper end of the working range
    Caution,
    /// Beyond the working range
    Dangerous,
    /// Far beyond the working range
    Critical,
}

impl std::fmt::Display for SafetyTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SafetyTier::TooShallow => write!(f, "Too Shallow"),
            SafetyTier::Shallow => write!(f, "Shallow"),
            SafetyTier::Safe => write!(f, "Safe"),
            SafetyTier::Caution => write!(f, "Caution"),
            SafetyTier::Dangerous => write!(f, "Dangerous"),
            SafetyTier::Critical => write!(f, "Critical"),
        }
    }
}

/// One band of a classification table: upper angle bound (exclusive),
/// tier, operator advisory
type SafetyBand = (f64, SafetyTier, &'static str);

/// Internal helical: working band 15-45 degrees
const INTERNAL_HELICAL_BANDS: [SafetyBand; 5] = [
    (5.0, SafetyTier::TooShallow, "Angle too shallow; machining efficiency will be poor"),
    (15.0, SafetyTier::Shallow, "Angle on the low side; efficiency could be raised"),
    (30.0, SafetyTier::Safe, "Angle in the stable range; machining is steady"),
    (45.0, SafetyTier::Caution, "Angle on the high side; watch the tool load"),
    (f64::INFINITY, SafetyTier::Dangerous, "Angle too steep; split the cut into depth passes"),
];

/// External helical: side load builds sooner than the internal case
const EXTERNAL_HELICAL_BANDS: [SafetyBand; 5] = [
    (5.0, SafetyTier::TooShallow, "Angle too shallow; machining efficiency will be poor"),
    (15.0, SafetyTier::Safe, "Angle in the stable range; machining is steady"),
    (30.0, SafetyTier::Caution, "Angle on the high side; watch the lateral tool force"),
    (45.0, SafetyTier::Dangerous, "Angle too steep; split the cut into depth passes"),
    (f64::INFINITY, SafetyTier::Critical, "Angle far too steep; not recommended"),
];

/// Linear ramp: working band 5-15 degrees, five bands at 3/8/15/20
const RAMP_BANDS: [SafetyBand; 5] = [
    (3.0, SafetyTier::TooShallow, "Angle too shallow; machining efficiency will be poor"),
    (8.0, SafetyTier::Safe, "Angle in the stable range; machining is steady"),
    (15.0, SafetyTier::Caution, "Angle on the high side; watch the tool load"),
    (20.0, SafetyTier::Dangerous, "Angle too steep; reduce the cutting depth"),
    (f64::INFINITY, SafetyTier::Critical, "Angle far too steep; not recommended"),
];

/// Classify an angle against an ordered band table
fn classify(angle_deg: f64, bands: &[SafetyBand]) -> (SafetyTier, &'static str) {
    for &(limit, tier, advisory) in bands {
        if angle_deg < limit {
            return (tier, advisory);
        }
    }
    // Unreachable: every table ends with an infinite bound.
    let &(_, tier, advisory) = bands.last().unwrap();
    (tier, advisory)
}

/// Advisory warnings attached to a successful ramp calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RampWarning {
    /// Hole diameter is below the recommended minimum of 1.2x tool diameter
    HoleBelowRecommendedMinimum {
        /// Requested hole diameter (mm)
        hole_diameter: f64,
        /// Recommended minimum hole diameter (mm)
        minimum: f64,
    },
    /// Cutting width is below the recommended band
    WidthBelowRecommended {
        /// Requested cutting width (mm)
        width: f64,
        /// Lower edge of the recommended band (mm)
        minimum: f64,
    },
    /// Cutting width is above the recommended band
    WidthAboveRecommended {
        /// Requested cutting width (mm)
        width: f64,
        /// Upper edge of the recommended band (mm)
        maximum: f64,
    },
}

impl std::fmt::Display for RampWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RampWarning::HoleBelowRecommendedMinimum {
                hole_diameter,
                minimum,
            } => write!(
                f,
                "Hole diameter {hole_diameter:.1} mm is below the recommended minimum {minimum:.1} mm"
            ),
            RampWarning::WidthBelowRecommended { width, minimum } => write!(
                f,
                "Cutting width {width:.1} mm is below the recommended minimum {minimum:.1} mm"
            ),
            RampWarning::WidthAboveRecommended { width, maximum } => write!(
                f,
                "Cutting width {width:.1} mm is above the recommended maximum {maximum:.1} mm"
            ),
        }
    }
}

/// Strategy-specific derived quantities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RampDetail {
    /// Internal helical derived values
    Internal {
        /// Radial travel ΔR = (Dm - Dc)/2 (mm)
        delta_r: f64,
        /// Hole diameter over tool diameter
        diameter_ratio: f64,
        /// Recommended minimum hole diameter, 1.2 x Dc (mm)
        min_hole_diameter: f64,
    },
    /// External helical derived values
    External {
        /// Radial cutting width per revolution (mm)
        width: f64,
        /// Recommended width band for the tool diameter (mm)
        recommended_width: (f64, f64),
    },
    /// Linear ramp derived values
    Ramp {
        /// Length of the slanted path, sqrt(L^2 + d^2) (mm)
        actual_length: f64,
    },
}

/// Result of a ramp angle calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RampResult {
    /// Ramp angle in degrees
    pub angle_deg: f64,
    /// Safety classification of the angle
    pub safety: SafetyTier,
    /// Operator advisory for the classification
    pub advisory: String,
    /// Strategy-specific derived quantities
    pub detail: RampDetail,
    /// Range warnings that do not abort the calculation
    pub warnings: Vec<RampWarning>,
}

impl RampStrategy {
    /// Compute the ramp angle and classify it
    pub fn compute(&self) -> Result<RampResult> {
        match *self {
            RampStrategy::InternalHelical {
                tool_diameter,
                depth,
                hole_diameter,
            } => {
                let tool_diameter = require_positive("tool_diameter", tool_diameter)?;
                let depth = require_positive("depth", depth)?;
                let hole_diameter = require_positive("hole_diameter", hole_diameter)?;

                if hole_diameter <= tool_diameter {
                    return Err(CalcError::constraint(format!(
                        "hole diameter ({hole_diameter} mm) must exceed tool diameter \
                         ({tool_diameter} mm) for helical interpolation"
                    )));
                }

                let delta_r = (hole_diameter - tool_diameter) / 2.0;
                let angle_deg = (depth / delta_r).atan().to_degrees();

                let min_hole_diameter = tool_diameter * MIN_HOLE_DIAMETER_FACTOR;
                let mut warnings = Vec::new();
                if hole_diameter < min_hole_diameter {
                    warnings.push(RampWarning::HoleBelowRecommendedMinimum {
                        hole_diameter,
                        minimum: min_hole_diameter,
                    });
                }

                let (safety, advisory) = classify(angle_deg, &INTERNAL_HELICAL_BANDS);
                debug!(angle_deg, %safety, "internal helical ramp computed");
                Ok(RampResult {
                    angle_deg,
                    safety,
                    advisory: advisory.to_string(),
                    detail: RampDetail::Internal {
                        delta_r,
                        diameter_ratio: hole_diameter / tool_diameter,
                        min_hole_diameter,
                    },
                    warnings,
                })
            }

            RampStrategy::ExternalHelical {
                tool_diameter,
                depth,
                boss_diameter,
                width,
            } => {
                let tool_diameter = require_positive("tool_diameter", tool_diameter)?;
                let depth = require_positive("depth", depth)?;
                require_positive("boss_diameter", boss_diameter)?;
                let width = require_positive("width", width)?;

                // The angle depends only on depth and width; the tool
                // diameter just sets the recommended width band.
                let angle_deg = (depth / width).atan().to_degrees();

                let recommended_width = (
                    tool_diameter * EXTERNAL_WIDTH_BAND.0,
                    tool_diameter * EXTERNAL_WIDTH_BAND.1,
                );
                let mut warnings = Vec::new();
                if width < recommended_width.0 {
                    warnings.push(RampWarning::WidthBelowRecommended {
                        width,
                        minimum: recommended_width.0,
                    });
                } else if width > recommended_width.1 {
                    warnings.push(RampWarning::WidthAboveRecommended {
                        width,
                        maximum: recommended_width.1,
                    });
                }

                let (safety, advisory) = classify(angle_deg, &EXTERNAL_HELICAL_BANDS);
                debug!(angle_deg, %safety, "external helical ramp computed");
                Ok(RampResult {
                    angle_deg,
                    safety,
                    advisory: advisory.to_string(),
                    detail: RampDetail::External {
                        width,
                        recommended_width,
                    },
                    warnings,
                })
            }

            RampStrategy::Ramp { depth, length } => {
                let depth = require_positive("depth", depth)?;
                let length = require_positive("length", length)?;

                let angle_deg = (depth / length).atan().to_degrees();
                let actual_length = (length * length + depth * depth).sqrt();

                let (safety, advisory) = classify(angle_deg, &RAMP_BANDS);
                debug!(angle_deg, %safety, "linear ramp computed");
                Ok(RampResult {
                    angle_deg,
                    safety,
                    advisory: advisory.to_string(),
                    detail: RampDetail::Ramp { actual_length },
                    warnings: Vec::new(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_helical_worked_example() {
        let result = RampStrategy::InternalHelical {
            tool_diameter: 10.0,
            depth: 20.0,
            hole_diameter: 60.0,
        }
        .compute()
        .unwrap();

        // dR = 25, phi = atan(20/25) = 38.66 degrees
        assert!((result.angle_deg - 38.6598).abs() < 0.001);
        assert_eq!(result.safety, SafetyTier::Caution);
        assert!(result.warnings.is_empty());
        match result.detail {
            RampDetail::Internal {
                delta_r,
                diameter_ratio,
                min_hole_diameter,
            } => {
                assert_eq!(delta_r, 25.0);
                assert_eq!(diameter_ratio, 6.0);
                assert_eq!(min_hole_diameter, 12.0);
            }
            other => panic!("expected internal detail, got {other:?}"),
        }
    }

    #[test]
    fn test_internal_helical_rejects_hole_at_or_below_tool() {
        for hole in [10.0, 8.0] {
            let err = RampStrategy::InternalHelical {
                tool_diameter: 10.0,
                depth: 5.0,
                hole_diameter: hole,
            }
            .compute()
            .unwrap_err();
            assert!(err.is_constraint_violation(), "hole {hole}");
        }
    }

    #[test]
    fn test_internal_helical_small_hole_warning() {
        let result = RampStrategy::InternalHelical {
            tool_diameter: 10.0,
            depth: 1.0,
            hole_diameter: 11.0,
        }
        .compute()
        .unwrap();
        assert_eq!(
            result.warnings,
            vec![RampWarning::HoleBelowRecommendedMinimum {
                hole_diameter: 11.0,
                minimum: 12.0,
            }]
        );
    }

    #[test]
    fn test_external_helical_width_band() {
        let base = |width| RampStrategy::ExternalHelical {
            tool_diameter: 10.0,
            depth: 4.0,
            boss_diameter: 60.0,
            width,
        };

        assert!(base(6.0).compute().unwrap().warnings.is_empty());
        assert_eq!(
            base(3.0).compute().unwrap().warnings,
            vec![RampWarning::WidthBelowRecommended {
                width: 3.0,
                minimum: 5.0
            }]
        );
        assert_eq!(
            base(9.0).compute().unwrap().warnings,
            vec![RampWarning::WidthAboveRecommended {
                width: 9.0,
                maximum: 8.0
            }]
        );
    }

    #[test]
    fn test_external_angle_ignores_tool_diameter() {
        let a = RampStrategy::ExternalHelical {
            tool_diameter: 10.0,
            depth: 4.0,
            boss_diameter: 60.0,
            width: 6.0,
        }
        .compute()
        .unwrap();
        let b = RampStrategy::ExternalHelical {
            tool_diameter: 12.0,
            depth: 4.0,
            boss_diameter: 80.0,
            width: 6.0,
        }
        .compute()
        .unwrap();
        assert_eq!(a.angle_deg, b.angle_deg);
    }

    #[test]
    fn test_linear_ramp_worked_example() {
        let result = RampStrategy::Ramp {
            depth: 10.0,
            length: 50.0,
        }
        .compute()
        .unwrap();

        assert!((result.angle_deg - 11.3099).abs() < 0.001);
        assert_eq!(result.safety, SafetyTier::Caution);
        match result.detail {
            RampDetail::Ramp { actual_length } => {
                assert!((actual_length - 50.9902).abs() < 0.001);
            }
            other => panic!("expected ramp detail, got {other:?}"),
        }
    }

    #[test]
    fn test_ramp_rejects_non_positive_length() {
        let err = RampStrategy::Ramp {
            depth: 10.0,
            length: 0.0,
        }
        .compute()
        .unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_tables_are_not_shared() {
        // 10 degrees sits in different tiers per strategy
        let internal = RampStrategy::InternalHelical {
            tool_diameter: 10.0,
            depth: 4.40, // atan(4.40/25) = 9.98 deg
            hole_diameter: 60.0,
        }
        .compute()
        .unwrap();
        let external = RampStrategy::ExternalHelical {
            tool_diameter: 10.0,
            depth: 1.0, // atan(1/6) = 9.46 deg
            boss_diameter: 60.0,
            width: 6.0,
        }
        .compute()
        .unwrap();
        let ramp = RampStrategy::Ramp {
            depth: 1.0, // atan(1/6) = 9.46 deg
            length: 6.0,
        }
        .compute()
        .unwrap();

        assert_eq!(internal.safety, SafetyTier::Shallow);
        assert_eq!(external.safety, SafetyTier::Safe);
        assert_eq!(ramp.safety, SafetyTier::Caution);
    }

    #[test]
    fn test_ramp_band_boundaries() {
        // Boundary angles belong to the higher band
        let at = |angle_deg: f64| classify(angle_deg, &RAMP_BANDS).0;
        assert_eq!(at(2.99), SafetyTier::TooShallow);
        assert_eq!(at(3.0), SafetyTier::Safe);
        assert_eq!(at(8.0), SafetyTier::Caution);
        assert_eq!(at(15.0), SafetyTier::Dangerous);
        assert_eq!(at(20.0), SafetyTier::Critical);
        assert_eq!(at(89.0), SafetyTier::Critical);
    }
}
