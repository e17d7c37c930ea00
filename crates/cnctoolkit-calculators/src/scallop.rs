//! Ball-nose scallop (cusp) height calculator
//!
//! Computes the residual cusp left between adjacent ball-nose passes from
//! the programmed stepover, classifies the resulting surface quality, and
//! compares against the reference stepover a toolroom chart recommends for
//! the same diameter.

use serde::{Deserialize, Serialize};

use cnctoolkit_core::{CalcError, ReferenceStepoverTable, Result};

/// Surface quality tiers by cusp height
///
/// Thresholds are in micrometres; each boundary value belongs to the
/// coarser tier.
const QUALITY_TIERS: [(f64, SurfaceQuality); 3] = [
    (10.0, SurfaceQuality::Fine),
    (20.0, SurfaceQuality::Good),
    (30.0, SurfaceQuality::Fair),
];

/// Surface quality classification from cusp height
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurfaceQuality {
    /// Below 10 µm: finishing quality
    Fine,
    /// 10-20 µm: semi-finishing quality
    Good,
    /// 20-30 µm: roughing quality
    Fair,
    /// 30 µm and above: rough surface, reduce the stepover
    Coarse,
}

impl SurfaceQuality {
    /// Classify a cusp height given in micrometres
    pub fn from_cusp_height_um(height_um: f64) -> Self {
        for (limit, quality) in QUALITY_TIERS {
            if height_um < limit {
                return quality;
            }
        }
        SurfaceQuality::Coarse
    }

    /// Shop-floor reading of the tier
    pub fn description(self) -> &'static str {
        match self {
            SurfaceQuality::Fine => "finishing quality",
            SurfaceQuality::Good => "semi-finishing quality",
            SurfaceQuality::Fair => "roughing quality",
            SurfaceQuality::Coarse => "rough surface, reduce the stepover",
        }
    }
}

impl std::fmt::Display for SurfaceQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SurfaceQuality::Fine => write!(f, "Fine"),
            SurfaceQuality::Good => write!(f, "Good"),
            SurfaceQuality::Fair => write!(f, "Fair"),
            SurfaceQuality::Coarse => write!(f, "Coarse"),
        }
    }
}

/// Result of a scallop height calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScallopResult {
    /// Cusp height (mm)
    pub cusp_height: f64,
    /// Cusp height (µm)
    pub cusp_height_um: f64,
    /// Surface quality tier for the cusp height
    pub quality: SurfaceQuality,
    /// Reference stepover from the standard table (mm); 0 when unusable
    pub reference_stepover: f64,
    /// Cusp height the reference stepover would leave (mm); 0 when unusable
    pub reference_height: f64,
    /// Absolute difference between actual and reference cusp height (mm)
    pub delta: f64,
    /// The stepover reached the ball radius; cusp equals the radius
    pub step_too_large: bool,
}

/// Ball-nose scallop height calculator
pub struct ScallopHeightCalculator {
    stepovers: ReferenceStepoverTable,
}

impl ScallopHeightCalculator {
    /// Create a calculator backed by the standard stepover table
    pub fn new() -> Self {
        Self {
            stepovers: ReferenceStepoverTable::standard(),
        }
    }

    /// Reference stepover for a ball-nose diameter, if the diameter is valid
    pub fn reference_stepover(&self, diameter: f64) -> Option<f64> {
        self.stepovers.reference_stepover(diameter)
    }

    /// Compute the cusp height for a diameter/stepover pair
    ///
    /// Requires `0 < stepover < diameter`; the stepover bound is a
    /// constraint violation rather than a field error because both values
    /// can be individually well-formed.
    pub fn compute_cusp_height(&self, diameter: f64, stepover: f64) -> Result<ScallopResult> {
        if !diameter.is_finite() || diameter <= 0.0 {
            return Err(CalcError::invalid_input("diameter", diameter));
        }
        if !stepover.is_finite() || stepover <= 0.0 || stepover >= diameter {
            return Err(CalcError::constraint(format!(
                "stepover must satisfy 0 < P < D (P = {stepover} mm, D = {diameter} mm)"
            )));
        }

        let radius = diameter / 2.0;

        // At the floating-point boundary P/2 can reach R even with P < D.
        let step_too_large = stepover / 2.0 >= radius;
        let cusp_height = if step_too_large {
            radius
        } else {
            cusp(radius, stepover)
        };

        let (reference_stepover, reference_height) =
            match self.stepovers.reference_stepover(diameter) {
                Some(reference) if reference > 0.0 && reference < diameter => {
                    (reference, cusp(radius, reference))
                }
                _ => (0.0, 0.0),
            };

        let cusp_height_um = cusp_height * 1000.0;
        Ok(ScallopResult {
            cusp_height,
            cusp_height_um,
            quality: SurfaceQuality::from_cusp_height_um(cusp_height_um),
            reference_stepover,
            reference_height,
            delta: (cusp_height - reference_height).abs(),
            step_too_large,
        })
    }
}

impl Default for ScallopHeightCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Cusp height for a ball radius and stepover
///
/// The `max(0, ..)` guards floating-point underflow when the half-stepover
/// approaches the radius.
fn cusp(radius: f64, stepover: f64) -> f64 {
    let half = stepover / 2.0;
    radius - (radius * radius - half * half).max(0.0).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worked_example() {
        let calc = ScallopHeightCalculator::new();
        let result = calc.compute_cusp_height(6.0, 0.3).unwrap();

        // R = 3, h = 3 - sqrt(9 - 0.15^2) = 0.0037523...
        assert!((result.cusp_height - 0.00375).abs() < 1e-4);
        assert!((result.cusp_height_um - 3.75).abs() < 0.01);
        assert_eq!(result.quality, SurfaceQuality::Fine);
        assert_eq!(result.reference_stepover, 0.24);
        assert!(result.reference_height > 0.0);
        assert!(!result.step_too_large);
    }

    #[test]
    fn test_height_bounded_by_radius() {
        let calc = ScallopHeightCalculator::new();
        for stepover in [0.01, 0.5, 2.0, 5.0, 5.99] {
            let result = calc.compute_cusp_height(6.0, stepover).unwrap();
            assert!(result.cusp_height >= 0.0);
            assert!(
                result.cusp_height <= 3.0,
                "cusp {} exceeds radius for stepover {stepover}",
                result.cusp_height
            );
        }
    }

    #[test]
    fn test_monotonic_in_stepover() {
        let calc = ScallopHeightCalculator::new();
        let mut previous = 0.0;
        for i in 1..60 {
            let stepover = i as f64 * 0.1;
            let h = calc.compute_cusp_height(6.0, stepover).unwrap().cusp_height;
            assert!(
                h >= previous,
                "cusp height decreased at stepover {stepover}: {h} < {previous}"
            );
            previous = h;
        }
    }

    #[test]
    fn test_constraint_violations() {
        let calc = ScallopHeightCalculator::new();
        assert!(calc
            .compute_cusp_height(6.0, 6.0)
            .unwrap_err()
            .is_constraint_violation());
        assert!(calc
            .compute_cusp_height(6.0, 7.5)
            .unwrap_err()
            .is_constraint_violation());
        assert!(calc
            .compute_cusp_height(6.0, 0.0)
            .unwrap_err()
            .is_constraint_violation());
        assert!(calc
            .compute_cusp_height(6.0, -0.2)
            .unwrap_err()
            .is_constraint_violation());
    }

    #[test]
    fn test_invalid_diameter() {
        let calc = ScallopHeightCalculator::new();
        assert!(calc
            .compute_cusp_height(0.0, 0.3)
            .unwrap_err()
            .is_invalid_input());
        assert!(calc
            .compute_cusp_height(-6.0, 0.3)
            .unwrap_err()
            .is_invalid_input());
    }

    #[test]
    fn test_quality_tier_boundaries() {
        // Boundary values belong to the coarser tier
        assert_eq!(SurfaceQuality::from_cusp_height_um(9.99), SurfaceQuality::Fine);
        assert_eq!(SurfaceQuality::from_cusp_height_um(10.0), SurfaceQuality::Good);
        assert_eq!(SurfaceQuality::from_cusp_height_um(20.0), SurfaceQuality::Fair);
        assert_eq!(SurfaceQuality::from_cusp_height_um(30.0), SurfaceQuality::Coarse);
        assert_eq!(SurfaceQuality::from_cusp_height_um(120.0), SurfaceQuality::Coarse);
    }

    #[test]
    fn test_idempotent() {
        let calc = ScallopHeightCalculator::new();
        let a = calc.compute_cusp_height(10.0, 0.32).unwrap();
        let b = calc.compute_cusp_height(10.0, 0.32).unwrap();
        assert_eq!(a, b);
    }
}
