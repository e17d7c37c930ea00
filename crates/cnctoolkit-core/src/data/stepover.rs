//! Reference stepover table for ball-nose end mills
//!
//! Maps the standard ball-nose diameters to the stepover a toolroom would
//! normally program for them. Inputs between standard sizes resolve to the
//! nearest listed diameter.

use tracing::debug;

/// Standard ball-nose diameters and their reference stepovers, in mm
///
/// Kept in descending diameter order as published in shop reference charts.
const REFERENCE_STEPOVERS: [(f64, f64); 11] = [
    (16.0, 0.40),
    (12.0, 0.35),
    (10.0, 0.32),
    (8.0, 0.28),
    (6.0, 0.24),
    (5.0, 0.20),
    (4.0, 0.20),
    (3.0, 0.17),
    (2.0, 0.14),
    (1.5, 0.12),
    (1.0, 0.10),
];

/// Static reference stepover table
#[derive(Debug, Clone)]
pub struct ReferenceStepoverTable {
    entries: &'static [(f64, f64)],
}

impl ReferenceStepoverTable {
    /// Build the standard table
    pub fn standard() -> Self {
        Self {
            entries: &REFERENCE_STEPOVERS,
        }
    }

    /// Standard diameters covered by the table, largest first
    pub fn diameters(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|(d, _)| *d)
    }

    /// Reference stepover for a ball-nose diameter, in mm
    ///
    /// Exact matches return the table value. Any other diameter resolves to
    /// the nearest standard diameter by absolute difference; when two
    /// standard diameters are equidistant the smaller one wins. Returns
    /// `None` for non-finite or non-positive diameters.
    pub fn reference_stepover(&self, diameter: f64) -> Option<f64> {
        if !diameter.is_finite() || diameter <= 0.0 {
            return None;
        }

        let mut best: Option<(f64, f64)> = None;
        for &(standard, stepover) in self.entries {
            let diff = (standard - diameter).abs();
            let better = match best {
                None => true,
                Some((best_dia, _)) => {
                    let best_diff = (best_dia - diameter).abs();
                    diff < best_diff || (diff == best_diff && standard < best_dia)
                }
            };
            if better {
                best = Some((standard, stepover));
            }
        }

        let (standard, stepover) = best?;
        if standard != diameter {
            debug!(
                diameter,
                nearest = standard,
                stepover,
                "no exact stepover entry, using nearest standard diameter"
            );
        }
        Some(stepover)
    }
}

impl Default for ReferenceStepoverTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_matches() {
        let table = ReferenceStepoverTable::standard();
        assert_eq!(table.reference_stepover(6.0), Some(0.24));
        assert_eq!(table.reference_stepover(16.0), Some(0.40));
        assert_eq!(table.reference_stepover(1.5), Some(0.12));
        assert_eq!(table.reference_stepover(1.0), Some(0.10));
    }

    #[test]
    fn test_all_standard_diameters_hit_exactly() {
        let table = ReferenceStepoverTable::standard();
        for &(diameter, stepover) in &REFERENCE_STEPOVERS {
            assert_eq!(
                table.reference_stepover(diameter),
                Some(stepover),
                "exact lookup failed for {diameter}"
            );
        }
    }

    #[test]
    fn test_nearest_diameter() {
        let table = ReferenceStepoverTable::standard();
        // 6.4 is closer to 6 than to 5 or 8
        assert_eq!(table.reference_stepover(6.4), Some(0.24));
        // 11.2 is closer to 12 than to 10
        assert_eq!(table.reference_stepover(11.2), Some(0.35));
        // Out-of-range inputs clamp to the end entries
        assert_eq!(table.reference_stepover(25.0), Some(0.40));
        assert_eq!(table.reference_stepover(0.4), Some(0.10));
    }

    #[test]
    fn test_tie_break_prefers_smaller_diameter() {
        let table = ReferenceStepoverTable::standard();
        // 7 is equidistant from 6 and 8; the smaller diameter wins
        assert_eq!(table.reference_stepover(7.0), Some(0.24));
        // 4.5 is equidistant from 4 and 5 (both map to 0.20 anyway)
        assert_eq!(table.reference_stepover(4.5), Some(0.20));
    }

    #[test]
    fn test_rejects_invalid_diameter() {
        let table = ReferenceStepoverTable::standard();
        assert_eq!(table.reference_stepover(0.0), None);
        assert_eq!(table.reference_stepover(-3.0), None);
        assert_eq!(table.reference_stepover(f64::NAN), None);
    }
}
