//! Stock allowance lookup
//!
//! Thin query layer over the standard allowance grid: resolves a
//! material/feature pair into the per-side allowances, the total stock to
//! leave on the blank, and the toolroom's recommended tool and notes.

use serde::{Deserialize, Serialize};
use tracing::debug;

use cnctoolkit_core::{FeatureType, Result, StockAllowanceTable, WorkpieceMaterial};

/// Resolved stock allowance recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockAllowanceResult {
    /// Workpiece material the entry was resolved for
    pub material: WorkpieceMaterial,
    /// Feature type the entry was resolved for
    pub feature: FeatureType,
    /// Per-side allowance left after roughing (mm)
    pub rough: f64,
    /// Per-side allowance left after semi-finishing (mm)
    pub semi_finish: f64,
    /// Total stock to leave on the blank, including the finishing margin (mm)
    pub total_allowance: f64,
    /// Recommended tool for the operation
    pub recommended_tool: String,
    /// Process notes for the combination
    pub notes: String,
}

/// Stock allowance lookup backed by the standard grid
pub struct StockAllowanceLookup {
    table: StockAllowanceTable,
}

impl StockAllowanceLookup {
    /// Create a lookup backed by the standard grid
    pub fn new() -> Self {
        Self {
            table: StockAllowanceTable::standard(),
        }
    }

    /// Resolve the allowance recommendation for a material/feature pair
    pub fn lookup(
        &self,
        material: WorkpieceMaterial,
        feature: FeatureType,
    ) -> Result<StockAllowanceResult> {
        let entry = self.table.lookup(material, feature)?;
        debug!(%material, %feature, "stock allowance resolved");
        Ok(StockAllowanceResult {
            material,
            feature,
            rough: entry.rough,
            semi_finish: entry.semi_finish,
            total_allowance: entry.total_allowance(),
            recommended_tool: entry.recommended_tool.clone(),
            notes: entry.notes.clone(),
        })
    }
}

impl Default for StockAllowanceLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_carbon_steel_wall() {
        let lookup = StockAllowanceLookup::new();
        let result = lookup
            .lookup(WorkpieceMaterial::CarbonSteel, FeatureType::Wall)
            .unwrap();

        assert_eq!(result.rough, 0.4);
        assert_eq!(result.semi_finish, 0.25);
        assert!((result.total_allowance - 0.75).abs() < 1e-12);
        assert!(result.recommended_tool.contains("flat end mill"));
    }

    #[test]
    fn test_lookup_covers_every_pair() {
        let lookup = StockAllowanceLookup::new();
        for material in WorkpieceMaterial::ALL {
            for feature in FeatureType::ALL {
                let result = lookup.lookup(material, feature).unwrap();
                assert!(result.total_allowance > result.rough);
                assert_eq!(result.material, material);
                assert_eq!(result.feature, feature);
            }
        }
    }
}
