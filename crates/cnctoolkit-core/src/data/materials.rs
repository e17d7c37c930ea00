//! Workpiece material cutting profiles
//!
//! This module provides:
//! - The fixed set of workpiece materials the toolkit knows about
//! - Cutting-speed and feed-per-tooth ranges per material
//! - The static profile table, built once at startup and read-only after

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Workpiece materials supported by the cutting tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub enum WorkpieceMaterial {
    /// Aluminum alloys
    Aluminum,
    /// Austenitic stainless steels
    StainlessSteel,
    /// Pre-hardened mold and die steels
    MoldSteel,
    /// Plain carbon steels
    CarbonSteel,
    /// Copper and brass alloys
    CopperAlloy,
    /// Titanium alloys
    TitaniumAlloy,
    /// Engineering plastics
    Plastic,
}

impl WorkpieceMaterial {
    /// All supported materials, in table order
    pub const ALL: [WorkpieceMaterial; 7] = [
        WorkpieceMaterial::Aluminum,
        WorkpieceMaterial::StainlessSteel,
        WorkpieceMaterial::MoldSteel,
        WorkpieceMaterial::CarbonSteel,
        WorkpieceMaterial::CopperAlloy,
        WorkpieceMaterial::TitaniumAlloy,
        WorkpieceMaterial::Plastic,
    ];
}

impl std::fmt::Display for WorkpieceMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Aluminum => write!(f, "Aluminum"),
            Self::StainlessSteel => write!(f, "Stainless Steel"),
            Self::MoldSteel => write!(f, "Mold Steel"),
            Self::CarbonSteel => write!(f, "Carbon Steel"),
            Self::CopperAlloy => write!(f, "Copper Alloy"),
            Self::TitaniumAlloy => write!(f, "Titanium Alloy"),
            Self::Plastic => write!(f, "Plastic"),
        }
    }
}

/// Cutting data for one workpiece material
///
/// Ranges are (min, max) pairs: cutting speed in m/min, feed per tooth in
/// mm/tooth for roughing and finishing passes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialCuttingProfile {
    /// Cutting speed range VC in m/min
    pub vc_range: (f64, f64),
    /// Feed per tooth range for roughing, mm/tooth
    pub fz_rough: (f64, f64),
    /// Feed per tooth range for finishing, mm/tooth
    pub fz_finish: (f64, f64),
}

/// Static table of cutting profiles, one per workpiece material
#[derive(Debug, Clone)]
pub struct CuttingProfileTable {
    profiles: HashMap<WorkpieceMaterial, MaterialCuttingProfile>,
}

impl CuttingProfileTable {
    /// Build the standard profile table
    ///
    /// Call once at startup; the table is read-only afterwards.
    pub fn standard() -> Self {
        use WorkpieceMaterial::*;

        let mut profiles = HashMap::new();

        profiles.insert(
            Aluminum,
            MaterialCuttingProfile {
                vc_range: (500.0, 1000.0),
                fz_rough: (0.10, 0.30),
                fz_finish: (0.05, 0.15),
            },
        );
        profiles.insert(
            StainlessSteel,
            MaterialCuttingProfile {
                vc_range: (100.0, 200.0),
                fz_rough: (0.05, 0.20),
                fz_finish: (0.03, 0.10),
            },
        );
        profiles.insert(
            MoldSteel,
            MaterialCuttingProfile {
                vc_range: (80.0, 150.0),
                fz_rough: (0.05, 0.15),
                fz_finish: (0.03, 0.10),
            },
        );
        profiles.insert(
            CarbonSteel,
            MaterialCuttingProfile {
                vc_range: (150.0, 300.0),
                fz_rough: (0.10, 0.30),
                fz_finish: (0.05, 0.15),
            },
        );
        profiles.insert(
            CopperAlloy,
            MaterialCuttingProfile {
                vc_range: (150.0, 250.0),
                fz_rough: (0.10, 0.25),
                fz_finish: (0.05, 0.15),
            },
        );
        profiles.insert(
            TitaniumAlloy,
            MaterialCuttingProfile {
                vc_range: (50.0, 100.0),
                fz_rough: (0.05, 0.15),
                fz_finish: (0.03, 0.10),
            },
        );
        profiles.insert(
            Plastic,
            MaterialCuttingProfile {
                vc_range: (200.0, 500.0),
                fz_rough: (0.10, 0.30),
                fz_finish: (0.05, 0.20),
            },
        );

        Self { profiles }
    }

    /// Get the cutting profile for a material
    pub fn get(&self, material: WorkpieceMaterial) -> MaterialCuttingProfile {
        // The table carries one entry per enum value, so the lookup cannot miss.
        self.profiles[&material]
    }

    /// Number of materials in the table
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl Default for CuttingProfileTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_all_materials() {
        let table = CuttingProfileTable::standard();
        assert_eq!(table.len(), WorkpieceMaterial::ALL.len());
        for material in WorkpieceMaterial::ALL {
            let profile = table.get(material);
            assert!(
                profile.vc_range.0 < profile.vc_range.1,
                "{material} VC range must be ordered"
            );
        }
    }

    #[test]
    fn test_ranges_are_ordered() {
        let table = CuttingProfileTable::standard();
        for material in WorkpieceMaterial::ALL {
            let p = table.get(material);
            assert!(p.fz_rough.0 <= p.fz_rough.1);
            assert!(p.fz_finish.0 <= p.fz_finish.1);
            // Finishing feeds never exceed roughing feeds
            assert!(p.fz_finish.1 <= p.fz_rough.1, "{material}");
        }
    }

    #[test]
    fn test_aluminum_profile_values() {
        let table = CuttingProfileTable::standard();
        let p = table.get(WorkpieceMaterial::Aluminum);
        assert_eq!(p.vc_range, (500.0, 1000.0));
        assert_eq!(p.fz_rough, (0.10, 0.30));
        assert_eq!(p.fz_finish, (0.05, 0.15));
    }

    #[test]
    fn test_titanium_is_slowest() {
        let table = CuttingProfileTable::standard();
        let ti = table.get(WorkpieceMaterial::TitaniumAlloy);
        for material in WorkpieceMaterial::ALL {
            let p = table.get(material);
            assert!(p.vc_range.1 >= ti.vc_range.1, "{material}");
        }
    }
}
