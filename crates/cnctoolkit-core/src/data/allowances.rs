//! Stock allowance reference grid
//!
//! Recommended per-side stock allowances for roughing and semi-finishing,
//! by workpiece material and machined feature type, together with the tool
//! a toolroom would normally reach for and process notes. 7 materials x
//! 6 feature types = 42 fixed entries.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::data::materials::WorkpieceMaterial;
use crate::error::{CalcError, Result};

/// Fixed margin left for the final finishing pass, in mm
pub const FINISHING_MARGIN_MM: f64 = 0.1;

/// Machined feature types covered by the allowance grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub enum FeatureType {
    /// Top face milling
    Face,
    /// Pocket or slot floor
    Floor,
    /// Contoured (3D) surface
    Surface,
    /// Vertical wall
    Wall,
    /// Enclosed pocket
    Pocket,
    /// Drilled or milled hole
    Hole,
}

impl FeatureType {
    /// All feature types, in table order
    pub const ALL: [FeatureType; 6] = [
        FeatureType::Face,
        FeatureType::Floor,
        FeatureType::Surface,
        FeatureType::Wall,
        FeatureType::Pocket,
        FeatureType::Hole,
    ];
}

impl std::fmt::Display for FeatureType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Face => write!(f, "Face"),
            Self::Floor => write!(f, "Floor"),
            Self::Surface => write!(f, "Surface"),
            Self::Wall => write!(f, "Wall"),
            Self::Pocket => write!(f, "Pocket"),
            Self::Hole => write!(f, "Hole"),
        }
    }
}

/// One entry of the stock allowance grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockAllowanceEntry {
    /// Per-side allowance left after roughing, mm
    pub rough: f64,
    /// Per-side allowance left after semi-finishing, mm
    pub semi_finish: f64,
    /// Recommended tool for the operation
    pub recommended_tool: String,
    /// Process notes for the material/feature combination
    pub notes: String,
}

impl StockAllowanceEntry {
    /// Total stock to leave on the blank: roughing + semi-finishing
    /// allowances plus the fixed finishing margin
    pub fn total_allowance(&self) -> f64 {
        self.rough + self.semi_finish + FINISHING_MARGIN_MM
    }
}

/// Raw grid rows: material, feature, rough, semi-finish, tool, notes
///
/// Allowances are per side in mm.
#[rustfmt::skip]
const ALLOWANCE_ROWS: &[(WorkpieceMaterial, FeatureType, f64, f64, &str, &str)] = &[
    // Aluminum: gummy, prone to built-up edge
    (WorkpieceMaterial::Aluminum, FeatureType::Face,    0.50, 0.30, "3-flute aluminum face mill (>50 mm dia)", "Clamp securely to avoid chatter; prone to built-up edge, watch chip evacuation"),
    (WorkpieceMaterial::Aluminum, FeatureType::Floor,   0.40, 0.25, "3-flute aluminum flat end mill",          "Watch tool overhang to prevent gouging; prone to built-up edge, watch chip evacuation"),
    (WorkpieceMaterial::Aluminum, FeatureType::Surface, 0.60, 0.40, "2-flute ball nose (R1-R6)",               "Use a small stepover and watch scallop height; prone to built-up edge, watch chip evacuation"),
    (WorkpieceMaterial::Aluminum, FeatureType::Wall,    0.40, 0.25, "3-flute aluminum flat end mill",          "Watch tool deflection and check wall squareness; prone to built-up edge, watch chip evacuation"),
    (WorkpieceMaterial::Aluminum, FeatureType::Pocket,  0.50, 0.30, "3-flute aluminum flat end mill",          "Machine in layers and clean up corners; prone to built-up edge, watch chip evacuation"),
    (WorkpieceMaterial::Aluminum, FeatureType::Hole,    0.25, 0.15, "center drill + helical milling cutter",   "Spot drill first and watch chip evacuation; prone to built-up edge, watch chip evacuation"),
    // Stainless steel: work hardens under light rubbing cuts
    (WorkpieceMaterial::StainlessSteel, FeatureType::Face,    0.75, 0.50, "4-flute coated face mill",     "Clamp securely to avoid chatter; work hardens, keep depth of cut small"),
    (WorkpieceMaterial::StainlessSteel, FeatureType::Floor,   0.60, 0.40, "4-flute coated flat end mill", "Watch tool overhang to prevent gouging; work hardens, keep depth of cut small"),
    (WorkpieceMaterial::StainlessSteel, FeatureType::Surface, 1.00, 0.80, "2-flute coated ball nose",     "Use a small stepover and watch scallop height; work hardens, keep depth of cut small"),
    (WorkpieceMaterial::StainlessSteel, FeatureType::Wall,    0.60, 0.40, "4-flute coated flat end mill", "Watch tool deflection and check wall squareness; work hardens, keep depth of cut small"),
    (WorkpieceMaterial::StainlessSteel, FeatureType::Pocket,  0.75, 0.50, "4-flute coated flat end mill", "Machine in layers and clean up corners; work hardens, keep depth of cut small"),
    (WorkpieceMaterial::StainlessSteel, FeatureType::Hole,    0.40, 0.25, "center drill + drill + reamer", "Spot drill first and watch chip evacuation; work hardens, keep depth of cut small"),
    // Mold steel
    (WorkpieceMaterial::MoldSteel, FeatureType::Face,    0.60, 0.40, "4-flute coated face mill",      "Clamp securely to avoid chatter"),
    (WorkpieceMaterial::MoldSteel, FeatureType::Floor,   0.50, 0.30, "4-flute coated flat end mill",  "Watch tool overhang to prevent gouging"),
    (WorkpieceMaterial::MoldSteel, FeatureType::Surface, 0.75, 0.60, "2-flute coated ball nose",      "Use a small stepover and watch scallop height"),
    (WorkpieceMaterial::MoldSteel, FeatureType::Wall,    0.50, 0.30, "4-flute coated flat end mill",  "Watch tool deflection and check wall squareness"),
    (WorkpieceMaterial::MoldSteel, FeatureType::Pocket,  0.60, 0.40, "4-flute coated flat end mill",  "Machine in layers and clean up corners"),
    (WorkpieceMaterial::MoldSteel, FeatureType::Hole,    0.30, 0.20, "center drill + drill + EDM",    "Spot drill first and watch chip evacuation"),
    // Carbon steel
    (WorkpieceMaterial::CarbonSteel, FeatureType::Face,    0.50, 0.35, "4-flute coated face mill",     "Clamp securely to avoid chatter"),
    (WorkpieceMaterial::CarbonSteel, FeatureType::Floor,   0.40, 0.25, "4-flute coated flat end mill", "Watch tool overhang to prevent gouging"),
    (WorkpieceMaterial::CarbonSteel, FeatureType::Surface, 0.65, 0.50, "2-flute coated ball nose",     "Use a small stepover and watch scallop height"),
    (WorkpieceMaterial::CarbonSteel, FeatureType::Wall,    0.40, 0.25, "4-flute coated flat end mill", "Watch tool deflection and check wall squareness"),
    (WorkpieceMaterial::CarbonSteel, FeatureType::Pocket,  0.50, 0.35, "4-flute coated flat end mill", "Machine in layers and clean up corners"),
    (WorkpieceMaterial::CarbonSteel, FeatureType::Hole,    0.25, 0.18, "center drill + twist drill",   "Spot drill first and watch chip evacuation"),
    // Copper alloy
    (WorkpieceMaterial::CopperAlloy, FeatureType::Face,    0.40, 0.25, "3-flute copper face mill",     "Clamp securely to avoid chatter"),
    (WorkpieceMaterial::CopperAlloy, FeatureType::Floor,   0.30, 0.20, "3-flute copper flat end mill", "Watch tool overhang to prevent gouging"),
    (WorkpieceMaterial::CopperAlloy, FeatureType::Surface, 0.50, 0.35, "2-flute copper ball nose",     "Use a small stepover and watch scallop height"),
    (WorkpieceMaterial::CopperAlloy, FeatureType::Wall,    0.30, 0.20, "3-flute copper flat end mill", "Watch tool deflection and check wall squareness"),
    (WorkpieceMaterial::CopperAlloy, FeatureType::Pocket,  0.40, 0.25, "3-flute copper flat end mill", "Machine in layers and clean up corners"),
    (WorkpieceMaterial::CopperAlloy, FeatureType::Hole,    0.20, 0.12, "center drill + twist drill",   "Spot drill first and watch chip evacuation"),
    // Titanium alloy: heat stays in the cut
    (WorkpieceMaterial::TitaniumAlloy, FeatureType::Face,    1.00, 0.80, "3-flute titanium face mill",     "Clamp securely to avoid chatter; poor heat dissipation, use low spindle speed"),
    (WorkpieceMaterial::TitaniumAlloy, FeatureType::Floor,   0.75, 0.60, "3-flute titanium flat end mill", "Watch tool overhang to prevent gouging; poor heat dissipation, use low spindle speed"),
    (WorkpieceMaterial::TitaniumAlloy, FeatureType::Surface, 1.25, 1.00, "2-flute titanium ball nose",     "Use a small stepover and watch scallop height; poor heat dissipation, use low spindle speed"),
    (WorkpieceMaterial::TitaniumAlloy, FeatureType::Wall,    0.75, 0.60, "3-flute titanium flat end mill", "Watch tool deflection and check wall squareness; poor heat dissipation, use low spindle speed"),
    (WorkpieceMaterial::TitaniumAlloy, FeatureType::Pocket,  1.00, 0.80, "3-flute titanium flat end mill", "Machine in layers and clean up corners; poor heat dissipation, use low spindle speed"),
    (WorkpieceMaterial::TitaniumAlloy, FeatureType::Hole,    0.50, 0.30, "center drill + titanium drill",  "Spot drill first and watch chip evacuation; poor heat dissipation, use low spindle speed"),
    // Plastic: distorts under clamping and heat
    (WorkpieceMaterial::Plastic, FeatureType::Face,    0.25, 0.15, "2-flute plastics face mill",     "Clamp securely to avoid chatter; deforms easily, machine with air cooling"),
    (WorkpieceMaterial::Plastic, FeatureType::Floor,   0.20, 0.10, "2-flute plastics flat end mill", "Watch tool overhang to prevent gouging; deforms easily, machine with air cooling"),
    (WorkpieceMaterial::Plastic, FeatureType::Surface, 0.40, 0.25, "2-flute plastics ball nose",     "Use a small stepover and watch scallop height; deforms easily, machine with air cooling"),
    (WorkpieceMaterial::Plastic, FeatureType::Wall,    0.20, 0.10, "2-flute plastics flat end mill", "Watch tool deflection and check wall squareness; deforms easily, machine with air cooling"),
    (WorkpieceMaterial::Plastic, FeatureType::Pocket,  0.25, 0.15, "2-flute plastics flat end mill", "Machine in layers and clean up corners; deforms easily, machine with air cooling"),
    (WorkpieceMaterial::Plastic, FeatureType::Hole,    0.15, 0.08, "center drill + plastics drill",  "Spot drill first and watch chip evacuation; deforms easily, machine with air cooling"),
];

/// Static stock allowance grid keyed by (material, feature type)
#[derive(Debug, Clone)]
pub struct StockAllowanceTable {
    entries: HashMap<(WorkpieceMaterial, FeatureType), StockAllowanceEntry>,
}

impl StockAllowanceTable {
    /// Build the standard allowance grid
    ///
    /// Call once at startup; the table is read-only afterwards.
    pub fn standard() -> Self {
        let mut entries = HashMap::new();
        for &(material, feature, rough, semi_finish, tool, notes) in ALLOWANCE_ROWS {
            entries.insert(
                (material, feature),
                StockAllowanceEntry {
                    rough,
                    semi_finish,
                    recommended_tool: tool.to_string(),
                    notes: notes.to_string(),
                },
            );
        }
        Self { entries }
    }

    /// Look up the allowance entry for a material/feature pair
    ///
    /// The grid is closed over both enums, so a miss indicates a programming
    /// error rather than bad user input; the contract still reports it as a
    /// tagged error instead of panicking.
    pub fn lookup(
        &self,
        material: WorkpieceMaterial,
        feature: FeatureType,
    ) -> Result<&StockAllowanceEntry> {
        self.entries
            .get(&(material, feature))
            .ok_or_else(|| CalcError::AllowanceNotFound {
                material: material.to_string(),
                feature: feature.to_string(),
            })
    }

    /// Number of entries in the grid
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the grid is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for StockAllowanceTable {
    fn default() -> Self {
        Self::standard()
    }
}
