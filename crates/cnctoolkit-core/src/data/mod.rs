//! Static machining reference data
//!
//! All tables are process-wide constant data: build them once at startup
//! with their `standard()` constructors and share them read-only.

pub mod allowances;
pub mod materials;
pub mod stepover;

pub use allowances::{
    FeatureType, StockAllowanceEntry, StockAllowanceTable, FINISHING_MARGIN_MM,
};
pub use materials::{CuttingProfileTable, MaterialCuttingProfile, WorkpieceMaterial};
pub use stepover::ReferenceStepoverTable;
