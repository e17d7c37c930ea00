//! # CNCToolkit Core
//!
//! Error taxonomy and static machining reference data for CNCToolkit.
//! Provides the workpiece material and feature enums, the cutting profile,
//! reference stepover, and stock allowance tables, and the `CalcError`
//! type shared by every calculator.

pub mod data;
pub mod error;

pub use data::{
    CuttingProfileTable, FeatureType, MaterialCuttingProfile, ReferenceStepoverTable,
    StockAllowanceEntry, StockAllowanceTable, WorkpieceMaterial, FINISHING_MARGIN_MM,
};

pub use error::{require_positive, CalcError, Result};
