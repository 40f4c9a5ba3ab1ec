//! Fault-code diagnostics
//!
//! Local catalog of known CAT and Komatsu fault codes plus the analyzer
//! that resolves operator-entered codes against it. Remote analysis is an
//! extension point; see `analyzer`.

pub mod analyzer;

pub use analyzer::{
    DiagnosticsError, DiagnosticsResult, FaultAnalyzer, FaultBackend, FaultReport, ReportSource,
};

use crate::theme::Theme;
use once_cell::sync::Lazy;
use ratatui::style::Color;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Manufacturer a fault code belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EquipmentBrand {
    Caterpillar,
    Komatsu,
}

impl EquipmentBrand {
    pub fn label(&self) -> &'static str {
        match self {
            EquipmentBrand::Caterpillar => "CAT",
            EquipmentBrand::Komatsu => "Komatsu",
        }
    }
}

/// Urgency class of a catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FaultSeverity {
    Minor,
    Warning,
    Critical,
}

impl FaultSeverity {
    pub fn label(&self) -> &'static str {
        match self {
            FaultSeverity::Minor => "Minor",
            FaultSeverity::Warning => "Warning",
            FaultSeverity::Critical => "Critical",
        }
    }

    pub fn color(&self, theme: &Theme) -> Color {
        match self {
            FaultSeverity::Minor => theme.colors.palette.info,
            FaultSeverity::Warning => theme.colors.palette.warning,
            FaultSeverity::Critical => theme.colors.palette.error,
        }
    }
}

/// One catalog record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaultEntry {
    pub code: String,
    pub brand: EquipmentBrand,
    pub problem: String,
    pub severity: FaultSeverity,
    pub action: String,
    /// Estimated repair effort in workshop cost units.
    pub cost_units: u32,
}

/// Built-in fault-code reference
#[derive(Debug, Clone)]
pub struct FaultCatalog {
    entries: Vec<FaultEntry>,
}

impl FaultCatalog {
    /// Catalog seeded with the known CAT and Komatsu codes.
    pub fn builtin() -> Self {
        fn entry(
            code: &str,
            brand: EquipmentBrand,
            problem: &str,
            severity: FaultSeverity,
            action: &str,
            cost_units: u32,
        ) -> FaultEntry {
            FaultEntry {
                code: code.to_string(),
                brand,
                problem: problem.to_string(),
                severity,
                action: action.to_string(),
                cost_units,
            }
        }

        Self {
            entries: vec![
                entry(
                    "EID 0126-3",
                    EquipmentBrand::Caterpillar,
                    "Transmission Oil Filter Plugged",
                    FaultSeverity::Critical,
                    "Replace the transmission oil filter and inspect for metal debris.",
                    5,
                ),
                entry(
                    "70-2",
                    EquipmentBrand::Komatsu,
                    "Fuel Injector Sensor Fault",
                    FaultSeverity::Warning,
                    "Inspect the injector wiring harness and replace the sensor.",
                    10,
                ),
                entry(
                    "E360",
                    EquipmentBrand::Caterpillar,
                    "Low Coolant Level",
                    FaultSeverity::Minor,
                    "Top up coolant and check the radiator for leaks.",
                    2,
                ),
                entry(
                    "1500-0",
                    EquipmentBrand::Komatsu,
                    "High Hydraulic Temperature",
                    FaultSeverity::Critical,
                    "Stop operation, clean the hydraulic oil cooler, check oil level.",
                    8,
                ),
            ],
        }
    }

    /// Exact lookup against a normalized code.
    pub fn lookup(&self, code: &str) -> Option<&FaultEntry> {
        self.entries.iter().find(|entry| entry.code == code)
    }

    pub fn entries(&self) -> &[FaultEntry] {
        &self.entries
    }
}

impl Default for FaultCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Canonical form of an operator-entered code: trimmed, uppercased, interior
/// whitespace collapsed to single spaces.
pub fn normalize_code(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}

/// Recognized fault-code formats, used to hint the brand for unknown codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CodeShape {
    CatEid,
    CatESeries,
    KomatsuNumeric,
    Unknown,
}

impl CodeShape {
    /// Classify a normalized code by its shape.
    pub fn classify(code: &str) -> Self {
        static CAT_EID: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"^EID \d{3,4}-\d{1,2}$").unwrap());
        static CAT_E_SERIES: Lazy<Regex> = Lazy::new(|| Regex::new(r"^E\d{3}$").unwrap());
        static KOMATSU_NUMERIC: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"^\d{2,4}-\d{1,2}$").unwrap());

        if CAT_EID.is_match(code) {
            CodeShape::CatEid
        } else if CAT_E_SERIES.is_match(code) {
            CodeShape::CatESeries
        } else if KOMATSU_NUMERIC.is_match(code) {
            CodeShape::KomatsuNumeric
        } else {
            CodeShape::Unknown
        }
    }

    pub fn brand_hint(&self) -> Option<EquipmentBrand> {
        match self {
            CodeShape::CatEid | CodeShape::CatESeries => Some(EquipmentBrand::Caterpillar),
            CodeShape::KomatsuNumeric => Some(EquipmentBrand::Komatsu),
            CodeShape::Unknown => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_code_canonical_form() {
        assert_eq!(normalize_code("  eid  0126-3 "), "EID 0126-3");
        assert_eq!(normalize_code("e360"), "E360");
        assert_eq!(normalize_code("70-2"), "70-2");
        assert_eq!(normalize_code(""), "");
    }

    #[test]
    fn test_builtin_catalog_lookup() {
        let catalog = FaultCatalog::builtin();
        let entry = catalog.lookup("EID 0126-3").unwrap();
        assert_eq!(entry.brand, EquipmentBrand::Caterpillar);
        assert_eq!(entry.severity, FaultSeverity::Critical);
        assert!(catalog.lookup("EID 9999-9").is_none());
    }

    #[test]
    fn test_lookup_wants_normalized_codes() {
        let catalog = FaultCatalog::builtin();
        assert!(catalog.lookup("eid 0126-3").is_none());
        assert!(catalog.lookup(&normalize_code("eid 0126-3")).is_some());
    }

    #[test]
    fn test_code_shape_classification() {
        assert_eq!(CodeShape::classify("EID 0126-3"), CodeShape::CatEid);
        assert_eq!(CodeShape::classify("E360"), CodeShape::CatESeries);
        assert_eq!(CodeShape::classify("70-2"), CodeShape::KomatsuNumeric);
        assert_eq!(CodeShape::classify("1500-0"), CodeShape::KomatsuNumeric);
        assert_eq!(CodeShape::classify("FROG"), CodeShape::Unknown);
    }

    #[test]
    fn test_brand_hints() {
        assert_eq!(
            CodeShape::classify("E360").brand_hint(),
            Some(EquipmentBrand::Caterpillar)
        );
        assert_eq!(
            CodeShape::classify("70-2").brand_hint(),
            Some(EquipmentBrand::Komatsu)
        );
        assert_eq!(CodeShape::classify("???").brand_hint(), None);
    }
}
