use async_trait::async_trait;
use fleetdeck::diagnostics::{
    normalize_code, CodeShape, DiagnosticsError, DiagnosticsResult, EquipmentBrand, FaultAnalyzer,
    FaultBackend, FaultCatalog, FaultEntry, FaultSeverity, ReportSource,
};
use std::sync::Arc;

#[test]
fn test_builtin_catalog_knows_the_reference_codes() {
    let catalog = FaultCatalog::builtin();

    let entry = catalog.lookup("EID 0126-3").expect("known CAT code");
    assert_eq!(entry.brand, EquipmentBrand::Caterpillar);
    assert_eq!(entry.problem, "Transmission Oil Filter Plugged");
    assert_eq!(entry.severity, FaultSeverity::Critical);

    let entry = catalog.lookup("70-2").expect("known Komatsu code");
    assert_eq!(entry.brand, EquipmentBrand::Komatsu);
    assert_eq!(entry.severity, FaultSeverity::Warning);

    assert!(catalog.lookup("ZZZ-99").is_none());
}

#[tokio::test]
async fn test_analyze_normalizes_before_lookup() {
    let analyzer = FaultAnalyzer::new();

    let report = analyzer.analyze("  eid  0126-3 ").await;
    assert_eq!(report.code, "EID 0126-3");
    assert!(report.is_hit());
    assert_eq!(report.source, ReportSource::Catalog);
    assert_eq!(report.shape, CodeShape::CatEid);
}

#[tokio::test]
async fn test_analyze_miss_is_not_an_error() {
    let analyzer = FaultAnalyzer::new();

    let report = analyzer.analyze("e999").await;
    assert!(!report.is_hit());
    assert_eq!(report.code, "E999");
    // The shape still hints at the manufacturer
    assert_eq!(report.shape.brand_hint(), Some(EquipmentBrand::Caterpillar));
}

#[tokio::test]
async fn test_analyze_without_backend_stays_local() {
    let analyzer = FaultAnalyzer::new();
    assert!(!analyzer.has_backend());

    let report = analyzer.analyze("9999-9").await;
    assert!(!report.is_hit());
    assert_eq!(report.source, ReportSource::Catalog);
}

struct ScriptedBackend;

#[async_trait]
impl FaultBackend for ScriptedBackend {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn query(&self, code: &str) -> DiagnosticsResult<FaultEntry> {
        if code == "3064-1" {
            Ok(FaultEntry {
                code: code.to_string(),
                brand: EquipmentBrand::Komatsu,
                problem: "PTO Pressure Switch Fault".to_string(),
                severity: FaultSeverity::Minor,
                action: "Check the pressure switch connector.".to_string(),
                cost_units: 3,
            })
        } else {
            Err(DiagnosticsError::backend("code unknown upstream"))
        }
    }
}

#[tokio::test]
async fn test_backend_resolves_codes_the_catalog_misses() {
    let analyzer = FaultAnalyzer::new().with_backend(Arc::new(ScriptedBackend));
    assert!(analyzer.has_backend());

    let report = analyzer.analyze("3064-1").await;
    assert!(report.is_hit());
    assert_eq!(report.source, ReportSource::Backend);

    // Catalog hits never consult the backend source
    let report = analyzer.analyze("E360").await;
    assert_eq!(report.source, ReportSource::Catalog);
}

#[tokio::test]
async fn test_backend_failure_degrades_to_a_miss() {
    let analyzer = FaultAnalyzer::new().with_backend(Arc::new(ScriptedBackend));

    let report = analyzer.analyze("4444-4").await;
    assert!(!report.is_hit());
    assert_eq!(report.source, ReportSource::Catalog);
}

#[test]
fn test_code_shapes_cover_both_manufacturers() {
    assert_eq!(CodeShape::classify("EID 0126-3"), CodeShape::CatEid);
    assert_eq!(CodeShape::classify("E360"), CodeShape::CatESeries);
    assert_eq!(CodeShape::classify("70-2"), CodeShape::KomatsuNumeric);
    assert_eq!(CodeShape::classify("1500-0"), CodeShape::KomatsuNumeric);
    assert_eq!(CodeShape::classify("FOO BAR"), CodeShape::Unknown);
    assert_eq!(CodeShape::classify("").brand_hint(), None);
}

#[test]
fn test_normalization_is_idempotent() {
    let once = normalize_code(" eid   0126-3 ");
    let twice = normalize_code(&once);
    assert_eq!(once, twice);
    assert_eq!(once, "EID 0126-3");
}

#[test]
fn test_reports_serialize_for_the_cli() {
    let catalog = FaultCatalog::builtin();
    let entry = catalog.lookup("E360").expect("known code").clone();

    let json = serde_json::to_string(&entry).expect("serializable entry");
    assert!(json.contains("\"E360\""));
    assert!(json.contains("Low Coolant Level"));

    let back: FaultEntry = serde_json::from_str(&json).expect("round trip");
    assert_eq!(back, entry);
}
