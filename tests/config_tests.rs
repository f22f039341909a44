//! Configuration and error reporting tests

use cartera_format::cli::load_config;
use cartera_format::sheets::SheetRegistry;
use cartera_format::{CarteraError, ReportConfig};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ═══════════════════════════════════════════════════════════════════════════
// YAML OVERRIDES
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_load_config_defaults_without_file() {
    let config = load_config(None).unwrap();
    assert_eq!(config, ReportConfig::default());
}

#[test]
fn test_load_config_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yaml");
    std::fs::write(
        &path,
        "report_title: Cartera Sucursal Centro\nkeywords:\n  - Folio\n  - Saldo\nbanded_rows: [4, 5]\n",
    )
    .unwrap();

    let config = load_config(Some(path.as_path())).unwrap();
    assert_eq!(config.report_title, "Cartera Sucursal Centro");
    assert_eq!(config.keywords, vec!["Folio", "Saldo"]);
    assert_eq!(config.banded_rows, vec![4, 5]);
    assert_eq!(config.target_sheet, "Cartera_CxC_Det_Comple");
}

#[test]
fn test_load_config_missing_file() {
    let result = load_config(Some(Path::new("/no/such/config.yaml")));
    assert!(matches!(result, Err(CarteraError::Io(_))));
}

#[test]
fn test_load_config_malformed_yaml() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yaml");
    std::fs::write(&path, "keywords: [unterminated\n").unwrap();

    let result = load_config(Some(path.as_path()));
    assert!(matches!(result, Err(CarteraError::Yaml(_))));
}

#[test]
fn test_empty_target_sheet_rejected() {
    let result = ReportConfig::from_yaml_str("target_sheet: '  '\n");
    assert!(matches!(result, Err(CarteraError::Config(_))));
}

// ═══════════════════════════════════════════════════════════════════════════
// REGISTRY FROM CONFIG
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_standard_registry_follows_config_order() {
    let config = ReportConfig::from_yaml_str(
        "target_sheet: Detalle\nauxiliary_sheets: [Juridico, Abonos]\n",
    )
    .unwrap();
    let registry = SheetRegistry::standard(&config).unwrap();
    assert_eq!(registry.sheet_names(), vec!["Detalle", "Juridico", "Abonos"]);
}

// ═══════════════════════════════════════════════════════════════════════════
// ERROR MESSAGES
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_error_display() {
    assert_eq!(
        CarteraError::MissingArgument.to_string(),
        "Usage: cartera <input_path> <output_path>"
    );
    assert_eq!(
        CarteraError::InputNotFound(PathBuf::from("/tmp/x.xlsx")).to_string(),
        "Input file not found: /tmp/x.xlsx"
    );
    assert_eq!(
        CarteraError::InvalidColumn("7".to_string()).to_string(),
        "Invalid column identifier: \"7\""
    );
    assert_eq!(
        CarteraError::Export("disk full".to_string()).to_string(),
        "Excel export error: disk full"
    );
}
