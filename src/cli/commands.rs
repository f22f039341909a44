use crate::config::ReportConfig;
use crate::error::{CarteraError, CarteraResult};
use crate::workbook::process_workbook;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolve and check the two positional paths.
///
/// The input must exist and end in `.xlsx`; the output's parent directory
/// is created when missing.
pub fn validate_arguments(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
) -> CarteraResult<(PathBuf, PathBuf)> {
    let (Some(input), Some(output)) = (input, output) else {
        return Err(CarteraError::MissingArgument);
    };

    let input = std::path::absolute(&input)?;
    let output = std::path::absolute(&output)?;

    if !input.exists() {
        return Err(CarteraError::InputNotFound(input));
    }

    let is_xlsx = input
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xlsx"));
    if !is_xlsx {
        return Err(CarteraError::InvalidExtension(input));
    }

    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)?;
    }

    Ok((input, output))
}

/// Load the report configuration, from `path` when given
pub fn load_config(path: Option<&Path>) -> CarteraResult<ReportConfig> {
    match path {
        Some(path) => ReportConfig::from_yaml_file(path),
        None => Ok(ReportConfig::default()),
    }
}

/// Execute the process command
pub fn process(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
) -> CarteraResult<()> {
    let (input, output) = validate_arguments(input, output)?;
    let config = load_config(config.as_deref())?;

    process_workbook(&input, &output, &config)?;

    println!("{}", "✅ Report generated".bold().green());
    println!("   Input:  {}", input.display());
    println!("   Output: {}", output.display());
    println!(
        "   Sheets: {} + {} auxiliary\n",
        config.target_sheet,
        config.auxiliary_sheets.len()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_argument() {
        let result = validate_arguments(Some(PathBuf::from("a.xlsx")), None);
        assert!(matches!(result, Err(CarteraError::MissingArgument)));
    }

    #[test]
    fn test_input_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let result = validate_arguments(
            Some(temp_dir.path().join("nope.xlsx")),
            Some(temp_dir.path().join("out.xlsx")),
        );
        assert!(matches!(result, Err(CarteraError::InputNotFound(_))));
    }

    #[test]
    fn test_invalid_extension() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("cartera.xls");
        fs::write(&input, b"not a workbook").unwrap();

        let result = validate_arguments(Some(input), Some(temp_dir.path().join("out.xlsx")));
        assert!(matches!(result, Err(CarteraError::InvalidExtension(_))));
    }

    #[test]
    fn test_creates_output_parent() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("Cartera.XLSX");
        fs::write(&input, b"").unwrap();
        let output = temp_dir.path().join("nested/dir/out.xlsx");

        let (_, resolved) = validate_arguments(Some(input), Some(output.clone())).unwrap();
        assert_eq!(resolved, output);
        assert!(temp_dir.path().join("nested/dir").is_dir());
    }

    #[test]
    fn test_load_config_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config, ReportConfig::default());
    }
}
