//! Report configuration
//!
//! Business constants of the San Benito portfolio report. The defaults
//! reproduce the production layout; a YAML file may override any key.

use crate::error::{CarteraError, CarteraResult};
use crate::types::ColumnId;
use serde::Deserialize;
use std::path::Path;

/// Immutable configuration handed to the pipeline and the workbook adapter
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Output sheet holding the transformed detail table
    pub target_sheet: String,
    /// Source columns discarded before any other step (matched by letter)
    pub columns_to_remove: Vec<String>,
    /// Stray labels blanked out of the data region
    pub keywords: Vec<String>,
    /// Columns totalled into the aggregate row
    pub sum_columns: Vec<String>,
    pub company_name: String,
    pub report_title: String,
    pub overdue_label: String,
    pub section_label: String,
    /// Placeholder sheets appended after the detail sheet, in order
    pub auxiliary_sheets: Vec<String>,
    /// 0-based detail rows filled dark blue across every written column
    pub banded_rows: Vec<usize>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            target_sheet: "Cartera_CxC_Det_Comple".to_string(),
            columns_to_remove: to_strings(&["Z", "Y", "X", "O", "M", "L", "K", "I", "D", "C", "B"]),
            keywords: to_strings(&[
                "Folio",
                "Fecha",
                "Fecha vencimiento",
                "Condición",
                "Total",
                "Saldo",
                "Dias",
                "No vencido",
                "vencido",
                "30 días",
                "60 días",
                "90 días",
                "120 días",
                "Más de 120 días",
            ]),
            sum_columns: to_strings(&["G", "H", "I", "J", "K", "L", "M", "N", "O"]),
            company_name: "Ferreteria y Madereria San Benito".to_string(),
            report_title: "Cartera Detallada completa".to_string(),
            overdue_label: "Cartera vencida".to_string(),
            section_label: "Clientes".to_string(),
            auxiliary_sheets: to_strings(&[
                "Cartera_CxC_Res_Comp",
                "Cartera_CxC_DSE",
                "Cartera_CxC_RSE",
                "Especiales",
                "Juridico",
                "Proyeccion",
                "Recuperacion",
                "Abonos",
            ]),
            banded_rows: vec![5, 6],
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl ReportConfig {
    /// Load overrides from a YAML file; absent keys keep their defaults
    pub fn from_yaml_file(path: &Path) -> CarteraResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> CarteraResult<Self> {
        let config: ReportConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check column letters and sheet names
    pub fn validate(&self) -> CarteraResult<()> {
        self.removed_columns()?;
        self.summed_columns()?;

        if self.target_sheet.trim().is_empty() {
            return Err(CarteraError::Config(
                "target_sheet must not be empty".to_string(),
            ));
        }
        if let Some(dup) = self
            .auxiliary_sheets
            .iter()
            .find(|name| name.eq_ignore_ascii_case(&self.target_sheet))
        {
            return Err(CarteraError::Config(format!(
                "auxiliary sheet {:?} collides with the target sheet",
                dup
            )));
        }
        Ok(())
    }

    pub fn removed_columns(&self) -> CarteraResult<Vec<ColumnId>> {
        parse_columns(&self.columns_to_remove)
    }

    pub fn summed_columns(&self) -> CarteraResult<Vec<ColumnId>> {
        parse_columns(&self.sum_columns)
    }
}

fn parse_columns(letters: &[String]) -> CarteraResult<Vec<ColumnId>> {
    letters.iter().map(|l| ColumnId::from_letters(l)).collect()
}
