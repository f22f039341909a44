use std::path::PathBuf;
use thiserror::Error;

pub type CarteraResult<T> = Result<T, CarteraError>;

#[derive(Error, Debug)]
pub enum CarteraError {
    #[error("Usage: cartera <input_path> <output_path>")]
    MissingArgument,

    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Input file must have the .xlsx extension: {}", .0.display())]
    InvalidExtension(PathBuf),

    #[error("Workbook contains no sheets: {}", .0.display())]
    EmptyWorkbook(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Excel import error: {0}")]
    Import(String),

    #[error("Excel export error: {0}")]
    Export(String),

    #[error("Invalid column identifier: {0:?}")]
    InvalidColumn(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
