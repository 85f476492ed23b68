use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::types::ExportError;
use crate::validation::{validate_column_width, validate_row_height, validate_sheet_name};

pub const EXCEL_EXTENSION: &str = ".xlsx";
pub const DEFAULT_WORKSHEET_NAME: &str = "Sheet1";

/// Settings shared by every exporter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExporterOptionsBase {
    file_name: String,
    file_extension: String,
    /// Row gathering flags, consumed by the layer that collects the rows.
    pub ignore_column_visibility: bool,
    pub ignore_filtering: bool,
    pub ignore_columns_order: bool,
    pub ignore_sorting: bool,
}

impl ExporterOptionsBase {
    pub fn new(file_name: &str, file_extension: &str) -> Self {
        let mut base = Self {
            file_name: String::new(),
            file_extension: file_extension.to_string(),
            ignore_column_visibility: false,
            ignore_filtering: false,
            ignore_columns_order: false,
            ignore_sorting: false,
        };
        base.set_file_name(file_name);
        base
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn file_extension(&self) -> &str {
        &self.file_extension
    }

    /// Appends the exporter's extension unless the name already carries it.
    pub fn set_file_name(&mut self, name: &str) {
        self.file_name = if name.ends_with(&self.file_extension) {
            name.to_string()
        } else {
            format!("{}{}", name, self.file_extension)
        };
    }

    /// Swap the current extension of the file name for `extension`.
    fn set_file_extension(&mut self, extension: &str) {
        let stem = self
            .file_name
            .strip_suffix(self.file_extension.as_str())
            .unwrap_or(&self.file_name)
            .to_string();
        self.file_extension = extension.to_string();
        self.file_name = format!("{}{}", stem, extension);
    }
}

impl Default for ExporterOptionsBase {
    fn default() -> Self {
        Self::new("ExportedData", "")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum CsvFileType {
    #[default]
    Csv = 0,
    Tsv = 1,
    Tab = 2,
}

impl CsvFileType {
    pub fn extension(self) -> &'static str {
        match self {
            CsvFileType::Csv => ".csv",
            CsvFileType::Tsv => ".tsv",
            CsvFileType::Tab => ".tab",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            CsvFileType::Csv => "text/csv;charset=utf-8;",
            CsvFileType::Tsv | CsvFileType::Tab => "text/tab-separated-values;charset=utf-8;",
        }
    }

    pub fn default_delimiter(self) -> &'static str {
        match self {
            CsvFileType::Csv => ",",
            CsvFileType::Tsv | CsvFileType::Tab => "\t",
        }
    }
}

impl TryFrom<u8> for CsvFileType {
    type Error = ExportError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(CsvFileType::Csv),
            1 => Ok(CsvFileType::Tsv),
            2 => Ok(CsvFileType::Tab),
            other => Err(ExportError::UnsupportedFileType(other.to_string())),
        }
    }
}

impl FromStr for CsvFileType {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "csv" => Ok(CsvFileType::Csv),
            "tsv" => Ok(CsvFileType::Tsv),
            "tab" => Ok(CsvFileType::Tab),
            _ => Err(ExportError::UnsupportedFileType(s.to_string())),
        }
    }
}

impl fmt::Display for CsvFileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.extension()[1..])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvExporterOptions {
    pub base: ExporterOptionsBase,
    file_type: CsvFileType,
    value_delimiter: Option<String>,
}

impl CsvExporterOptions {
    pub fn new(file_name: &str, file_type: CsvFileType) -> Self {
        Self {
            base: ExporterOptionsBase::new(file_name, file_type.extension()),
            file_type,
            value_delimiter: None,
        }
    }

    pub fn file_type(&self) -> CsvFileType {
        self.file_type
    }

    /// Changing the file type re-suffixes the file name.
    pub fn set_file_type(&mut self, file_type: CsvFileType) {
        self.file_type = file_type;
        self.base.set_file_extension(file_type.extension());
    }

    /// Explicit delimiter, or the file type's default.
    pub fn value_delimiter(&self) -> &str {
        match self.value_delimiter.as_deref() {
            Some(d) if !d.is_empty() => d,
            _ => self.file_type.default_delimiter(),
        }
    }

    pub fn set_value_delimiter(&mut self, delimiter: Option<&str>) {
        self.value_delimiter = delimiter.map(str::to_string);
    }
}

impl Default for CsvExporterOptions {
    fn default() -> Self {
        Self::new("ExportedData", CsvFileType::Csv)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExcelExporterOptions {
    pub base: ExporterOptionsBase,
    column_width: Option<f64>,
    row_height: Option<f64>,
    pub ignore_pinning: bool,
    pub export_as_table: bool,
    worksheet_name: String,
}

impl ExcelExporterOptions {
    pub fn new(file_name: &str) -> Self {
        Self {
            base: ExporterOptionsBase::new(file_name, EXCEL_EXTENSION),
            column_width: None,
            row_height: None,
            ignore_pinning: false,
            export_as_table: true,
            worksheet_name: DEFAULT_WORKSHEET_NAME.to_string(),
        }
    }

    pub fn column_width(&self) -> Option<f64> {
        self.column_width
    }

    pub fn set_column_width(&mut self, width: Option<f64>) -> Result<(), ExportError> {
        validate_column_width(width)?;
        self.column_width = width;
        Ok(())
    }

    pub fn row_height(&self) -> Option<f64> {
        self.row_height
    }

    pub fn set_row_height(&mut self, height: Option<f64>) -> Result<(), ExportError> {
        validate_row_height(height)?;
        self.row_height = height;
        Ok(())
    }

    pub fn worksheet_name(&self) -> &str {
        &self.worksheet_name
    }

    pub fn set_worksheet_name(&mut self, name: &str) -> Result<(), ExportError> {
        validate_sheet_name(name)?;
        self.worksheet_name = name.to_string();
        Ok(())
    }

    /// Re-check everything the setters check; needed after deserializing.
    pub fn validate(&self) -> Result<(), ExportError> {
        validate_column_width(self.column_width)?;
        validate_row_height(self.row_height)?;
        validate_sheet_name(&self.worksheet_name)
    }
}

impl Default for ExcelExporterOptions {
    fn default() -> Self {
        Self::new("ExportedData")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field_name: String,
    pub direction: SortDirection,
}

/// Grid metadata that travels with the rows: pinning and sorting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridState {
    pub last_pinned_column: Option<usize>,
    pub sort: Option<SortSpec>,
}
