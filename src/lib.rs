//! CSV/TSV and XLSX export of tabular row data.
//!
//! Rows are either keyed records or bare values. Keys are inferred across
//! the whole row set and become the header row of either format.

pub mod csv;
pub mod dictionary;
pub mod options;
pub mod package;
pub mod types;
pub mod utils;
pub mod validation;
pub mod worksheet;
pub mod writer;
pub mod xml;

#[cfg(feature = "python")]
mod python;

pub use csv::{CharSeparatedValueData, CsvExporter};
pub use dictionary::{CalibriMetrics, TextMeasure, WorksheetDataDictionary};
pub use options::{
    CsvExporterOptions, CsvFileType, ExcelExporterOptions, ExporterOptionsBase, GridState, SortDirection,
    SortSpec,
};
pub use package::{ExcelFileType, ExcelFolderType, VirtualArchive};
pub use types::{record, ExportError, Record, Row, Value, ValueKind};
pub use worksheet::WorksheetData;
pub use writer::{decode_base64_archive, ExcelExporter};
