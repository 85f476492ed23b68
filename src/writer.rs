use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::debug;
use mtzip::{level::CompressionLevel, ZipArchive};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::dictionary::{CalibriMetrics, TextMeasure};
use crate::options::{ExcelExporterOptions, GridState};
use crate::package::{self, VirtualArchive};
use crate::types::{ExportError, Row};
use crate::validation::write_file_atomic;
use crate::worksheet::WorksheetData;

/// XLSX export entry point. Each call builds its own worksheet state, so one
/// exporter can serve concurrent exports.
#[derive(Clone)]
pub struct ExcelExporter {
    measure: Arc<dyn TextMeasure>,
}

impl Default for ExcelExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ExcelExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExcelExporter").finish_non_exhaustive()
    }
}

impl ExcelExporter {
    pub fn new() -> Self {
        Self::with_text_measure(Arc::new(CalibriMetrics))
    }

    /// Use `measure` to size columns when no explicit width is configured.
    pub fn with_text_measure(measure: Arc<dyn TextMeasure>) -> Self {
        Self { measure }
    }

    /// Render every package part without compressing.
    pub fn build_package(
        &self,
        rows: &[Row],
        options: &ExcelExporterOptions,
        grid: &GridState,
    ) -> Result<VirtualArchive, ExportError> {
        options.validate()?;
        let mut data = WorksheetData::new(rows, options, grid, Arc::clone(&self.measure));
        debug!(
            "building xlsx package: {} rows x {} columns, table: {}",
            data.row_count(),
            data.column_count(),
            data.has_table()
        );
        let archive = package::build_package(&mut data);
        debug!(
            "package has {} parts, {} shared strings ({} unique)",
            archive.len(),
            data.dictionary().strings_count,
            data.dictionary().unique_count()
        );
        Ok(archive)
    }

    /// The `.xlsx` file contents.
    pub fn export_data(
        &self,
        rows: &[Row],
        options: &ExcelExporterOptions,
        grid: &GridState,
    ) -> Result<Vec<u8>, ExportError> {
        let archive = self.build_package(rows, options, grid)?;
        let bytes = write_zip(archive)?;
        debug!("compressed xlsx package to {} bytes", bytes.len());
        Ok(bytes)
    }

    pub fn export_base64(
        &self,
        rows: &[Row],
        options: &ExcelExporterOptions,
        grid: &GridState,
    ) -> Result<String, ExportError> {
        Ok(STANDARD.encode(self.export_data(rows, options, grid)?))
    }

    /// Write the workbook into `dir` under the options' file name.
    pub fn save(
        &self,
        rows: &[Row],
        options: &ExcelExporterOptions,
        grid: &GridState,
        dir: &Path,
    ) -> Result<PathBuf, ExportError> {
        let bytes = self.export_data(rows, options, grid)?;
        let path = dir.join(options.base.file_name());
        write_file_atomic(&path, &[&bytes])?;
        debug!("saved {}", path.display());
        Ok(path)
    }
}

/// Decode a base64 encoded archive back to its raw bytes.
pub fn decode_base64_archive(encoded: &str) -> Result<Vec<u8>, ExportError> {
    Ok(STANDARD.decode(encoded.trim())?)
}

fn write_zip(archive: VirtualArchive) -> Result<Vec<u8>, ExportError> {
    let mut zipper = ZipArchive::new();
    for (path, contents) in archive.into_files() {
        zipper
            .add_file_from_memory(contents, path)
            .compression_level(CompressionLevel::fast())
            .done();
    }

    let mut buffer = Cursor::new(Vec::new());
    zipper
        .write(&mut buffer)
        .map_err(|e| ExportError::Archive(e.to_string()))?;
    Ok(buffer.into_inner())
}
