//! Option validation and safe file output

use crate::types::ExportError;
use std::fs;
use std::io::Write;
use std::path::Path;

const MAX_SHEET_NAME_LEN: usize = 31;
const INVALID_SHEET_CHARS: &str = "[]:*?/\\";

pub fn validate_sheet_name(name: &str) -> Result<(), ExportError> {
    if name.is_empty() {
        return Err(ExportError::InvalidWorksheetName("name cannot be empty".to_string()));
    }
    if name.chars().count() > MAX_SHEET_NAME_LEN {
        return Err(ExportError::InvalidWorksheetName(format!(
            "'{}' exceeds {} chars",
            name, MAX_SHEET_NAME_LEN
        )));
    }
    if name.chars().any(|c| INVALID_SHEET_CHARS.contains(c)) {
        return Err(ExportError::InvalidWorksheetName(format!(
            "'{}' contains invalid chars",
            name
        )));
    }
    Ok(())
}

pub fn validate_column_width(width: Option<f64>) -> Result<(), ExportError> {
    match width {
        Some(w) if w.is_nan() || w < 0.0 => Err(ExportError::InvalidColumnWidth(w)),
        _ => Ok(()),
    }
}

pub fn validate_row_height(height: Option<f64>) -> Result<(), ExportError> {
    match height {
        Some(h) if h.is_nan() || h < 0.0 => Err(ExportError::InvalidRowHeight(h)),
        _ => Ok(()),
    }
}

/// Write through a temporary sibling file and rename it into place.
pub fn write_file_atomic(path: &Path, contents: &[&[u8]]) -> Result<(), ExportError> {
    if path.as_os_str().is_empty() {
        return Err(ExportError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "Filename cannot be empty",
        )));
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            return Err(ExportError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Directory does not exist: {}", parent.display()),
            )));
        }
    }

    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(format!(".tmp.{}", std::process::id()));
    let temp_path = Path::new(&temp_name);

    let write_result = (|| -> Result<(), ExportError> {
        let mut temp_file = fs::File::create(temp_path)?;
        for chunk in contents {
            temp_file.write_all(chunk)?;
        }
        temp_file.flush()?;
        temp_file.sync_all()?;
        Ok(())
    })();

    match write_result {
        Ok(()) => {
            fs::rename(temp_path, path)?;
            Ok(())
        }
        Err(e) => {
            let _ = fs::remove_file(temp_path);
            Err(e)
        }
    }
}
