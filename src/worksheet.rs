use std::sync::Arc;

use crate::dictionary::{TextMeasure, WorksheetDataDictionary};
use crate::options::{ExcelExporterOptions, GridState, SortSpec};
use crate::types::{Row, Value};
use crate::utils::{get_keys_from_data, is_special_data};

/// Everything one Excel export renders from: rows, inferred keys, options and
/// the shared string dictionary the part renderers fill in.
#[derive(Debug)]
pub struct WorksheetData<'a> {
    rows: &'a [Row],
    options: &'a ExcelExporterOptions,
    grid: &'a GridState,
    keys: Vec<String>,
    column_count: usize,
    row_count: usize,
    is_special_data: bool,
    dictionary: WorksheetDataDictionary,
}

impl<'a> WorksheetData<'a> {
    pub fn new(
        rows: &'a [Row],
        options: &'a ExcelExporterOptions,
        grid: &'a GridState,
        measure: Arc<dyn TextMeasure>,
    ) -> Self {
        let keys = get_keys_from_data(rows);
        let (column_count, row_count) = if keys.is_empty() {
            (0, 0)
        } else {
            (keys.len(), rows.len() + 1)
        };

        Self {
            rows,
            options,
            grid,
            is_special_data: !keys.is_empty() && is_special_data(rows),
            dictionary: WorksheetDataDictionary::new(column_count, options.column_width(), measure),
            keys,
            column_count,
            row_count,
        }
    }

    pub fn rows(&self) -> &'a [Row] {
        self.rows
    }

    pub fn options(&self) -> &'a ExcelExporterOptions {
        self.options
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// Data rows plus the header row; zero when empty.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn is_empty(&self) -> bool {
        self.row_count == 0 || self.column_count == 0
    }

    pub fn is_special_data(&self) -> bool {
        self.is_special_data
    }

    /// Table part is emitted only for non-empty data exported as a table.
    pub fn has_table(&self) -> bool {
        !self.is_empty() && self.options.export_as_table
    }

    /// Pinned column index used for the frozen pane, honouring the ignore flags.
    pub fn last_pinned_column(&self) -> Option<usize> {
        if self.options.ignore_pinning || self.options.base.ignore_columns_order {
            return None;
        }
        self.grid.last_pinned_column
    }

    pub fn sort(&self) -> Option<&'a SortSpec> {
        if self.options.base.ignore_sorting {
            return None;
        }
        self.grid.sort.as_ref()
    }

    pub fn dictionary(&self) -> &WorksheetDataDictionary {
        &self.dictionary
    }

    pub fn dictionary_mut(&mut self) -> &mut WorksheetDataDictionary {
        &mut self.dictionary
    }

    /// Value of the cell at data row `row` (0-based, header excluded).
    /// Absent keys read as null.
    pub fn cell_value(&self, row: usize, column: usize) -> &'a Value {
        const NULL: &Value = &Value::Null;
        let Some(data) = self.rows.get(row) else {
            return NULL;
        };
        match data {
            Row::Value(v) if self.is_special_data => v,
            Row::Value(_) => NULL,
            Row::Record(record) => self
                .keys
                .get(column)
                .and_then(|key| record.get(key.as_str()))
                .unwrap_or(NULL),
        }
    }
}
