use log::debug;
use std::path::{Path, PathBuf};

use crate::options::CsvExporterOptions;
use crate::types::{ExportError, Row, Value};
use crate::utils::{get_keys_from_data, has_value, is_special_data, SPECIAL_DATA_KEY};
use crate::validation::write_file_atomic;

const END_OF_RECORD: &str = "\r\n";
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Character separated text (CSV, TSV, TAB) built from a set of rows.
///
/// A field is wrapped in double quotes when it contains a line break or the
/// delimiter. Quotes inside a field are not doubled.
pub struct CharSeparatedValueData<'a> {
    rows: &'a [Row],
    delimiter: &'a str,
    escape_characters: [&'a str; 4],
    is_special_data: bool,
}

impl<'a> CharSeparatedValueData<'a> {
    pub fn new(rows: &'a [Row], delimiter: &'a str) -> Self {
        Self {
            rows,
            delimiter,
            escape_characters: ["\r", "\n", "\r\n", delimiter],
            is_special_data: false,
        }
    }

    pub fn prepare_data(&mut self) -> String {
        if self.rows.is_empty() {
            return String::new();
        }
        let keys = get_keys_from_data(self.rows);
        if keys.is_empty() {
            return String::new();
        }
        self.is_special_data = is_special_data(self.rows);

        let mut out = self.process_header_record(&keys);
        for row in self.rows {
            self.process_record(row, &keys, &mut out);
        }
        out
    }

    fn process_header_record(&self, keys: &[String]) -> String {
        let mut record = String::new();
        for key in keys {
            self.process_field(key, &mut record);
        }
        self.end_record(&mut record);
        record
    }

    fn process_record(&self, row: &Row, keys: &[String], out: &mut String) {
        for key in keys {
            let text = self.field_value(row, key).map(Value::to_string).unwrap_or_default();
            self.process_field(&text, out);
        }
        self.end_record(out);
    }

    /// Record field, or the row itself for special data.
    fn field_value<'r>(&self, row: &'r Row, key: &str) -> Option<&'r Value> {
        let value = match row {
            Row::Record(record) => record.get(key),
            Row::Value(value) if self.is_special_data && key == SPECIAL_DATA_KEY => Some(value),
            Row::Value(_) => None,
        };
        value.filter(|v| has_value(v))
    }

    fn process_field(&self, value: &str, out: &mut String) {
        if self.escape_characters.iter().any(|c| !c.is_empty() && value.contains(c)) {
            out.push('"');
            out.push_str(value);
            out.push('"');
        } else {
            out.push_str(value);
        }
        out.push_str(self.delimiter);
    }

    /// Drop the trailing delimiter and terminate the record.
    fn end_record(&self, record: &mut String) {
        record.truncate(record.len() - self.delimiter.len());
        record.push_str(END_OF_RECORD);
    }
}

/// CSV/TSV export entry point.
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvExporter;

impl CsvExporter {
    pub fn new() -> Self {
        Self
    }

    pub fn export_data(&self, rows: &[Row], options: &CsvExporterOptions) -> Result<String, ExportError> {
        let delimiter = options.value_delimiter();
        debug!(
            "exporting {} rows as {} with delimiter {:?}",
            rows.len(),
            options.file_type(),
            delimiter
        );
        let text = CharSeparatedValueData::new(rows, delimiter).prepare_data();
        debug!("prepared {} bytes of {} data", text.len(), options.file_type());
        Ok(text)
    }

    /// Write the export into `dir` under the options' file name, BOM prefixed.
    pub fn save(&self, rows: &[Row], options: &CsvExporterOptions, dir: &Path) -> Result<PathBuf, ExportError> {
        let text = self.export_data(rows, options)?;
        let path = dir.join(options.base.file_name());
        write_file_atomic(&path, &[UTF8_BOM, text.as_bytes()])?;
        debug!("saved {} ({})", path.display(), options.file_type().mime_type());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::record;

    fn prepare(rows: &[Row], delimiter: &str) -> String {
        CharSeparatedValueData::new(rows, delimiter).prepare_data()
    }

    #[test]
    fn writes_header_and_records() {
        let rows = vec![
            record([("Name", Value::from("Ann")), ("Age", Value::from(30))]),
            record([("Name", Value::from("Bo,b")), ("Age", Value::from(25))]),
        ];
        assert_eq!(prepare(&rows, ","), "Name,Age\r\nAnn,30\r\n\"Bo,b\",25\r\n");
    }

    #[test]
    fn empty_inputs_produce_nothing() {
        assert_eq!(prepare(&[], ","), "");
        assert_eq!(prepare(&[record(Vec::<(&str, Value)>::new())], ","), "");
    }

    #[test]
    fn inner_quotes_are_not_doubled() {
        let rows = vec![record([("a", "x\"y")]), record([("a", "x,y\"z")])];
        assert_eq!(prepare(&rows, ","), "a\r\nx\"y\r\n\"x,y\"z\"\r\n");
    }

    #[test]
    fn line_breaks_are_quoted() {
        let rows = vec![record([("a", "one\ntwo")]), record([("a", "cr\rhere")])];
        assert_eq!(prepare(&rows, ","), "a\r\n\"one\ntwo\"\r\n\"cr\rhere\"\r\n");
    }

    #[test]
    fn missing_and_null_fields_are_empty() {
        let rows = vec![
            record([("a", Value::from(1)), ("b", Value::Null)]),
            record([("b", Value::from(false))]),
        ];
        assert_eq!(prepare(&rows, ","), "a,b\r\n1,\r\n,false\r\n");
    }

    #[test]
    fn special_data_uses_the_row_value() {
        let rows = vec![Row::from(Value::from("x")), Row::from(Value::from(2.5))];
        assert_eq!(prepare(&rows, ","), "Column 1\r\nx\r\n2.5\r\n");
    }

    #[test]
    fn multi_character_delimiters_are_trimmed_whole() {
        let rows = vec![record([("a", 1), ("b", 2)])];
        assert_eq!(prepare(&rows, "||"), "a||b\r\n1||2\r\n");
        let tricky = vec![record([("a", "p||q")])];
        assert_eq!(prepare(&tricky, "||"), "a\r\n\"p||q\"\r\n");
    }

    #[test]
    fn tab_delimiter_leaves_commas_alone() {
        let rows = vec![record([("a", "x,y"), ("b", "t\tu")])];
        assert_eq!(prepare(&rows, "\t"), "a\tb\r\nx,y\t\"t\tu\"\r\n");
    }

    #[test]
    fn exporter_uses_the_file_type_delimiter() {
        let rows = vec![record([("a", 1), ("b", 2)])];
        let opts = CsvExporterOptions::new("out", crate::options::CsvFileType::Tsv);
        assert_eq!(CsvExporter::new().export_data(&rows, &opts).unwrap(), "a\tb\r\n1\t2\r\n");
    }
}
