use std::collections::HashMap;
use std::sync::Arc;

use crate::types::{Value, ValueKind};
use crate::utils::xml_escape;

/// Pixel width of a rendered string.
pub trait TextMeasure: Send + Sync {
    fn measure_text(&self, text: &str) -> f64;
}

/// Approximate glyph advances of 11pt Calibri at 96 DPI.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalibriMetrics;

impl TextMeasure for CalibriMetrics {
    fn measure_text(&self, text: &str) -> f64 {
        text.chars()
            .map(|c| match c {
                'i' | 'j' | 'l' | '.' | ',' | ':' | ';' | '\'' | '!' | '|' => 3.0,
                'f' | 'r' | 't' | 'I' | ' ' | '(' | ')' | '[' | ']' | '-' => 4.5,
                'm' | 'w' | 'M' | 'W' | '@' => 11.0,
                'A'..='Z' | '#' | '%' | '&' => 8.5,
                c if c.is_ascii() => 7.0,
                _ => 14.0,
            })
            .sum()
    }
}

/// Shared string table plus per-column type and width tracking.
pub struct WorksheetDataDictionary {
    dictionary: HashMap<String, usize>,
    counter: usize,
    keys: Vec<String>,
    keys_are_valid: bool,
    column_kinds: Vec<Option<ValueKind>>,
    column_widths: Vec<f64>,
    widths_cache: HashMap<String, f64>,
    calculate_column_width: bool,
    measure: Arc<dyn TextMeasure>,
    pub strings_count: usize,
    pub has_non_string_values: bool,
}

impl WorksheetDataDictionary {
    pub const TEXT_PADDING: f64 = 5.0;

    pub fn new(column_count: usize, column_width: Option<f64>, measure: Arc<dyn TextMeasure>) -> Self {
        Self {
            dictionary: HashMap::new(),
            counter: 0,
            keys: Vec::new(),
            keys_are_valid: true,
            column_kinds: vec![None; column_count],
            column_widths: vec![column_width.unwrap_or(0.0); column_count],
            widths_cache: HashMap::new(),
            calculate_column_width: column_width.is_none(),
            measure,
            strings_count: 0,
            has_non_string_values: false,
        }
    }

    /// Record a cell value. Returns its shared string index, or `None` when the
    /// column holds numbers and the value must be written inline.
    ///
    /// The column's kind is fixed by its first data value; later values of a
    /// different kind are treated as that first kind. Null is not string-like,
    /// so a leading null locks the column to inline values. The sheet renderer
    /// writes null cells itself and never passes them here.
    pub fn save_value(&mut self, value: &Value, column: usize, is_header: bool) -> Option<usize> {
        if !is_header {
            if let Some(kind) = self.column_kinds.get_mut(column) {
                kind.get_or_insert(value.kind());
            }
        }

        let column_kind = self.column_kinds.get(column).copied().flatten();
        let saved_as_string = is_header || column_kind.map_or(true, ValueKind::is_string_like);
        let raw = value.to_string();

        let index = if saved_as_string {
            let sanitized = xml_escape(&raw);
            let index = match self.dictionary.get(&sanitized) {
                Some(&index) => index,
                None => {
                    let index = self.counter;
                    self.dictionary.insert(sanitized, index);
                    self.counter += 1;
                    self.keys_are_valid = false;
                    index
                }
            };
            self.strings_count += 1;
            Some(index)
        } else {
            self.has_non_string_values = true;
            None
        };

        if self.calculate_column_width {
            let width = self.text_width(&raw);
            if let Some(current) = self.column_widths.get_mut(column) {
                *current = current.max(width);
            }
        }

        index
    }

    /// Shared string index of an already saved value.
    pub fn get_value(&self, value: &Value) -> Option<usize> {
        self.dictionary.get(&xml_escape(&value.to_string())).copied()
    }

    /// Distinct sanitized strings, positioned at their shared string index.
    pub fn get_keys(&mut self) -> &[String] {
        if !self.keys_are_valid {
            let mut entries: Vec<(&String, &usize)> = self.dictionary.iter().collect();
            entries.sort_unstable_by_key(|&(_, index)| *index);
            self.keys = entries.into_iter().map(|(key, _)| key.clone()).collect();
            self.keys_are_valid = true;
        }
        &self.keys
    }

    pub fn unique_count(&self) -> usize {
        self.dictionary.len()
    }

    pub fn column_widths(&self) -> &[f64] {
        &self.column_widths
    }

    pub fn calculates_column_width(&self) -> bool {
        self.calculate_column_width
    }

    fn text_width(&mut self, text: &str) -> f64 {
        if let Some(&width) = self.widths_cache.get(text) {
            return width;
        }
        let width = self.measure.measure_text(text) + Self::TEXT_PADDING;
        self.widths_cache.insert(text.to_string(), width);
        width
    }
}

impl std::fmt::Debug for WorksheetDataDictionary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorksheetDataDictionary")
            .field("unique_count", &self.dictionary.len())
            .field("strings_count", &self.strings_count)
            .field("has_non_string_values", &self.has_non_string_values)
            .field("column_widths", &self.column_widths)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedWidth(f64);

    impl TextMeasure for FixedWidth {
        fn measure_text(&self, text: &str) -> f64 {
            text.chars().count() as f64 * self.0
        }
    }

    fn dictionary(columns: usize) -> WorksheetDataDictionary {
        WorksheetDataDictionary::new(columns, None, Arc::new(FixedWidth(10.0)))
    }

    #[test]
    fn repeated_strings_share_an_index() {
        let mut dict = dictionary(1);
        let first = dict.save_value(&Value::from("Ann"), 0, false);
        let second = dict.save_value(&Value::from("Ann"), 0, false);
        assert_eq!(first, Some(0));
        assert_eq!(second, Some(0));
        assert_eq!(dict.strings_count, 2);
        assert_eq!(dict.get_keys().len(), 1);
    }

    #[test]
    fn headers_are_strings_even_over_numeric_columns() {
        let mut dict = dictionary(1);
        assert_eq!(dict.save_value(&Value::from(1), 0, false), None);
        assert_eq!(dict.save_value(&Value::from("ID"), 0, true), Some(0));
        assert!(dict.has_non_string_values);
    }

    #[test]
    fn column_kind_is_locked_by_first_value() {
        let mut dict = dictionary(2);
        assert_eq!(dict.save_value(&Value::from(5), 0, false), None);
        assert_eq!(dict.save_value(&Value::from("text"), 0, false), None);
        assert_eq!(dict.get_value(&Value::from("text")), None);

        assert_eq!(dict.save_value(&Value::from("first"), 1, false), Some(0));
        assert_eq!(dict.save_value(&Value::from(7), 1, false), Some(1));
        assert_eq!(dict.get_value(&Value::from(7)), Some(1));
    }

    #[test]
    fn leading_null_locks_the_column_to_inline_values() {
        let mut dict = dictionary(1);
        assert_eq!(dict.save_value(&Value::Null, 0, false), None);
        assert!(dict.has_non_string_values);
        assert_eq!(dict.save_value(&Value::from("later"), 0, false), None);
        assert_eq!(dict.unique_count(), 0);
        assert_eq!(dict.strings_count, 0);
    }

    #[test]
    fn header_does_not_lock_the_column_kind() {
        let mut dict = dictionary(1);
        dict.save_value(&Value::from("Age"), 0, true);
        assert_eq!(dict.save_value(&Value::from(30), 0, false), None);
    }

    #[test]
    fn booleans_and_dates_are_interned() {
        let mut dict = dictionary(2);
        assert_eq!(dict.save_value(&Value::from(true), 0, false), Some(0));
        let date = chrono::NaiveDate::from_ymd_opt(2020, 5, 17).unwrap();
        assert_eq!(dict.save_value(&Value::from(date), 1, false), Some(1));
        assert_eq!(dict.get_keys(), ["true", "2020-05-17T00:00:00"]);
        assert!(!dict.has_non_string_values);
    }

    #[test]
    fn values_are_sanitized_before_interning() {
        let mut dict = dictionary(1);
        dict.save_value(&Value::from("a<b"), 0, false);
        assert_eq!(dict.get_keys(), ["a&lt;b"]);
        assert_eq!(dict.get_value(&Value::from("a<b")), Some(0));
    }

    #[test]
    fn key_cache_is_invalidated_on_insert() {
        let mut dict = dictionary(1);
        dict.save_value(&Value::from("b"), 0, false);
        assert_eq!(dict.get_keys(), ["b"]);
        dict.save_value(&Value::from("a"), 0, false);
        assert_eq!(dict.get_keys(), ["b", "a"]);
        dict.save_value(&Value::from("b"), 0, false);
        assert_eq!(dict.get_keys(), ["b", "a"]);
        assert_eq!(dict.unique_count(), 2);
    }

    #[test]
    fn widths_track_the_longest_unsanitized_value() {
        let mut dict = dictionary(2);
        dict.save_value(&Value::from("Name"), 0, true);
        dict.save_value(&Value::from("&"), 0, false);
        dict.save_value(&Value::from(123456), 1, false);
        assert_eq!(dict.column_widths(), [45.0, 65.0]);
        assert!(dict.calculates_column_width());
    }

    #[test]
    fn fixed_width_disables_measurement() {
        let mut dict = WorksheetDataDictionary::new(2, Some(50.0), Arc::new(FixedWidth(10.0)));
        dict.save_value(&Value::from("a very long value"), 0, false);
        assert_eq!(dict.column_widths(), [50.0, 50.0]);
        assert!(!dict.calculates_column_width());
    }

    #[test]
    fn calibri_metrics_grow_with_text() {
        let metrics = CalibriMetrics;
        assert!(metrics.measure_text("WWW") > metrics.measure_text("iii"));
        assert_eq!(metrics.measure_text(""), 0.0);
    }
}
