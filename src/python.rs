use chrono::NaiveDate;
use pyo3::prelude::*;
use pyo3::types::{PyBool, PyBytes, PyDate, PyDateTime, PyDict, PyList};

use crate::csv::CsvExporter;
use crate::options::{CsvExporterOptions, CsvFileType, ExcelExporterOptions, GridState};
use crate::types::{ExportError, Record, Row, Value};
use crate::writer::ExcelExporter;

fn to_py_err(e: ExportError) -> PyErr {
    match e {
        ExportError::Io(_) | ExportError::Archive(_) => {
            PyErr::new::<pyo3::exceptions::PyIOError, _>(e.to_string())
        }
        _ => PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()),
    }
}

fn value_from_py(value: &Bound<PyAny>) -> PyResult<Value> {
    if value.is_none() {
        return Ok(Value::Null);
    }

    // bool is a subclass of int
    if value.is_instance_of::<PyBool>() {
        return Ok(Value::Bool(value.extract::<bool>()?));
    }

    if let Ok(s) = value.extract::<&str>() {
        return Ok(Value::String(s.to_string()));
    }

    if let Ok(i) = value.extract::<i64>() {
        return Ok(Value::Number(i as f64));
    }

    if let Ok(f) = value.extract::<f64>() {
        return Ok(Value::Number(f));
    }

    if let Ok(dt) = value.downcast::<PyDateTime>() {
        use pyo3::types::{PyDateAccess, PyTimeAccess};
        let datetime = NaiveDate::from_ymd_opt(dt.get_year(), dt.get_month() as u32, dt.get_day() as u32)
            .and_then(|date| {
                date.and_hms_opt(dt.get_hour() as u32, dt.get_minute() as u32, dt.get_second() as u32)
            })
            .ok_or_else(|| PyErr::new::<pyo3::exceptions::PyValueError, _>("Invalid datetime"))?;
        return Ok(Value::Date(datetime));
    }

    if let Ok(d) = value.downcast::<PyDate>() {
        use pyo3::types::PyDateAccess;
        let date = NaiveDate::from_ymd_opt(d.get_year(), d.get_month() as u32, d.get_day() as u32)
            .ok_or_else(|| PyErr::new::<pyo3::exceptions::PyValueError, _>("Invalid date"))?;
        return Ok(Value::from(date));
    }

    Ok(Value::String(value.str()?.to_string()))
}

/// A list of dicts becomes keyed rows; any other item is a bare value row.
fn extract_rows(rows: &Bound<PyList>) -> PyResult<Vec<Row>> {
    let mut result = Vec::with_capacity(rows.len());
    for item in rows.iter() {
        if let Ok(dict) = item.downcast::<PyDict>() {
            let mut record = Record::with_capacity(dict.len());
            for (key, value) in dict.iter() {
                record.insert(key.str()?.to_string(), value_from_py(&value)?);
            }
            result.push(Row::Record(record));
        } else {
            result.push(Row::Value(value_from_py(&item)?));
        }
    }
    Ok(result)
}

#[pyfunction]
#[pyo3(signature = (rows, delimiter = None, file_type = "csv"))]
fn export_csv(
    py: Python,
    rows: Bound<PyList>,
    delimiter: Option<String>,
    file_type: &str,
) -> PyResult<String> {
    let rows = extract_rows(&rows)?;
    let file_type: CsvFileType = file_type.parse().map_err(to_py_err)?;
    let mut options = CsvExporterOptions::new("ExportedData", file_type);
    options.set_value_delimiter(delimiter.as_deref());

    py.detach(|| CsvExporter::new().export_data(&rows, &options).map_err(to_py_err))
}

#[pyfunction]
#[pyo3(signature = (
    rows,
    column_width = None,
    row_height = None,
    export_as_table = true,
    worksheet_name = None,
))]
fn export_excel<'py>(
    py: Python<'py>,
    rows: Bound<'py, PyList>,
    column_width: Option<f64>,
    row_height: Option<f64>,
    export_as_table: bool,
    worksheet_name: Option<String>,
) -> PyResult<Bound<'py, PyBytes>> {
    let rows = extract_rows(&rows)?;
    let mut options = ExcelExporterOptions::default();
    options.set_column_width(column_width).map_err(to_py_err)?;
    options.set_row_height(row_height).map_err(to_py_err)?;
    options.export_as_table = export_as_table;
    if let Some(name) = worksheet_name {
        options.set_worksheet_name(&name).map_err(to_py_err)?;
    }

    let bytes = py.detach(|| {
        ExcelExporter::new()
            .export_data(&rows, &options, &GridState::default())
            .map_err(to_py_err)
    })?;
    Ok(PyBytes::new(py, &bytes))
}

#[pymodule]
fn gridexport(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(export_csv, m)?)?;
    m.add_function(wrap_pyfunction!(export_excel, m)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;

    fn eval_list<'py>(py: Python<'py>, code: &CStr) -> Bound<'py, PyList> {
        py.eval(code, None, None)
            .unwrap()
            .downcast_into::<PyList>()
            .unwrap()
    }

    #[test]
    fn scalars_map_to_values() {
        Python::initialize();
        Python::attach(|py| {
            let items = eval_list(
                py,
                c"[True, 1, 2.5, None, 'x', __import__('datetime').datetime(2020, 5, 17, 10, 30), __import__('datetime').date(2020, 5, 17)]",
            );
            let rows = extract_rows(&items).unwrap();
            let values: Vec<Value> = rows
                .into_iter()
                .map(|row| match row {
                    Row::Value(v) => v,
                    Row::Record(_) => panic!("expected bare values"),
                })
                .collect();

            let day = NaiveDate::from_ymd_opt(2020, 5, 17).unwrap();
            assert_eq!(
                values,
                [
                    Value::Bool(true),
                    Value::Number(1.0),
                    Value::Number(2.5),
                    Value::Null,
                    Value::from("x"),
                    Value::Date(day.and_hms_opt(10, 30, 0).unwrap()),
                    Value::from(day),
                ]
            );
        });
    }

    #[test]
    fn dicts_become_ordered_records() {
        Python::initialize();
        Python::attach(|py| {
            let items = eval_list(py, c"[{'z': False, 'a': 3}, {'a': None}]");
            let rows = extract_rows(&items).unwrap();
            let first = rows[0].as_record().unwrap();
            assert_eq!(first.keys().collect::<Vec<_>>(), ["z", "a"]);
            assert_eq!(first["z"], Value::Bool(false));
            assert_eq!(first["a"], Value::Number(3.0));
            assert_eq!(rows[1].get("a"), Some(&Value::Null));
        });
    }
}
