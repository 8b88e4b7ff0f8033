use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use arrow::array::{Array, AsArray};
use arrow::datatypes::{DataType, Float32Type, Float64Type, Int32Type, Int64Type};
use arrow::util::display::array_value_to_string;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::model::{Column, Dataset, Value};

/// Cell texts read as missing, as a dataframe reader would.
const NA_TOKENS: &[&str] = &["", "NA", "N/A", "NaN", "nan", "null", "NULL", "None"];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a tabular dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.parquet` – flat Parquet file, one column per field (recommended)
/// * `.json`    – `[{ "col": value, ... }, ...]`
/// * `.csv`     – header row followed by one record per row
pub fn load_file(path: &Path) -> Result<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "parquet" | "pq" => load_parquet(path),
        "json" => load_json(path),
        "csv" => load_csv(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
    .with_context(|| format!("loading {}", path.display()))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "TARGET": 1, "CODE_GENDER": "F", "AMT_CREDIT": 406597.5 },
///   { "TARGET": 0, "CODE_GENDER": "M", "AMT_CREDIT": null },
///   ...
/// ]
/// ```
///
/// Columns are ordered by first appearance; a key absent from a record is null.
/// Integer columns holding any float are promoted to float.
fn load_json(path: &Path) -> Result<Dataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let records = root
        .as_array()
        .context("Expected top-level JSON array")?;

    let mut names: Vec<String> = Vec::new();
    let mut objects = Vec::with_capacity(records.len());

    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;
        for key in obj.keys() {
            if !names.contains(key) {
                names.push(key.clone());
            }
        }
        objects.push(obj);
    }

    let columns = names
        .into_iter()
        .map(|name| {
            let mut values: Vec<Value> = objects
                .iter()
                .map(|obj| obj.get(&name).map_or(Value::Null, json_to_value))
                .collect();
            promote_numeric(&mut values);
            Column { name, values }
        })
        .collect();

    Ok(Dataset::new(columns)?)
}

fn json_to_value(val: &JsonValue) -> Value {
    match val {
        JsonValue::String(s) => Value::String(s.clone()),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Integer(i)
            } else if let Some(f) = n.as_f64() {
                Value::Float(f)
            } else {
                Value::String(n.to_string())
            }
        }
        JsonValue::Bool(b) => Value::Bool(*b),
        JsonValue::Null => Value::Null,
        other => Value::String(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout:  header row with column names, one record per row.
/// Each cell is typed on its own (integer, float, bool, else string),
/// then a column mixing integers and floats becomes all floats.
/// Empty cells and the usual NA spellings are null.
fn load_csv(path: &Path) -> Result<Dataset> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut columns: Vec<Vec<Value>> = vec![Vec::new(); headers.len()];

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        for (col_idx, value) in record.iter().enumerate() {
            columns[col_idx].push(guess_value_type(value));
        }
    }

    let columns = headers
        .into_iter()
        .zip(columns)
        .map(|(name, mut values)| {
            promote_numeric(&mut values);
            Column { name, values }
        })
        .collect();

    Ok(Dataset::new(columns)?)
}

/// Give a column a single numeric dtype: when every present cell is a number
/// and at least one is a float, integers are widened to floats.
fn promote_numeric(values: &mut [Value]) {
    let mut has_float = false;
    for v in values.iter() {
        match v {
            Value::Float(_) => has_float = true,
            Value::Integer(_) | Value::Null => {}
            _ => return,
        }
    }
    if !has_float {
        return;
    }
    for v in values.iter_mut() {
        if let Value::Integer(i) = *v {
            *v = Value::Float(i as f64);
        }
    }
}

fn guess_value_type(s: &str) -> Value {
    let s = s.trim();
    if NA_TOKENS.contains(&s) {
        return Value::Null;
    }
    if let Ok(i) = s.parse::<i64>() {
        return Value::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return Value::Float(f);
    }
    if s == "true" || s == "false" {
        return Value::Bool(s == "true");
    }
    Value::String(s.to_string())
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a flat Parquet file.  Every field becomes one column, in schema order.
///
/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`).
fn load_parquet(path: &Path) -> Result<Dataset> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .context("reading parquet metadata")?;

    let names: Vec<String> = builder
        .schema()
        .fields()
        .iter()
        .map(|f| f.name().clone())
        .collect();
    let mut columns: Vec<Vec<Value>> = vec![Vec::new(); names.len()];

    let reader = builder.build().context("building parquet reader")?;

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        for (col_idx, values) in columns.iter_mut().enumerate() {
            let array = batch.column(col_idx);
            for row in 0..batch.num_rows() {
                let value = extract_value(array, row)
                    .with_context(|| format!("column '{}', row {row}", names[col_idx]))?;
                values.push(value);
            }
        }
    }

    let columns = names
        .into_iter()
        .zip(columns)
        .map(|(name, values)| Column { name, values })
        .collect();

    Ok(Dataset::new(columns)?)
}

// -- Parquet / Arrow helpers --

/// Extract a single cell from an Arrow column at a given row.
fn extract_value(col: &Arc<dyn Array>, row: usize) -> Result<Value> {
    if col.is_null(row) {
        return Ok(Value::Null);
    }
    let value = match col.data_type() {
        DataType::Utf8 => Value::String(col.as_string::<i32>().value(row).to_string()),
        DataType::LargeUtf8 => Value::String(col.as_string::<i64>().value(row).to_string()),
        DataType::Int32 => Value::Integer(col.as_primitive::<Int32Type>().value(row) as i64),
        DataType::Int64 => Value::Integer(col.as_primitive::<Int64Type>().value(row)),
        DataType::Float32 => Value::Float(col.as_primitive::<Float32Type>().value(row) as f64),
        DataType::Float64 => Value::Float(col.as_primitive::<Float64Type>().value(row)),
        DataType::Boolean => Value::Bool(col.as_boolean().value(row)),
        DataType::Date32 | DataType::Date64 => {
            Value::Date(array_value_to_string(col.as_ref(), row)?)
        }
        // Dictionary-encoded categoricals and anything else: keep the text form.
        _ => Value::String(array_value_to_string(col.as_ref(), row)?),
    };
    Ok(value)
}
