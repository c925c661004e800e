//! Conversion of dynamically-shaped rows into JSON values.
//!
//! Projection queries select a caller-chosen column list, so there is no
//! typed struct to decode into. Each column is decoded by trying the
//! plausible Postgres types in turn.

use serde_json::Value;
use sqlx::postgres::PgRow;
use sqlx::Row;

/// Convert one row to a JSON array, columns in SELECT order.
pub fn row_to_values(row: &PgRow) -> Vec<Value> {
    (0..row.len()).map(|i| column_to_value(row, i)).collect()
}

fn column_to_value(row: &PgRow, index: usize) -> Value {
    if let Ok(v) = row.try_get::<Option<i32>, _>(index) {
        return v.map(|n| Value::Number(n.into())).unwrap_or(Value::Null);
    }
    if let Ok(v) = row.try_get::<Option<i64>, _>(index) {
        return v.map(|n| Value::Number(n.into())).unwrap_or(Value::Null);
    }
    if let Ok(v) = row.try_get::<Option<f64>, _>(index) {
        return v
            .and_then(serde_json::Number::from_f64)
            .map(Value::Number)
            .unwrap_or(Value::Null);
    }
    if let Ok(v) = row.try_get::<Option<bool>, _>(index) {
        return v.map(Value::Bool).unwrap_or(Value::Null);
    }
    if let Ok(v) = row.try_get::<Option<String>, _>(index) {
        return v.map(Value::String).unwrap_or(Value::Null);
    }
    Value::Null
}
