//! Column decoding shared by the repositories.
//!
//! Ids are stored as hyphenated UUID text, timestamps as Unix
//! milliseconds and string lists as JSON arrays.

use crate::{DbError, Result as DbErrorResult};

use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

pub(crate) fn millis(timestamp: DateTime<Utc>) -> i64 {
    timestamp.timestamp_millis()
}

#[track_caller]
pub(crate) fn encode_list(column: &'static str, values: &[String]) -> DbErrorResult<String> {
    serde_json::to_string(values).map_err(|e| DbError::encode(column, e))
}

#[track_caller]
pub(crate) fn encode_json(column: &'static str, value: Option<&Value>) -> DbErrorResult<Option<String>> {
    value
        .map(serde_json::to_string)
        .transpose()
        .map_err(|e| DbError::encode(column, e))
}

pub(crate) struct RowReader<'r> {
    row: &'r SqliteRow,
    table: &'static str,
}

impl<'r> RowReader<'r> {
    pub(crate) fn new(row: &'r SqliteRow, table: &'static str) -> Self {
        Self { row, table }
    }

    pub(crate) fn string(&self, column: &'static str) -> DbErrorResult<String> {
        Ok(self.row.try_get::<String, _>(column)?)
    }

    pub(crate) fn optional_string(&self, column: &'static str) -> DbErrorResult<Option<String>> {
        Ok(self.row.try_get::<Option<String>, _>(column)?)
    }

    pub(crate) fn int(&self, column: &'static str) -> DbErrorResult<i32> {
        let value = self.row.try_get::<i64, _>(column)?;
        i32::try_from(value).map_err(|e| DbError::decode(self.table, column, e.to_string()))
    }

    pub(crate) fn uuid(&self, column: &'static str) -> DbErrorResult<Uuid> {
        let raw = self.string(column)?;
        Uuid::parse_str(&raw)
            .map_err(|e| DbError::decode(self.table, column, format!("Invalid UUID: {}", e)))
    }

    pub(crate) fn optional_uuid(&self, column: &'static str) -> DbErrorResult<Option<Uuid>> {
        self.optional_string(column)?
            .map(|raw| {
                Uuid::parse_str(&raw).map_err(|e| {
                    DbError::decode(self.table, column, format!("Invalid UUID: {}", e))
                })
            })
            .transpose()
    }

    pub(crate) fn timestamp(&self, column: &'static str) -> DbErrorResult<DateTime<Utc>> {
        let raw = self.row.try_get::<i64, _>(column)?;
        DateTime::from_timestamp_millis(raw)
            .ok_or_else(|| DbError::decode(self.table, column, "Timestamp out of range"))
    }

    pub(crate) fn optional_timestamp(
        &self,
        column: &'static str,
    ) -> DbErrorResult<Option<DateTime<Utc>>> {
        self.row
            .try_get::<Option<i64>, _>(column)?
            .map(|raw| {
                DateTime::from_timestamp_millis(raw)
                    .ok_or_else(|| DbError::decode(self.table, column, "Timestamp out of range"))
            })
            .transpose()
    }

    pub(crate) fn list(&self, column: &'static str) -> DbErrorResult<Vec<String>> {
        let raw = self.string(column)?;
        serde_json::from_str(&raw)
            .map_err(|e| DbError::decode(self.table, column, format!("Invalid JSON list: {}", e)))
    }

    pub(crate) fn optional_json(&self, column: &'static str) -> DbErrorResult<Option<Value>> {
        self.optional_string(column)?
            .map(|raw| {
                serde_json::from_str(&raw).map_err(|e| {
                    DbError::decode(self.table, column, format!("Invalid JSON: {}", e))
                })
            })
            .transpose()
    }

    /// Decode a column through the domain type's `FromStr`.
    pub(crate) fn parsed<T>(&self, column: &'static str) -> DbErrorResult<T>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        let raw = self.string(column)?;
        raw.parse::<T>()
            .map_err(|e| DbError::decode(self.table, column, e.to_string()))
    }
}
