//! Cursor pagination query parameters.

use serde::Deserialize;
use serde_json::json;
use serde_with::{DisplayFromStr, serde_as};

use crate::domain::pagination::decode_cursor;
use crate::error::AppError;

const DEFAULT_FIRST: i64 = 25;
const MAX_FIRST: i64 = 100;

/// `?first=N&after=<cursor>` query parameters shared by every list endpoint.
///
/// Uses `serde_with` to parse the page size from query strings as an integer.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct CursorQueryParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub first: Option<i64>,

    #[serde(default)]
    pub after: Option<String>,
}

impl CursorQueryParams {
    /// Validates the parameters and resolves the cursor to a fetch offset.
    ///
    /// # Defaults
    ///
    /// - `first`: 25 (max 100)
    /// - `after` absent: offset 0
    ///
    /// # Errors
    ///
    /// Returns 400 for an out-of-range `first` or a cursor this system did
    /// not produce. A bad cursor is never coerced to offset 0.
    pub fn resolve(&self) -> Result<(i64, i64), AppError> {
        let first = self.first.unwrap_or(DEFAULT_FIRST);
        if !(1..=MAX_FIRST).contains(&first) {
            return Err(AppError::bad_request(
                format!("first must be between 1 and {MAX_FIRST}"),
                json!({ "first": first }),
            ));
        }

        let offset = decode_cursor(self.after.as_deref())
            .map_err(|_| AppError::bad_request("Invalid pagination cursor", json!({})))?;

        Ok((offset, first))
    }
}
