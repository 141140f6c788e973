//! Opaque-cursor pagination primitive.
//!
//! Cursors are base64url-encoded JSON records carrying a non-negative
//! offset, defined as "one past the last item already seen". Clients treat
//! them as black boxes: the only valid inputs are values previously handed
//! out by [`encode_cursor`], and anything else is rejected rather than
//! coerced to offset zero.
//!
//! Page assembly uses a look-ahead over-fetch: callers request `first + 1`
//! rows and [`paginate`] trims the surplus row while using its presence to
//! report `hasNextPage` without a second count query.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejection for any cursor string not produced by [`encode_cursor`].
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid pagination cursor")]
pub struct InvalidCursor;

#[derive(Serialize, Deserialize)]
struct CursorData {
    offset: i64,
}

/// One item of a page together with the cursor that resumes iteration
/// immediately after it.
#[derive(Debug, Clone, Serialize)]
pub struct Edge<T> {
    pub node: T,
    pub cursor: String,
}

/// Connection-style page metadata.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

/// An assembled page of edges.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub edges: Vec<Edge<T>>,
    pub page_info: PageInfo,
}

impl<T> Page<T> {
    /// Maps the node type of every edge, keeping cursors and page info.
    pub fn map<U>(self, f: impl Fn(T) -> U) -> Page<U> {
        Page {
            edges: self
                .edges
                .into_iter()
                .map(|e| Edge {
                    node: f(e.node),
                    cursor: e.cursor,
                })
                .collect(),
            page_info: self.page_info,
        }
    }
}

/// Encodes a resumption offset as an opaque, URL-safe cursor string.
pub fn encode_cursor(offset: i64) -> String {
    let data = CursorData { offset };
    // CursorData serialization cannot fail.
    let json = serde_json::to_vec(&data).expect("cursor serialization");
    URL_SAFE_NO_PAD.encode(json)
}

/// Decodes an optional cursor into a fetch offset.
///
/// Absent or empty cursors mean "start from the beginning". Present cursors
/// must round-trip through [`encode_cursor`]; malformed base64, malformed
/// JSON, and negative offsets are all [`InvalidCursor`].
pub fn decode_cursor(cursor: Option<&str>) -> Result<i64, InvalidCursor> {
    let cursor = match cursor {
        None | Some("") => return Ok(0),
        Some(c) => c,
    };

    let raw = URL_SAFE_NO_PAD.decode(cursor).map_err(|_| InvalidCursor)?;
    let data: CursorData = serde_json::from_slice(&raw).map_err(|_| InvalidCursor)?;

    if data.offset < 0 {
        return Err(InvalidCursor);
    }
    Ok(data.offset)
}

/// Returns the row count a data source should be asked for so that
/// [`paginate`] can detect a following page.
pub fn fetch_limit(first: i64) -> i64 {
    first + 1
}

/// Assembles a page from an over-fetched result slice.
///
/// `items` is expected to hold up to `first + 1` rows fetched at `offset`.
/// The surplus row, when present, is dropped and reported as `hasNextPage`.
/// Each surviving edge's cursor resumes immediately after that item
/// regardless of page size, so interleaved requests with different `first`
/// values still iterate without gaps or repeats.
pub fn paginate<T>(items: Vec<T>, offset: i64, first: i64) -> Page<T> {
    let has_next_page = items.len() as i64 > first;

    let edges = items
        .into_iter()
        .take(first.max(0) as usize)
        .enumerate()
        .map(|(i, node)| Edge {
            cursor: encode_cursor(offset + i as i64 + 1),
            node,
        })
        .collect();

    Page {
        edges,
        page_info: PageInfo {
            has_next_page,
            has_previous_page: offset > 0,
        },
    }
}
