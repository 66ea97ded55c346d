// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors reported by a catalog store.
///
/// None of these reach the search caller: [`crate::Catalog`] logs them
/// and serves the fallback dataset instead.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store cannot be reached.
    #[error("Catalog store unavailable: {0}")]
    Unavailable(String),

    /// The store rejected or failed a query.
    #[error("Catalog query failed: {0}")]
    QueryFailed(String),

    /// A record does not have the expected shape.
    #[error("Malformed catalog record {id}: {reason}")]
    MalformedRecord { id: i64, reason: String },

    /// Reading a catalog file failed.
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// A catalog file is not valid JSON.
    #[error("Failed to parse catalog file: {0}")]
    Json(#[from] serde_json::Error),
}
