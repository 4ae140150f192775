//! Offset/limit query parameters for list endpoints.

use serde::Deserialize;
use utoipa::IntoParams;

use crate::config::{DEFAULT_LIMIT, DEFAULT_SKIP};

/// `?skip=&limit=` query parameters.
///
/// Values are accepted as signed integers so a negative number is not a
/// parse error; it is clamped to zero when turned into a storage window.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Number of users to skip
    #[serde(default = "default_skip")]
    #[param(default = 0, example = 0)]
    pub skip: i64,
    /// Maximum number of users to return
    #[serde(default = "default_limit")]
    #[param(default = 10, example = 10)]
    pub limit: i64,
}

fn default_skip() -> i64 {
    DEFAULT_SKIP
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

impl ListParams {
    /// Rows to skip
    pub fn offset(&self) -> u64 {
        self.skip.max(0) as u64
    }

    /// Rows to return
    pub fn limit(&self) -> u64 {
        self.limit.max(0) as u64
    }
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            skip: DEFAULT_SKIP,
            limit: DEFAULT_LIMIT,
        }
    }
}
