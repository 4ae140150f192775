//! Request extractors that reject with `AppError` instead of axum's
//! plain-text rejections.

mod api_json;
mod api_query;

pub use api_json::ApiJson;
pub use api_query::ApiQuery;
