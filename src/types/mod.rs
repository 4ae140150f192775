//! Shared request types.

mod pagination;

pub use pagination::ListParams;
