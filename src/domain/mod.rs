//! Domain layer - the User entity and its contracts.
//!
//! Nothing here touches the database or HTTP; the infra layer converts its
//! rows into these types and the api layer serializes `UserResponse`.

pub mod secret;
pub mod user;

pub use secret::Secret;
pub use user::{CreateUser, User, UserResponse};
