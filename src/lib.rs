//! User Registry - a small user registration API.
//!
//! Exposes create / list / get-by-username over HTTP, backed by a single
//! `users` table managed through SeaORM.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: User entity and its request/response contracts
//! - **services**: Use cases (registration, lookup, listing)
//! - **infra**: Database connection, migrations and the user repository
//! - **api**: HTTP handlers, extractors and routes
//! - **types**: Shared request types (list parameters)
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Create the schema
//! cargo run -- migrate up
//!
//! # Start the server
//! cargo run -- serve
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::{create_router, AppState};
pub use config::Config;
pub use domain::{CreateUser, Secret, User, UserResponse};
pub use errors::{AppError, AppResult};
pub use infra::Database;
