//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::user_handler;
use crate::domain::{CreateUser, UserResponse};
use crate::errors::ErrorResponse;

/// OpenAPI documentation for the User Registry
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Registry",
        version = "0.1.0",
        description = "Register users and look them up by username",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(
        user_handler::create_user,
        user_handler::list_users,
        user_handler::get_user,
    ),
    components(
        schemas(
            CreateUser,
            UserResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Users", description = "User registration and lookup")
    )
)]
pub struct ApiDoc;
