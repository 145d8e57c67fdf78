//! User authentication against the catalog

use crate::catalog::{Catalog, User};

/// Outcome of an authentication attempt - reported, never raised
#[derive(Debug, Clone)]
pub struct AuthResponse {
    pub success: bool,
    pub user: Option<User>,
    pub message: String,
}

/// Look up a user by username (case-insensitive)
pub fn authenticate(catalog: &Catalog, username: &str) -> AuthResponse {
    match catalog
        .users
        .iter()
        .find(|u| u.username.eq_ignore_ascii_case(username))
    {
        Some(user) => AuthResponse {
            success: true,
            user: Some(user.clone()),
            message: "Authentication successful".to_string(),
        },
        None => AuthResponse {
            success: false,
            user: None,
            message: "User not found".to_string(),
        },
    }
}

/// Whether a user may access private repositories and components.
///
/// Access requires both the flag and an actual token to clone with.
pub fn has_private_access(user: &User) -> bool {
    user.has_private_access && user.github_token.is_some()
}
