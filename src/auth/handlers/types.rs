/**
 * Authentication Handler Types
 *
 * Request and response types shared by the signup, login, and get_me
 * handlers.
 */

use serde::{Deserialize, Serialize};

use crate::auth::users::User;

/// Sign up request
#[derive(Deserialize, Serialize, Debug)]
pub struct SignupRequest {
    /// Display name
    pub name: String,
    /// Email address (login key)
    pub email: String,
    /// Raw password (hashed before storage, never logged)
    pub password: String,
    /// Avatar URL, if the client already uploaded one to the image host
    #[serde(default)]
    pub url_photo: Option<String>,
}

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Auth response
///
/// Returned by signup and login. Carries the signed token and the public
/// slice of the user record.
#[derive(Serialize, Debug)]
pub struct AuthResponse {
    /// JWT for `Authorization: Bearer <token>` (24h expiry)
    pub token: String,
    pub user: UserResponse,
}

/// User response (without sensitive data)
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub url_photo: Option<String>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            email: user.email.clone(),
            url_photo: user.url_photo.clone(),
        }
    }
}
