//! User Data

use crate::domain::users::models::{UserRole, UserUuid};

/// New User Data
///
/// Carries the plaintext password only as far as the service, which stores
/// a digest.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub uuid: UserUuid,
    pub email: String,
    pub password: String,
    pub display_name: String,
    pub role: UserRole,
}
