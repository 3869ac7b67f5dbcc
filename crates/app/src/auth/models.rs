//! Auth Models

use jiff::Timestamp;

use crate::{
    domain::users::models::{UserRole, UserUuid},
    uuids::TypedUuid,
};

/// Session marker type.
#[derive(Debug)]
pub struct Session;

/// Session UUID
pub type SessionUuid = TypedUuid<Session>;

/// The resolved identity behind an authenticated request.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticatedUser {
    pub uuid: UserUuid,
    pub email: String,
    pub display_name: String,
    pub role: UserRole,
}

/// A freshly issued session. The raw token exists only in this value; the
/// store keeps a digest.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: String,
    pub user: AuthenticatedUser,
    pub expires_at: Timestamp,
}
