//! Current User Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fleuron_app::auth::models::AuthenticatedUser;

use crate::extensions::CurrentUserExt as _;

/// Authenticated user as exposed over the wire.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CurrentUserResponse {
    /// The user's unique identifier
    pub uuid: Uuid,

    /// Login email
    pub email: String,

    /// Display name
    pub display_name: String,

    /// Role, `admin` or `user`
    pub role: String,
}

impl From<AuthenticatedUser> for CurrentUserResponse {
    fn from(user: AuthenticatedUser) -> Self {
        Self {
            uuid: user.uuid.into(),
            email: user.email,
            display_name: user.display_name,
            role: user.role.to_string(),
        }
    }
}

/// Current User Handler
///
/// Returns the user behind the request's session cookie.
#[endpoint(
    tags("auth"),
    summary = "Current User",
    security(("session_cookie" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CurrentUserResponse>, StatusError> {
    let user = depot.current_user_or_401()?;

    Ok(Json(user.clone().into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::test_helpers::{authed_service, empty_app_context};

    use super::*;

    #[tokio::test]
    async fn test_current_returns_injected_user() -> TestResult {
        let service = authed_service(
            empty_app_context(),
            Router::with_path("auth/current").get(handler),
        );

        let response: CurrentUserResponse = TestClient::get("http://example.com/auth/current")
            .send(&service)
            .await
            .take_json()
            .await?;

        assert_eq!(response.role, "admin");

        Ok(())
    }
}
