//! Login Handler

use std::sync::Arc;

use salvo::{
    http::cookie::Cookie,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use fleuron_app::auth::AuthServiceError;

use crate::{
    auth::handlers::current::CurrentUserResponse,
    auth::middleware::SESSION_COOKIE,
    extensions::DepotExt as _,
    state::State,
};

/// Login Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login Handler
///
/// Verifies credentials and sets the session cookie.
#[endpoint(
    tags("auth"),
    summary = "Log In",
    responses(
        (status_code = StatusCode::OK, description = "Signed in"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Invalid email or password"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<LoginRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CurrentUserResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let session = match state.app.auth.login(&request.email, &request.password).await {
        Ok(session) => session,
        Err(AuthServiceError::InvalidCredentials) => {
            return Err(StatusError::unauthorized().brief("Invalid email or password"));
        }
        Err(source) => {
            error!("failed to log in: {source}");

            return Err(StatusError::internal_server_error());
        }
    };

    let mut cookie = Cookie::new(SESSION_COOKIE, session.token);

    cookie.set_path("/");
    cookie.set_http_only(true);

    if state.session_cookie_secure {
        cookie.set_secure(true);
    }

    res.add_cookie(cookie);

    Ok(Json(session.user.into()))
}

#[cfg(test)]
mod tests {
    use fleuron_app::{
        auth::{MockAuthService, models::{AuthenticatedUser, IssuedSession}},
        domain::users::models::{UserRole, UserUuid},
    };
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use crate::test_helpers::{app_context_with_auth, public_service};

    use super::*;

    fn make_session() -> IssuedSession {
        IssuedSession {
            token: "fl_v1_fresh".to_string(),
            user: AuthenticatedUser {
                uuid: UserUuid::new(),
                email: "florist@example.com".to_string(),
                display_name: "Florist".to_string(),
                role: UserRole::Admin,
            },
            expires_at: jiff::Timestamp::UNIX_EPOCH,
        }
    }

    fn make_service(auth: MockAuthService) -> Service {
        public_service(
            app_context_with_auth(auth),
            Router::with_path("auth/login").post(handler),
        )
    }

    #[tokio::test]
    async fn test_login_success_sets_cookie() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_login()
            .once()
            .withf(|email, password| email == "florist@example.com" && password == "pw")
            .return_once(|_, _| Ok(make_session()));

        let mut res = TestClient::post("http://example.com/auth/login")
            .json(&json!({ "email": "florist@example.com", "password": "pw" }))
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let set_cookie = res
            .headers()
            .get("set-cookie")
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_owned();

        assert!(
            set_cookie.contains("fleuron_session=fl_v1_fresh"),
            "session cookie should be set, got {set_cookie:?}"
        );
        assert!(
            set_cookie.contains("HttpOnly"),
            "session cookie should be HttpOnly, got {set_cookie:?}"
        );

        let body: CurrentUserResponse = res.take_json().await?;

        assert_eq!(body.email, "florist@example.com");

        Ok(())
    }

    #[tokio::test]
    async fn test_bad_credentials_return_401() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_login()
            .once()
            .return_once(|_, _| Err(AuthServiceError::InvalidCredentials));

        let res = TestClient::post("http://example.com/auth/login")
            .json(&json!({ "email": "florist@example.com", "password": "nope" }))
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }
}
