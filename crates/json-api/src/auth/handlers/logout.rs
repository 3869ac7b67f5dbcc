//! Logout Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    auth::middleware::{SESSION_COOKIE, session_token},
    extensions::{DepotExt as _, ResultExt as _},
    state::State,
};

/// Logout Handler
///
/// Revokes the current session and clears the cookie. Idempotent.
#[endpoint(
    tags("auth"),
    summary = "Log Out",
    security(("session_cookie" = []))
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    if let Some(token) = session_token(req) {
        state
            .app
            .auth
            .logout(&token)
            .await
            .or_500("failed to revoke session")?;
    }

    res.remove_cookie(SESSION_COOKIE);

    Ok(StatusCode::NO_CONTENT)
}
