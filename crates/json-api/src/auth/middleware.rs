//! Session middleware.

use std::sync::Arc;

use fleuron_app::auth::AuthServiceError;
use salvo::prelude::*;
use tracing::error;

use crate::{
    extensions::{CurrentUserExt, DepotExt as _},
    state::State,
};

/// Name of the session cookie.
pub(crate) const SESSION_COOKIE: &str = "fleuron_session";

/// Extract the raw session token from the request cookie.
pub(crate) fn session_token(req: &Request) -> Option<String> {
    req.cookie(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
}

/// Resolve the session cookie to a user and stash it in the depot; requests
/// without a live session stop here with 401.
#[salvo::handler]
pub(crate) async fn require_session(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let Some(token) = session_token(req) else {
        res.render(StatusError::unauthorized().brief("Missing session cookie"));

        return;
    };

    let state = match depot.obtain::<Arc<State>>() {
        Ok(state) => state,
        Err(_error) => {
            res.render(StatusError::internal_server_error());

            return;
        }
    };

    let user = match state.app.auth.authenticate(&token).await {
        Ok(user) => user,
        Err(AuthServiceError::NotFound | AuthServiceError::InvalidCredentials) => {
            res.render(StatusError::unauthorized().brief("Invalid or expired session"));

            return;
        }
        Err(AuthServiceError::Clock) => {
            error!("session expiry computation failed during authentication");

            res.render(StatusError::internal_server_error());

            return;
        }
        Err(AuthServiceError::Sql(source)) => {
            error!("failed to resolve session: {source}");

            res.render(StatusError::internal_server_error());

            return;
        }
    };

    depot.insert_current_user(user);

    ctrl.call_next(req, depot, res).await;
}

/// Require the resolved user to carry the admin role.
#[salvo::handler]
pub(crate) async fn require_admin(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    match depot.admin_or_403() {
        Ok(_user) => {}
        Err(status_error) => {
            res.render(status_error);

            return;
        }
    }

    ctrl.call_next(req, depot, res).await;
}
