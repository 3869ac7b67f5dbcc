//! State

use std::sync::Arc;

use fleuron_app::context::AppContext;

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,

    /// Mark issued session cookies `Secure`.
    pub(crate) session_cookie_secure: bool,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, session_cookie_secure: bool) -> Self {
        Self {
            app,
            session_cookie_secure,
        }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext, session_cookie_secure: bool) -> Arc<Self> {
        Arc::new(Self::new(app, session_cookie_secure))
    }
}
