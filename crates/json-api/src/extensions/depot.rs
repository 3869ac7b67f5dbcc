//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};

use fleuron_app::{auth::models::AuthenticatedUser, domain::users::models::UserRole};

const CURRENT_USER_DEPOT_KEY: &str = "current_user";

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }
}

/// Access to the authenticated user resolved by the session middleware.
pub(crate) trait CurrentUserExt {
    fn insert_current_user(&mut self, user: AuthenticatedUser);

    fn current_user_or_401(&self) -> Result<&AuthenticatedUser, StatusError>;

    /// The current user, required to be an admin.
    fn admin_or_403(&self) -> Result<&AuthenticatedUser, StatusError>;
}

impl CurrentUserExt for Depot {
    fn insert_current_user(&mut self, user: AuthenticatedUser) {
        self.insert(CURRENT_USER_DEPOT_KEY, user);
    }

    fn current_user_or_401(&self) -> Result<&AuthenticatedUser, StatusError> {
        self.get::<AuthenticatedUser>(CURRENT_USER_DEPOT_KEY)
            .map_err(|_ignored| StatusError::unauthorized().brief("Not signed in"))
    }

    fn admin_or_403(&self) -> Result<&AuthenticatedUser, StatusError> {
        let user = self.current_user_or_401()?;

        if user.role != UserRole::Admin {
            return Err(StatusError::forbidden().brief("Admin role required"));
        }

        Ok(user)
    }
}
