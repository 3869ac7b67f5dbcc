//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use fleuron_app::{
    auth::{MockAuthService, models::AuthenticatedUser},
    context::AppContext,
    domain::{
        bouquets::MockBouquetsService,
        categories::MockCategoriesService,
        files::MockFilesService,
        flowers::MockFlowersService,
        orders::MockOrdersService,
        products::MockProductsService,
        reviews::MockReviewsService,
        users::{
            MockUsersService,
            models::{UserRole, UserUuid},
        },
    },
};

use crate::{extensions::CurrentUserExt as _, state::State};

/// Fixed identity injected by [`user_service`].
pub(crate) const TEST_USER_UUID: Uuid = Uuid::from_u128(7);

/// An app context where every service is an expectation-free mock; any
/// call on an unconfigured service fails the test.
pub(crate) fn empty_app_context() -> AppContext {
    AppContext {
        categories: Arc::new(MockCategoriesService::new()),
        flowers: Arc::new(MockFlowersService::new()),
        products: Arc::new(MockProductsService::new()),
        bouquets: Arc::new(MockBouquetsService::new()),
        orders: Arc::new(MockOrdersService::new()),
        reviews: Arc::new(MockReviewsService::new()),
        files: Arc::new(MockFilesService::new()),
        users: Arc::new(MockUsersService::new()),
        auth: Arc::new(MockAuthService::new()),
    }
}

pub(crate) fn app_context_with_categories(categories: MockCategoriesService) -> AppContext {
    AppContext {
        categories: Arc::new(categories),
        ..empty_app_context()
    }
}

pub(crate) fn app_context_with_flowers(flowers: MockFlowersService) -> AppContext {
    AppContext {
        flowers: Arc::new(flowers),
        ..empty_app_context()
    }
}

pub(crate) fn app_context_with_products(products: MockProductsService) -> AppContext {
    AppContext {
        products: Arc::new(products),
        ..empty_app_context()
    }
}

pub(crate) fn app_context_with_bouquets(bouquets: MockBouquetsService) -> AppContext {
    AppContext {
        bouquets: Arc::new(bouquets),
        ..empty_app_context()
    }
}

pub(crate) fn app_context_with_orders(orders: MockOrdersService) -> AppContext {
    AppContext {
        orders: Arc::new(orders),
        ..empty_app_context()
    }
}

pub(crate) fn app_context_with_reviews(reviews: MockReviewsService) -> AppContext {
    AppContext {
        reviews: Arc::new(reviews),
        ..empty_app_context()
    }
}

pub(crate) fn app_context_with_files(files: MockFilesService) -> AppContext {
    AppContext {
        files: Arc::new(files),
        ..empty_app_context()
    }
}

pub(crate) fn app_context_with_auth(auth: MockAuthService) -> AppContext {
    AppContext {
        auth: Arc::new(auth),
        ..empty_app_context()
    }
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    Arc::new(State::new(app_context_with_auth(auth), false))
}

pub(crate) fn test_admin() -> AuthenticatedUser {
    AuthenticatedUser {
        uuid: UserUuid::from_uuid(Uuid::from_u128(1)),
        email: "admin@example.com".to_string(),
        display_name: "Admin".to_string(),
        role: UserRole::Admin,
    }
}

pub(crate) fn test_user() -> AuthenticatedUser {
    AuthenticatedUser {
        uuid: UserUuid::from_uuid(TEST_USER_UUID),
        email: "customer@example.com".to_string(),
        display_name: "Customer".to_string(),
        role: UserRole::User,
    }
}

#[salvo::handler]
pub(crate) async fn inject_admin(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_current_user(test_admin());
    ctrl.call_next(req, depot, res).await;
}

#[salvo::handler]
pub(crate) async fn inject_user(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_current_user(test_user());
    ctrl.call_next(req, depot, res).await;
}

/// Route with state but no identity, as for public reads and login.
pub(crate) fn public_service(app: AppContext, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(Arc::new(State::new(app, false))))
            .push(route),
    )
}

/// Route with state and an injected admin identity, bypassing the session
/// middleware.
pub(crate) fn authed_service(app: AppContext, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(Arc::new(State::new(app, false))))
            .hoop(inject_admin)
            .push(route),
    )
}

/// Route with state and an injected non-admin identity.
pub(crate) fn user_service(app: AppContext, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(Arc::new(State::new(app, false))))
            .hoop(inject_user)
            .push(route),
    )
}
