//! App Router
//!
//! Three surfaces: public storefront reads, session-holder routes
//! (checkout, own orders, review writing, auth), and the admin back office
//! (catalog and order mutations), each gated by the matching middleware.

use salvo::Router;

use crate::{
    auth, bouquets, categories, files, flowers, healthcheck, observability, orders, products,
    reviews, subcategories,
};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(observability::metrics_handler))
        .push(public_router())
        .push(session_router())
        .push(admin_router())
}

/// Storefront reads and login; no session required.
fn public_router() -> Router {
    Router::new()
        .push(Router::with_path("auth/login").post(auth::login::handler))
        .push(
            Router::with_path("categories")
                .get(categories::index::handler)
                .push(
                    Router::with_path("{category}")
                        .get(categories::get::handler)
                        .push(
                            Router::with_path("subcategories")
                                .get(categories::subcategories_index::handler),
                        ),
                ),
        )
        .push(Router::with_path("subcategories/{subcategory}").get(subcategories::get::handler))
        .push(
            Router::with_path("flowers")
                .get(flowers::index::handler)
                .push(Router::with_path("{flower}").get(flowers::get::handler)),
        )
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .push(Router::with_path("{product}").get(products::get::handler)),
        )
        .push(Router::with_path("bouquet-flowers/{bouquet}").get(bouquets::index::handler))
        .push(
            Router::with_path("reviews")
                .get(reviews::index::handler)
                .push(Router::with_path("{review}").get(reviews::get::handler)),
        )
        .push(
            Router::with_path("files")
                .get(files::index::handler)
                .push(Router::with_path("{file}").get(files::get::handler)),
        )
}

/// Routes for any signed-in user.
fn session_router() -> Router {
    Router::new()
        .hoop(auth::middleware::require_session)
        .push(Router::with_path("auth/current").get(auth::current::handler))
        .push(Router::with_path("auth/logout").post(auth::logout::handler))
        .push(
            Router::with_path("orders")
                .post(orders::create::handler)
                .push(Router::with_path("{order}").get(orders::get::handler)),
        )
        .push(Router::with_path("reviews").post(reviews::create::handler))
}

/// Back-office routes; session plus admin role.
fn admin_router() -> Router {
    Router::new()
        .hoop(auth::middleware::require_session)
        .hoop(auth::middleware::require_admin)
        .push(
            Router::with_path("categories")
                .post(categories::create::handler)
                .push(
                    Router::with_path("{category}")
                        .put(categories::update::handler)
                        .delete(categories::delete::handler),
                ),
        )
        .push(
            Router::with_path("subcategories")
                .post(subcategories::create::handler)
                .push(
                    Router::with_path("{subcategory}")
                        .put(subcategories::update::handler)
                        .delete(subcategories::delete::handler),
                ),
        )
        .push(
            Router::with_path("flowers")
                .post(flowers::create::handler)
                .push(
                    Router::with_path("{flower}")
                        .put(flowers::update::handler)
                        .delete(flowers::delete::handler),
                ),
        )
        .push(
            Router::with_path("products")
                .post(products::create::handler)
                .push(
                    Router::with_path("{product}")
                        .put(products::update::handler)
                        .delete(products::delete::handler),
                ),
        )
        .push(
            Router::with_path("bouquet-flowers")
                .post(bouquets::create::handler)
                .push(
                    Router::with_path("{line}")
                        .put(bouquets::update::handler)
                        .delete(bouquets::delete::handler),
                ),
        )
        .push(
            Router::with_path("reviews/{review}")
                .put(reviews::update::handler)
                .delete(reviews::delete::handler),
        )
        .push(
            Router::with_path("files")
                .post(files::create::handler)
                .push(Router::with_path("{file}").delete(files::delete::handler)),
        )
        .push(
            Router::with_path("orders/admin")
                .push(Router::with_path("all").get(orders::admin_index::handler))
                .push(Router::with_path("{order}/status").put(orders::set_status::handler)),
        )
}
