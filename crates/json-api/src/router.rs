//! App Router

use salvo::Router;

use crate::{auth, healthcheck, orders, payments, products, subcategories};

/// The `/api` tree. Public storefront routes come first; everything else
/// sits behind the admin bearer middleware.
pub(crate) fn api_router() -> Router {
    Router::with_path("api")
        .push(Router::with_path("health").get(healthcheck::handler))
        .push(
            Router::with_path("auth")
                .push(Router::with_path("admin-login").post(auth::handlers::login::handler))
                .push(Router::with_path("verify").get(auth::handlers::verify::handler)),
        )
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .push(Router::with_path("{id}").get(products::get::handler)),
        )
        .push(
            Router::with_path("orders")
                .post(orders::create::handler)
                .push(Router::with_path("{id}").get(orders::get::handler)),
        )
        .push(
            Router::with_path("subcategories")
                .get(subcategories::index::all)
                .push(Router::with_path("{category}").get(subcategories::index::by_category)),
        )
        .push(Router::with_path("payments/confirm").post(payments::confirm::handler))
        .push(Router::with_path("charges").post(payments::charge::handler))
        .push(Router::with_path("webhook").post(payments::webhook::handler))
        .push(admin_router())
}

fn admin_router() -> Router {
    Router::new()
        .hoop(auth::middleware::handler)
        .push(
            Router::with_path("products").post(products::create::handler).push(
                Router::with_path("{id}")
                    .put(products::update::handler)
                    .delete(products::delete::handler),
            ),
        )
        .push(
            Router::with_path("orders")
                .get(orders::index::handler)
                .push(Router::with_path("{id}/status").put(orders::update_status::handler))
                .push(
                    Router::with_path("{id}/payment-status")
                        .put(orders::update_payment_status::handler),
                ),
        )
        .push(
            Router::with_path("subcategories")
                .post(subcategories::create::handler)
                .push(
                    Router::with_path("{id}")
                        .put(subcategories::update::handler)
                        .delete(subcategories::delete::handler),
                ),
        )
        .push(
            Router::with_path("payments")
                .get(payments::index::handler)
                .push(Router::with_path("create-link").post(payments::create_link::handler))
                .push(Router::with_path("{id}").delete(payments::delete_link::handler)),
        )
}
