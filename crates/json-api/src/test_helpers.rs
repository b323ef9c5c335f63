//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use storefront_app::{
    auth::MockAuthService,
    context::{AppContext, StoreBackend},
    domain::{
        orders::MockOrdersService, payment_links::MockPaymentLinksService,
        products::MockProductsService, subcategories::MockSubcategoriesService,
    },
    payments::StripeGateway,
};

use crate::state::State;

fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list().never();
    products.expect_get().never();
    products.expect_create().never();
    products.expect_update().never();
    products.expect_delete().never();

    products
}

fn strict_orders_mock() -> MockOrdersService {
    let mut orders = MockOrdersService::new();

    orders.expect_list().never();
    orders.expect_get().never();
    orders.expect_create().never();
    orders.expect_update_status().never();
    orders.expect_complete_payment().never();
    orders.expect_fail_payment().never();
    orders.expect_record_payment().never();

    orders
}

fn strict_subcategories_mock() -> MockSubcategoriesService {
    let mut subcategories = MockSubcategoriesService::new();

    subcategories.expect_list().never();
    subcategories.expect_list_by_category().never();
    subcategories.expect_create().never();
    subcategories.expect_rename().never();
    subcategories.expect_delete().never();

    subcategories
}

fn strict_payment_links_mock() -> MockPaymentLinksService {
    let mut payment_links = MockPaymentLinksService::new();

    payment_links.expect_list().never();
    payment_links.expect_create().never();
    payment_links.expect_delete().never();

    payment_links
}

fn strict_auth_mock() -> MockAuthService {
    let mut auth = MockAuthService::new();

    auth.expect_login().never();
    auth.expect_authenticate().never();

    auth
}

/// Mock services for one handler test. Unset fields get strict mocks that
/// fail the test on any call.
#[derive(Default)]
pub(crate) struct Mocks {
    pub products: Option<MockProductsService>,
    pub orders: Option<MockOrdersService>,
    pub subcategories: Option<MockSubcategoriesService>,
    pub payment_links: Option<MockPaymentLinksService>,
    pub auth: Option<MockAuthService>,
    pub gateway: Option<Arc<StripeGateway>>,
}

pub(crate) fn make_state(mocks: Mocks) -> Arc<State> {
    let app = AppContext {
        products: Arc::new(mocks.products.unwrap_or_else(strict_products_mock)),
        orders: Arc::new(mocks.orders.unwrap_or_else(strict_orders_mock)),
        subcategories: Arc::new(
            mocks.subcategories.unwrap_or_else(strict_subcategories_mock),
        ),
        payment_links: Arc::new(
            mocks.payment_links.unwrap_or_else(strict_payment_links_mock),
        ),
        auth: Arc::new(mocks.auth.unwrap_or_else(strict_auth_mock)),
        gateway: mocks.gateway,
        backend: StoreBackend::Memory,
    };

    Arc::new(State::new(app))
}

pub(crate) fn service_with(state: Arc<State>, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(state)).push(route))
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    service_with(
        make_state(Mocks {
            products: Some(products),
            ..Mocks::default()
        }),
        route,
    )
}

pub(crate) fn orders_service(orders: MockOrdersService, route: Router) -> Service {
    service_with(
        make_state(Mocks {
            orders: Some(orders),
            ..Mocks::default()
        }),
        route,
    )
}

pub(crate) fn subcategories_service(
    subcategories: MockSubcategoriesService,
    route: Router,
) -> Service {
    service_with(
        make_state(Mocks {
            subcategories: Some(subcategories),
            ..Mocks::default()
        }),
        route,
    )
}

pub(crate) fn payment_links_service(
    payment_links: MockPaymentLinksService,
    route: Router,
) -> Service {
    service_with(
        make_state(Mocks {
            payment_links: Some(payment_links),
            ..Mocks::default()
        }),
        route,
    )
}

pub(crate) fn auth_service(auth: MockAuthService, route: Router) -> Service {
    service_with(
        make_state(Mocks {
            auth: Some(auth),
            ..Mocks::default()
        }),
        route,
    )
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    make_state(Mocks {
        auth: Some(auth),
        ..Mocks::default()
    })
}

pub(crate) fn orders_state(orders: MockOrdersService) -> Arc<State> {
    make_state(Mocks {
        orders: Some(orders),
        ..Mocks::default()
    })
}
