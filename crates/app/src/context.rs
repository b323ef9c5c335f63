//! App Context

use std::{fmt, sync::Arc};

use sqlx::PgPool;
use tracing::{info, warn};

use crate::{
    auth::{AdminCredentials, AuthService, DefaultAuthService, TokenSigner},
    config::AppConfig,
    database,
    domain::{
        orders::{
            DefaultOrdersService, OrdersService, memory::MemoryOrderStore,
            postgres::PgOrderStore,
        },
        payment_links::{
            DefaultPaymentLinksService, PaymentLinksService,
            memory::MemoryPaymentLinkStore, postgres::PgPaymentLinkStore,
        },
        products::{
            DefaultProductsService, ProductsService, memory::MemoryProductStore,
            postgres::PgProductStore,
        },
        subcategories::{
            DefaultSubcategoriesService, SubcategoriesService,
            memory::MemorySubcategoryStore, postgres::PgSubcategoryStore,
        },
    },
    payments::StripeGateway,
};

/// Which persistence backend the context ended up on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl StoreBackend {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::Memory => "memory",
        }
    }
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub orders: Arc<dyn OrdersService>,
    pub subcategories: Arc<dyn SubcategoriesService>,
    pub payment_links: Arc<dyn PaymentLinksService>,
    pub auth: Arc<dyn AuthService>,
    pub gateway: Option<Arc<StripeGateway>>,
    pub backend: StoreBackend,
}

impl AppContext {
    /// Build the application context from configuration.
    ///
    /// When a database URL is configured the context tries to connect within
    /// the configured window; on failure it logs the error and falls back to
    /// the in-memory backend so the storefront stays available. Construction
    /// itself never fails.
    pub async fn init(config: AppConfig) -> Self {
        let pool = match &config.database_url {
            Some(url) => match database::connect(url, config.connect_window).await {
                Ok(pool) => Some(pool),
                Err(error) => {
                    warn!(%error, "database unavailable, falling back to in-memory stores");
                    None
                }
            },
            None => {
                info!("no database configured, using in-memory stores");
                None
            }
        };

        let gateway = StripeGateway::from_config(config.stripe).map(Arc::new);

        if gateway.is_none() {
            warn!("payment gateway not configured, payment operations are disabled");
        }

        let credentials = AdminCredentials::new(&config.admin_password);
        let signer = TokenSigner::new(config.token_secret.as_ref(), config.token_ttl);
        let auth = Arc::new(DefaultAuthService::new(credentials, signer));

        match pool {
            Some(pool) => Self::with_postgres(pool, gateway, auth),
            None => Self::with_memory(gateway, auth),
        }
    }

    fn with_postgres(
        pool: PgPool,
        gateway: Option<Arc<StripeGateway>>,
        auth: Arc<DefaultAuthService>,
    ) -> Self {
        let subcategory_store = Arc::new(PgSubcategoryStore::new(pool.clone()));

        Self {
            products: Arc::new(DefaultProductsService::new(
                Arc::new(PgProductStore::new(pool.clone())),
                subcategory_store.clone(),
                gateway.clone(),
            )),
            orders: Arc::new(DefaultOrdersService::new(Arc::new(PgOrderStore::new(
                pool.clone(),
            )))),
            subcategories: Arc::new(DefaultSubcategoriesService::new(subcategory_store)),
            payment_links: Arc::new(DefaultPaymentLinksService::new(Arc::new(
                PgPaymentLinkStore::new(pool),
            ))),
            auth,
            gateway,
            backend: StoreBackend::Postgres,
        }
    }

    fn with_memory(
        gateway: Option<Arc<StripeGateway>>,
        auth: Arc<DefaultAuthService>,
    ) -> Self {
        let subcategory_store = Arc::new(MemorySubcategoryStore::new());

        Self {
            products: Arc::new(DefaultProductsService::new(
                Arc::new(MemoryProductStore::new()),
                subcategory_store.clone(),
                gateway.clone(),
            )),
            orders: Arc::new(DefaultOrdersService::new(Arc::new(MemoryOrderStore::new()))),
            subcategories: Arc::new(DefaultSubcategoriesService::new(subcategory_store)),
            payment_links: Arc::new(DefaultPaymentLinksService::new(Arc::new(
                MemoryPaymentLinkStore::new(),
            ))),
            auth,
            gateway,
            backend: StoreBackend::Memory,
        }
    }
}
