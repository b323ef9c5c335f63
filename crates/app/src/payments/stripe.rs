//! Stripe HTTP client.
//!
//! Covers the three interactions the storefront needs: payment intents for
//! checkout, product/price mirroring for the catalog, and webhook signature
//! verification for payment confirmations.

use hmac::{Hmac, Mac};
use jiff::Timestamp;
use reqwest::Client;
use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use serde::Deserialize;
use sha2::Sha256;
use thiserror::Error;

use crate::{config::SecretString, domain::products::models::Product};

type HmacSha256 = Hmac<Sha256>;

const API_BASE: &str = "https://api.stripe.com/v1";

/// Maximum accepted age of a signed webhook timestamp, in seconds.
const WEBHOOK_TOLERANCE_SECS: i64 = 5 * 60;

/// Stripe credentials. Both keys are optional; an unset secret key disables
/// the gateway entirely and an unset webhook secret disables webhook
/// verification.
#[derive(Debug, Clone, Default)]
pub struct StripeConfig {
    pub secret_key: Option<SecretString>,
    pub webhook_secret: Option<SecretString>,
}

/// Processor-side identifiers recorded against a mirrored product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripeProductRefs {
    pub product_id: String,
    pub price_id: String,
}

/// Subset of a Stripe payment intent the storefront consumes.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: Option<String>,
    /// Amount in the currency's minor unit (cents for USD).
    pub amount: i64,
    pub currency: String,
    pub status: String,
}

#[derive(Debug, Error)]
pub enum PaymentGatewayError {
    #[error("payment gateway is not configured")]
    NotConfigured,

    #[error("payment amount must be greater than zero")]
    InvalidAmount,

    #[error("payment gateway request failed")]
    Http(#[from] reqwest::Error),

    #[error("payment gateway rejected the request: {0}")]
    Rejected(String),

    #[error("webhook signature verification failed")]
    InvalidSignature,
}

#[derive(Debug, Deserialize)]
struct StripeErrorBody {
    error: StripeErrorDetail,
}

#[derive(Debug, Deserialize)]
struct StripeErrorDetail {
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StripeObject {
    id: String,
}

/// Client for the Stripe REST API.
#[derive(Debug, Clone)]
pub struct StripeGateway {
    secret_key: SecretString,
    webhook_secret: Option<SecretString>,
    http: Client,
}

impl StripeGateway {
    /// Build a gateway from configuration. Returns `None` when no secret key
    /// is set, in which case payment operations are unavailable.
    #[must_use]
    pub fn from_config(config: StripeConfig) -> Option<Self> {
        Some(Self {
            secret_key: config.secret_key?,
            webhook_secret: config.webhook_secret,
            http: Client::new(),
        })
    }

    /// Create a payment intent for `amount` in the major currency unit.
    ///
    /// # Errors
    ///
    /// Returns [`PaymentGatewayError::InvalidAmount`] unless `amount` is
    /// strictly positive, or a transport/rejection error from Stripe.
    pub async fn create_payment_intent(
        &self,
        amount: Decimal,
        item_count: usize,
    ) -> Result<PaymentIntent, PaymentGatewayError> {
        let cents = to_minor_units(amount).ok_or(PaymentGatewayError::InvalidAmount)?;

        let params = [
            ("amount", cents.to_string()),
            ("currency", "usd".to_string()),
            ("automatic_payment_methods[enabled]", "true".to_string()),
            ("metadata[item_count]", item_count.to_string()),
        ];

        self.post("payment_intents", &params).await
    }

    /// Fetch the current state of a payment intent.
    pub async fn retrieve_payment_intent(
        &self,
        intent_id: &str,
    ) -> Result<PaymentIntent, PaymentGatewayError> {
        let url = format!("{API_BASE}/payment_intents/{intent_id}");

        let response = self
            .http
            .get(url)
            .bearer_auth(self.secret_key.expose())
            .send()
            .await?;

        Self::decode(response).await
    }

    /// Mirror a catalog product into Stripe.
    ///
    /// Reuses the existing processor product when the row already carries an
    /// id; prices are immutable on the processor side, so every sync creates
    /// a fresh price.
    pub async fn sync_product(
        &self,
        product: &Product,
    ) -> Result<StripeProductRefs, PaymentGatewayError> {
        let mut params = vec![("name", product.name.clone())];

        if let Some(description) = &product.description {
            params.push(("description", description.clone()));
        }

        let product_id = match &product.stripe_product_id {
            Some(id) => {
                let _: StripeObject = self.post(&format!("products/{id}"), &params).await?;
                id.clone()
            }
            None => {
                let created: StripeObject = self.post("products", &params).await?;
                created.id
            }
        };

        let cents =
            to_minor_units(product.price).ok_or(PaymentGatewayError::InvalidAmount)?;

        let price_params = [
            ("unit_amount", cents.to_string()),
            ("currency", "usd".to_string()),
            ("product", product_id.clone()),
        ];

        let price: StripeObject = self.post("prices", &price_params).await?;

        Ok(StripeProductRefs {
            product_id,
            price_id: price.id,
        })
    }

    /// Verify a `Stripe-Signature` header against the raw request body.
    ///
    /// The header carries a unix timestamp and one or more HMAC-SHA256
    /// signatures over `"{timestamp}.{body}"`. Verification fails closed:
    /// a missing webhook secret, a malformed header, a stale timestamp, or a
    /// signature mismatch all reject the payload.
    ///
    /// # Errors
    ///
    /// Returns [`PaymentGatewayError::NotConfigured`] without a webhook
    /// secret and [`PaymentGatewayError::InvalidSignature`] for every other
    /// failure.
    pub fn verify_webhook_signature(
        &self,
        payload: &[u8],
        header: &str,
    ) -> Result<(), PaymentGatewayError> {
        let secret = self
            .webhook_secret
            .as_ref()
            .ok_or(PaymentGatewayError::NotConfigured)?;

        let mut timestamp: Option<i64> = None;
        let mut signatures: Vec<Vec<u8>> = Vec::new();

        for part in header.split(',') {
            match part.trim().split_once('=') {
                Some(("t", value)) => timestamp = value.parse().ok(),
                Some(("v1", value)) => {
                    if let Ok(bytes) = hex::decode(value) {
                        signatures.push(bytes);
                    }
                }
                _ => {}
            }
        }

        let timestamp = timestamp.ok_or(PaymentGatewayError::InvalidSignature)?;
        let age = Timestamp::now().as_second() - timestamp;

        if !(0..=WEBHOOK_TOLERANCE_SECS).contains(&age) {
            return Err(PaymentGatewayError::InvalidSignature);
        }

        let mut signed_payload = format!("{timestamp}.").into_bytes();
        signed_payload.extend_from_slice(payload);

        let accepted = signatures.iter().any(|signature| {
            HmacSha256::new_from_slice(secret.expose().as_bytes()).is_ok_and(|mut mac| {
                mac.update(&signed_payload);
                mac.verify_slice(signature).is_ok()
            })
        });

        if accepted {
            Ok(())
        } else {
            Err(PaymentGatewayError::InvalidSignature)
        }
    }

    async fn post<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, PaymentGatewayError> {
        let url = format!("{API_BASE}/{path}");

        let response = self
            .http
            .post(url)
            .bearer_auth(self.secret_key.expose())
            .form(params)
            .send()
            .await?;

        Self::decode(response).await
    }

    async fn decode<T: for<'de> Deserialize<'de>>(
        response: reqwest::Response,
    ) -> Result<T, PaymentGatewayError> {
        let status = response.status();

        if !status.is_success() {
            let message = response
                .json::<StripeErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error.message)
                .unwrap_or_else(|| format!("status {status}"));

            return Err(PaymentGatewayError::Rejected(message));
        }

        Ok(response.json().await?)
    }
}

/// Convert a major-unit amount to the currency's minor unit, rejecting
/// non-positive amounts.
fn to_minor_units(amount: Decimal) -> Option<i64> {
    if amount <= Decimal::ZERO {
        return None;
    }

    (amount * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
}
