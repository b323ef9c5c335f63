//! Admin authentication.
//!
//! A single shared admin password guards the back office. A successful login
//! issues a signed session token; the HTTP layer checks the token on every
//! admin route.

pub mod errors;
pub mod password;
pub mod service;
pub mod token;

pub use errors::AuthServiceError;
pub use password::AdminCredentials;
pub use service::*;
pub use token::{Claims, TokenSigner};
