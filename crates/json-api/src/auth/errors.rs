//! Auth Errors

use tracing::error;

use storefront_app::auth::AuthServiceError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: AuthServiceError) -> ApiError {
    match error {
        AuthServiceError::InvalidCredentials => ApiError::unauthorized("Invalid password"),
        AuthServiceError::InvalidToken => {
            ApiError::unauthorized("Invalid or expired session token")
        }
        AuthServiceError::Signing(source) => {
            error!("failed to sign session token: {source}");

            ApiError::internal()
        }
    }
}
