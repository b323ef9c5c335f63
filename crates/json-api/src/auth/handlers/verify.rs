//! Session Verify Handler

use std::sync::Arc;

use salvo::{http::header::AUTHORIZATION, prelude::*};
use serde::{Deserialize, Serialize};

use crate::state::State;

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct VerifyResponse {
    pub valid: bool,
}

/// Report whether the presented session token is still good.
///
/// Unlike admin routes this endpoint answers instead of blocking, so the
/// back office can poll it to decide when to re-login.
#[salvo::handler]
pub(crate) async fn handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let valid = match (bearer_token(req), depot.obtain::<Arc<State>>()) {
        (Some(token), Ok(state)) => state.app.auth.authenticate(token).await.is_ok(),
        _ => false,
    };

    if !valid {
        res.status_code(StatusCode::UNAUTHORIZED);
    }

    res.render(Json(VerifyResponse { valid }));
}

fn bearer_token(req: &Request) -> Option<&str> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;

    value
        .strip_prefix("Bearer ")
        .or_else(|| value.strip_prefix("bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
