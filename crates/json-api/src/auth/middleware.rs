//! Admin auth middleware.

use std::sync::Arc;

use salvo::{http::header::AUTHORIZATION, prelude::*};

use crate::{errors::ApiError, state::State};

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let Some(token) = extract_bearer_token(req) else {
        res.render(ApiError::unauthorized(
            "Missing or invalid Authorization header",
        ));

        return;
    };

    let Ok(state) = depot.obtain::<Arc<State>>() else {
        res.render(ApiError::internal());

        return;
    };

    let claims = match state.app.auth.authenticate(token).await {
        Ok(claims) => claims,
        Err(_error) => {
            res.render(ApiError::unauthorized("Invalid or expired session token"));

            return;
        }
    };

    if !claims.is_admin {
        res.render(ApiError::forbidden("Admin access required"));

        return;
    }

    ctrl.call_next(req, depot, res).await;
}

fn extract_bearer_token(req: &Request) -> Option<&str> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let mut parts = value.splitn(2, ' ');

    let scheme = parts.next()?;
    let token = parts.next()?.trim();

    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }

    Some(token)
}
