use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use tracing::warn;

use super::token::{AuthError, TokenDecoder};
use crate::error::AppError;

/// The caller's user id, taken from the bearer token's `sub` claim.
pub struct AuthUser(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    Arc<TokenDecoder>: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let decoder = Arc::<TokenDecoder>::from_ref(state);
        let header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.trim().is_empty())
            .ok_or(AuthError::MissingHeader)
            .map_err(unauthorized)?;

        decoder.user_id(header).map(AuthUser).map_err(|e| {
            warn!(error = %e, "rejected token");
            unauthorized(e)
        })
    }
}

fn unauthorized(e: AuthError) -> AppError {
    AppError::Unauthorized(e.to_string())
}
