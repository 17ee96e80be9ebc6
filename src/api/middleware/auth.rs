//! Bearer token extraction middleware.

use axum::{
    extract::{FromRequestParts, Request},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::domain::providers::Credential;
use crate::error::AppError;

/// Extracts the bearer token and hands it to handlers as a [`Credential`].
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// The token is not validated locally; the remote API decides whether it is
/// acceptable. Handlers read it with `Extension<Credential>`.
///
/// # Errors
///
/// Returns `401 Unauthorized` with `WWW-Authenticate: Bearer` if the header
/// is missing, is not a bearer value, or carries an empty token.
pub async fn layer(req: Request, next: Next) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            AppError::unauthorized(
                "Unauthorized",
                serde_json::json!({"reason": "Authorization header is missing or invalid"}),
            )
        })?;

    let token = token.trim();
    if token.is_empty() {
        return Err(AppError::unauthorized(
            "Unauthorized",
            serde_json::json!({"reason": "No bearer token provided"}),
        ));
    }

    parts.extensions.insert(Credential::new(token));
    let req = Request::from_parts(parts, body);

    Ok(next.run(req).await)
}
