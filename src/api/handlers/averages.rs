//! Handler for per-country average clicks.

use axum::{Extension, Json, extract::State};
use chrono::Utc;

use crate::api::dto::averages::CountryAveragesResponse;
use crate::domain::providers::Credential;
use crate::error::AppError;
use crate::state::AppState;

/// Returns average daily clicks per country across the caller's default group.
///
/// # Endpoint
///
/// `GET /api/countries/averages`
///
/// # Authentication
///
/// The bearer token is forwarded to the remote API as-is; see
/// [`crate::api::middleware::auth`].
///
/// # Response
///
/// ```json
/// {
///   "facet": "countries",
///   "unit": "day",
///   "units": 30,
///   "unit_reference": "2024-01-01T00:00:00Z",
///   "metrics": [
///     { "country": "US", "average_clicks": 5 },
///     { "country": "Argentina", "average_clicks": 2 }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns 500 Internal Server Error if any remote call fails.
pub async fn averages_handler(
    State(state): State<AppState>,
    Extension(credential): Extension<Credential>,
) -> Result<Json<CountryAveragesResponse>, AppError> {
    let averages = state.averages_service.country_averages(&credential).await?;

    Ok(Json(CountryAveragesResponse::new(&averages, Utc::now())))
}
