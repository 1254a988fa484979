use axum::Json;
use axum::extract::{Path, State};
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use quotid::{QuoteCodec, decode_composite, encode_composite};
use serde::{Deserialize, Serialize};

use crate::dates;
use crate::error::ApiError;

/// Shared state handed to every handler.
#[derive(Clone, Default)]
pub struct AppState {
    pub codec: QuoteCodec,
}

#[derive(Serialize)]
pub struct QuoteResponse {
    pub quote_number: String,
}

#[derive(Serialize)]
pub struct QuoteDetails {
    pub quote_number: String,
    pub issued_at: DateTime<Utc>,
}

#[derive(Deserialize)]
pub struct CompositeRequest {
    pub id: i32,
    pub name: String,
    /// `YYYY-MM-DD` or `MM-DD-YYYY`.
    pub date_of_birth: String,
}

#[derive(Serialize)]
pub struct CompositeResponse {
    pub key: String,
}

#[derive(Serialize)]
pub struct CompositeDetails {
    pub id: i32,
    pub name_fingerprint: u32,
    pub date_of_birth: NaiveDate,
    /// The same date in the `MM-DD-YYYY` form upstream web clients use.
    pub date_of_birth_web: String,
    pub age: Option<u32>,
}

pub async fn healthz() -> &'static str {
    "ok"
}

/// Mints a fresh quote number.
pub async fn create_quote(State(state): State<AppState>) -> Json<QuoteResponse> {
    let quote_number = state.codec.encode(None);
    tracing::debug!(%quote_number, "issued quote number");
    Json(QuoteResponse { quote_number })
}

/// Decodes a quote number back to its issue instant.
pub async fn get_quote(
    State(state): State<AppState>,
    Path(quote_number): Path<String>,
) -> Result<Json<QuoteDetails>, ApiError> {
    let issued_at = state.codec.decode(&quote_number)?;
    Ok(Json(QuoteDetails {
        quote_number,
        issued_at,
    }))
}

/// Builds a composite identifier from an id, a name, and a date of birth.
pub async fn create_composite(
    Json(req): Json<CompositeRequest>,
) -> Result<Json<CompositeResponse>, ApiError> {
    let dob = dates::parse_date(&req.date_of_birth)
        .ok_or_else(|| ApiError::InvalidDate(req.date_of_birth.clone()))?;
    let key = encode_composite(req.id, &req.name, dob.year(), dob.month(), dob.day());
    tracing::debug!(id = req.id, %key, "issued composite identifier");
    Ok(Json(CompositeResponse { key }))
}

/// Decodes a composite identifier. The fingerprint comes back for the
/// caller to confirm against the name they hold.
pub async fn get_composite(Path(key): Path<String>) -> Result<Json<CompositeDetails>, ApiError> {
    let (id, name_fingerprint, year, month, day) = decode_composite(&key)?;
    let date_of_birth =
        NaiveDate::from_ymd_opt(year, month, day).expect("decoded dates are calendar dates");
    let age = dates::age_at(date_of_birth, Utc::now().date_naive());
    Ok(Json(CompositeDetails {
        id,
        name_fingerprint,
        date_of_birth,
        date_of_birth_web: dates::to_web_date(date_of_birth),
        age,
    }))
}
