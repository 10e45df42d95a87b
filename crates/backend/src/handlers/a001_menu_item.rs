use axum::body::Bytes;
use axum::extract::{ConnectInfo, State};
use axum::Json;
use contracts::domain::a001_menu_item::{HealthResponse, ItemDetailsResponse};
use contracts::enums::GenerationModel;
use serde_json::Value;
use std::net::SocketAddr;

use crate::domain::a001_menu_item::validation::clean_item_name;
use crate::routes::AppState;
use crate::shared::api_error::ApiError;
use crate::shared::rate_limit::RateLimitDecision;

pub const TOO_SOON_MESSAGE: &str =
    "Rate limit exceeded. Please wait a moment before trying again.";
pub const QUOTA_EXCEEDED_MESSAGE: &str =
    "Rate limit exceeded. Please wait before making another request.";

/// Разобранное тело запроса
#[derive(Debug, PartialEq, Eq)]
struct GeneratePayload {
    item_name: String,
    model: GenerationModel,
}

/// Lenient parse: `item_name` defaults to "" and `model` to gpt-3.5-turbo.
/// Anything that is not a non-empty JSON object counts as "no data".
fn parse_payload(body: &[u8]) -> Result<GeneratePayload, ApiError> {
    let no_data = || ApiError::BadRequest("No data provided".to_string());

    let value: Value = serde_json::from_slice(body).map_err(|_| no_data())?;
    let Value::Object(map) = value else {
        return Err(no_data());
    };
    if map.is_empty() {
        return Err(no_data());
    }

    let item_name = map
        .get("item_name")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let model = match map.get("model") {
        None | Some(Value::Null) => GenerationModel::default(),
        Some(Value::String(code)) => GenerationModel::from_code(code)
            .ok_or_else(|| ApiError::BadRequest("Unsupported model".to_string()))?,
        Some(_) => return Err(ApiError::BadRequest("Unsupported model".to_string())),
    };

    Ok(GeneratePayload { item_name, model })
}

/// POST /generate-item-details
pub async fn generate_item_details(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    body: Bytes,
) -> Result<Json<ItemDetailsResponse>, ApiError> {
    match state.rate_limiter.check(addr.ip()) {
        RateLimitDecision::Allowed => {}
        RateLimitDecision::TooSoon => {
            tracing::warn!("Rate limit (interval) hit by {}", addr.ip());
            return Err(ApiError::TooManyRequests(TOO_SOON_MESSAGE.to_string()));
        }
        RateLimitDecision::QuotaExceeded => {
            tracing::warn!("Rate limit (quota) hit by {}", addr.ip());
            return Err(ApiError::TooManyRequests(QUOTA_EXCEEDED_MESSAGE.to_string()));
        }
    }

    let payload = parse_payload(&body)?;
    let item_name = clean_item_name(&payload.item_name).map_err(|e| {
        tracing::info!("Rejected item name '{}': {}", payload.item_name, e);
        ApiError::BadRequest(e.to_string())
    })?;

    tracing::info!(
        "Generating content for '{}' with {} ({})",
        item_name,
        payload.model,
        state.content.mode()
    );
    let details = state.content.item_details(item_name, payload.model).await;
    Ok(Json(details))
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
