//! Wire DTOs for the menu item content endpoint

use crate::enums::GenerationModel;
use serde::{Deserialize, Serialize};

/// Тело запроса `POST /generate-item-details`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDetailsRequest {
    pub item_name: String,
    pub model: GenerationModel,
}

impl ItemDetailsRequest {
    pub fn new(item_name: impl Into<String>, model: GenerationModel) -> Self {
        Self {
            item_name: item_name.into(),
            model,
        }
    }
}

/// Успешный ответ генерации
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDetailsResponse {
    pub item_name: String,
    pub description: String,
    pub upsell_suggestion: String,
    pub model_used: String,
    /// ISO-8601 timestamp as produced by the server
    pub generated_at: String,
}

/// Тело ошибки для любого не-2xx ответа
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_body_shape() {
        let req = ItemDetailsRequest::new("Margherita Pizza", GenerationModel::Gpt35Turbo);
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"item_name":"Margherita Pizza","model":"gpt-3.5-turbo"}"#
        );
    }

    #[test]
    fn test_response_parses_server_payload() {
        let payload = json!({
            "item_name": "Margherita Pizza",
            "description": "Fresh mozzarella, basil, and tomato sauce on crispy crust",
            "upsell_suggestion": "Pair it with a refreshing Italian soda!",
            "model_used": "gpt-3.5-turbo",
            "generated_at": "2024-01-01T00:00:00Z"
        });
        let resp: ItemDetailsResponse = serde_json::from_value(payload).unwrap();
        assert_eq!(resp.item_name, "Margherita Pizza");
        assert_eq!(resp.generated_at, "2024-01-01T00:00:00Z");
    }

    #[test]
    fn test_error_body_requires_error_field() {
        assert!(serde_json::from_str::<ErrorResponse>("{}").is_err());
        let body: ErrorResponse = serde_json::from_str(r#"{"error":"nope"}"#).unwrap();
        assert_eq!(body.error, "nope");
    }
}
