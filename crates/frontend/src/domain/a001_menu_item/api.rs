//! Menu item content - API client

use crate::shared::api_utils::api_url;
use contracts::domain::a001_menu_item::{
    ErrorResponse, ItemDetailsRequest, ItemDetailsResponse, GENERATE_ITEM_DETAILS_PATH,
};
use gloo_net::http::Request;

/// Why a generation call did not produce a result.
///
/// `status` is `None` when no HTTP response arrived at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchFailure {
    pub status: Option<u16>,
    pub body: Option<ErrorResponse>,
}

impl FetchFailure {
    /// Нет ответа от сервера (сеть, CORS, битый JSON)
    pub fn no_response() -> Self {
        Self::default()
    }

    pub fn http(status: u16, body: Option<ErrorResponse>) -> Self {
        Self {
            status: Some(status),
            body,
        }
    }
}

/// Источник сгенерированного контента для виджета
#[allow(async_fn_in_trait)]
pub trait ItemDetailsClient {
    async fn generate(
        &self,
        request: &ItemDetailsRequest,
    ) -> Result<ItemDetailsResponse, FetchFailure>;
}

/// Клиент поверх `fetch` (gloo-net)
#[derive(Debug, Clone)]
pub struct HttpItemDetailsClient {
    url: String,
}

impl HttpItemDetailsClient {
    pub fn new() -> Self {
        Self {
            url: api_url(GENERATE_ITEM_DETAILS_PATH),
        }
    }
}

impl Default for HttpItemDetailsClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemDetailsClient for HttpItemDetailsClient {
    async fn generate(
        &self,
        request: &ItemDetailsRequest,
    ) -> Result<ItemDetailsResponse, FetchFailure> {
        let response = Request::post(&self.url)
            .json(request)
            .map_err(|e| {
                log::error!("Failed to encode request: {}", e);
                FetchFailure::no_response()
            })?
            .send()
            .await
            .map_err(|e| {
                log::error!("Request failed: {}", e);
                FetchFailure::no_response()
            })?;

        if !response.ok() {
            let status = response.status();
            // Тело ошибки необязательно: пустое или чужое тело просто игнорируем
            let body = response.json::<ErrorResponse>().await.ok();
            log::warn!("HTTP error {}: {:?}", status, body);
            return Err(FetchFailure::http(status, body));
        }

        response.json::<ItemDetailsResponse>().await.map_err(|e| {
            log::error!("Failed to parse response: {}", e);
            FetchFailure::no_response()
        })
    }
}
