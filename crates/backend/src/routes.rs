use axum::{
    http::{header, Method},
    middleware,
    routing::{get, post},
    Router,
};
use contracts::domain::a001_menu_item::{GENERATE_ITEM_DETAILS_PATH, HEALTH_PATH};
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::domain::a001_menu_item::service::ContentService;
use crate::shared::api_error::panic_response;
use crate::shared::config::Config;
use crate::shared::llm::{LlmProvider, OpenAiProvider};
use crate::shared::rate_limit::RateLimiter;
use crate::{handlers, system};

/// Общее состояние для обработчиков
#[derive(Clone)]
pub struct AppState {
    pub rate_limiter: Arc<RateLimiter>,
    pub content: Arc<ContentService>,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        let llm = &config.llm;
        let provider: Option<Arc<dyn LlmProvider>> = llm.api_key.clone().map(|key| {
            let provider = match &llm.api_base {
                Some(base) => OpenAiProvider::new_with_endpoint(
                    base.clone(),
                    key,
                    llm.temperature,
                    llm.max_tokens,
                ),
                None => OpenAiProvider::new(key, llm.temperature, llm.max_tokens),
            };
            Arc::new(provider) as Arc<dyn LlmProvider>
        });

        Self {
            rate_limiter: Arc::new(RateLimiter::new(&config.rate_limit)),
            content: Arc::new(ContentService::new(provider)),
        }
    }
}

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState, static_dir: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route(HEALTH_PATH, get(handlers::a001_menu_item::health))
        .route(
            GENERATE_ITEM_DETAILS_PATH,
            post(handlers::a001_menu_item::generate_item_details),
        )
        .with_state(state)
        .fallback_service(ServeDir::new(static_dir))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::from_fn(system::middleware::request_logger))
        .layer(cors)
}
