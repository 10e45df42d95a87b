pub mod dto;

pub use dto::*;

/// Путь эндпоинта генерации
pub const GENERATE_ITEM_DETAILS_PATH: &str = "/generate-item-details";

/// Путь health-check
pub const HEALTH_PATH: &str = "/health";
