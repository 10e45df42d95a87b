pub mod api_error;
pub mod config;
pub mod llm;
pub mod rate_limit;
