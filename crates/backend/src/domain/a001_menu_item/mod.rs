pub mod content;
pub mod service;
pub mod validation;
