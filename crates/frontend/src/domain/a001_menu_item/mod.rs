pub mod api;
pub mod copy_notice;
pub mod state;
pub mod ui;
