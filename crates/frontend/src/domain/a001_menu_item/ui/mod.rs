pub mod widget;

pub use widget::MenuItemWidget;
