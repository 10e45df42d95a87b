pub mod view;
pub mod view_model;

pub use view::MenuItemWidget;
pub use view_model::MenuItemWidgetVm;
