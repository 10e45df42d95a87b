pub mod button;
pub mod input;
pub mod toggle;

pub use button::Button;
pub use input::Input;
pub use toggle::Toggle;
