pub mod badge;
pub mod button;
pub mod input;

pub use badge::StockBadge;
pub use button::Button;
pub use input::Input;
