pub mod card;
pub mod logo;
pub mod theme;

pub use theme::Theme;
