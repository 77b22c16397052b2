pub mod assets;
pub mod catalog;
pub mod deal;
pub mod geometry;
pub mod session;
pub mod spread;

pub use assets::{AssetCache, AssetState, CardArt};
pub use catalog::{file_name_for, CardIdentity, Catalog, CatalogError, DECK_SIZE};
pub use deal::{deal, DealtCard, FaceState, FLIP_SPEED};
pub use geometry::{
    compute_positions, enlarged_slot, fit_card_to_grid, SizingProfile, Slot, CARD_ASPECT,
};
pub use session::{Command, Event, ScreenId, SessionState};
pub use spread::Spread;
