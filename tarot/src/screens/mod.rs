pub mod about;
pub mod cover;
pub mod display;
pub mod intro;

use crossterm::event::KeyEvent;
use ratatui::Frame;

use tarot_core::{AssetCache, Catalog, Event, SessionState, SizingProfile};

/// Read-only view of everything a screen needs to draw itself.
pub struct ViewCtx<'a> {
    pub session: &'a SessionState,
    pub catalog: &'a Catalog,
    pub cache: &'a AssetCache,
    pub profile: &'a SizingProfile,
}

/// What a screen asks the app to do in response to input.
#[derive(Debug, Clone, Copy)]
pub enum ScreenAction {
    Quit,
    Session(Event),
}

/// Trait for the viewer's screens
pub trait Screen {
    fn render(&mut self, frame: &mut Frame, ctx: &ViewCtx);
    fn handle_key(&mut self, key: KeyEvent, ctx: &ViewCtx) -> Option<ScreenAction>;
}
