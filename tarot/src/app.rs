use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;
use tachyonfx::Duration;
use tracing::{info, warn};

use tarot_core::{
    compute_positions, AssetCache, Catalog, Command, Event, ScreenId, SessionState, SizingProfile,
};
use tarot_widgets::theme::Theme;

use crate::effects::{self, FxManager};
use crate::screens::about::AboutScreen;
use crate::screens::cover::CoverScreen;
use crate::screens::display::DisplayScreen;
use crate::screens::intro::IntroScreen;
use crate::screens::{Screen, ScreenAction, ViewCtx};

/// Terminals narrower than this get the compact sizing profile.
const COMPACT_WIDTH: u16 = 100;

/// Main application state
pub struct App {
    pub session: SessionState,
    pub catalog: Catalog,
    pub cache: AssetCache,
    pub profile: SizingProfile,
    pub tick: u64,
    pub fx: FxManager,
    store: crate::store::ImageStore,
    data_dir: PathBuf,
    rng: StdRng,
    prev_screen: Option<ScreenId>,

    // Screens
    pub cover: CoverScreen,
    pub intro: IntroScreen,
    pub about: AboutScreen,
    pub display: DisplayScreen,
}

impl App {
    pub fn new(data_dir: PathBuf, term_width: u16, _term_height: u16) -> Self {
        // Device class is fixed at boot; resizes re-scale but never
        // reclassify.
        let compact = term_width < COMPACT_WIDTH;
        let profile = SizingProfile::new(compact);
        info!(compact, term_width, "sizing profile resolved");

        let descriptions = match std::fs::read_to_string(data_dir.join("descriptions.txt")) {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "descriptions.txt unavailable, cards get blank meanings");
                String::new()
            }
        };
        let catalog = Catalog::build(&descriptions);

        let mut fx = FxManager::default();
        fx.add_unique_effect("logo_shimmer", effects::logo_shimmer());

        Self {
            session: SessionState::new(),
            catalog,
            cache: AssetCache::new(),
            profile,
            tick: 0,
            fx,
            store: crate::store::ImageStore::spawn(),
            data_dir,
            rng: StdRng::from_entropy(),
            prev_screen: None,
            cover: CoverScreen::new(),
            intro: IntroScreen::new(),
            about: AboutScreen::new(),
            display: DisplayScreen::new(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(Style::default().bg(Theme::BG)), area);

        let ctx = ViewCtx {
            session: &self.session,
            catalog: &self.catalog,
            cache: &self.cache,
            profile: &self.profile,
        };
        match self.session.screen {
            ScreenId::Cover => self.cover.render(frame, &ctx),
            ScreenId::Intro => self.intro.render(frame, &ctx),
            ScreenId::About => self.about.render(frame, &ctx),
            ScreenId::Display => self.display.render(frame, &ctx),
        }

        // Apply all tachyonfx effects on top of rendered content
        let tick_duration = Duration::from_millis(33); // ~30fps
        let buf = frame.buffer_mut();
        self.fx.process_effects(tick_duration, buf, area);
    }

    /// Handle key event. Returns true if should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Global quit from the picker
        if key.code == KeyCode::Char('q') && self.session.screen == ScreenId::Intro {
            return true;
        }

        let ctx = ViewCtx {
            session: &self.session,
            catalog: &self.catalog,
            cache: &self.cache,
            profile: &self.profile,
        };
        let action = match self.session.screen {
            ScreenId::Cover => self.cover.handle_key(key, &ctx),
            ScreenId::Intro => self.intro.handle_key(key, &ctx),
            ScreenId::About => self.about.handle_key(key, &ctx),
            ScreenId::Display => self.display.handle_key(key, &ctx),
        };

        self.process_action(action)
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let action = match self.session.screen {
            ScreenId::Cover => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    Some(ScreenAction::Session(Event::AdvanceCover))
                }
                _ => None,
            },
            ScreenId::Intro => self.intro.handle_mouse(mouse),
            ScreenId::About => self.about.handle_mouse(mouse),
            ScreenId::Display => {
                let ctx = ViewCtx {
                    session: &self.session,
                    catalog: &self.catalog,
                    cache: &self.cache,
                    profile: &self.profile,
                };
                self.display.handle_mouse(mouse, &ctx)
            }
        };
        self.process_action(action);
    }

    pub fn handle_resize(&mut self, _w: u16, _h: u16) {
        // Layout is recomputed every frame; the canvas mapping just re-scales.
    }

    pub fn tick(&mut self) {
        self.tick += 1;

        // Detect screen changes and trigger transition effects
        let screen = self.session.screen;
        if self.prev_screen != Some(screen) {
            self.fx
                .add_unique_effect("screen_transition", effects::screen_transition());
            match screen {
                ScreenId::Cover | ScreenId::Intro => {
                    self.fx
                        .add_unique_effect("logo_shimmer", effects::logo_shimmer());
                }
                ScreenId::Display => {
                    self.fx.cancel_unique_effect("logo_shimmer");
                    self.fx.add_unique_effect("deal_slide", effects::deal_slide());
                }
                ScreenId::About => {}
            }
            if self.prev_screen == Some(ScreenId::Display) {
                self.display.reset();
            }
            self.prev_screen = Some(screen);
        }

        if screen == ScreenId::Display {
            self.session.handle(Event::Tick, &mut self.rng);
            self.refresh_card_positions();
        }

        // Late-arriving loads (including ones for discarded deals) settle
        // into the cache.
        for result in self.store.drain() {
            match result.art {
                Some(art) => self.cache.complete(result.card_id, art),
                None => self.cache.fail(result.card_id),
            }
        }
    }

    /// Keep each dealt card's canvas position current with the layout.
    fn refresh_card_positions(&mut self) {
        let Some(spread) = self.session.spread else { return };
        let slots = compute_positions(
            spread,
            self.profile.canvas_w,
            self.profile.canvas_h,
            &self.profile,
        );
        for (card, slot) in self.session.cards.iter_mut().zip(&slots) {
            card.x = slot.x;
            card.y = slot.y;
        }
    }

    /// Process a screen action. Returns true if should quit.
    fn process_action(&mut self, action: Option<ScreenAction>) -> bool {
        match action {
            Some(ScreenAction::Quit) => return true,
            Some(ScreenAction::Session(event)) => {
                let commands = self.session.handle(event, &mut self.rng);
                for command in commands {
                    self.run_command(command);
                }
                // A fresh deal starts with every card at the origin; place
                // them before the next press can arrive.
                self.refresh_card_positions();
            }
            None => {}
        }
        false
    }

    fn run_command(&mut self, command: Command) {
        match command {
            Command::RequestImage(card_id) => {
                // At most one request per card for the process lifetime.
                if self.cache.begin_loading(card_id) {
                    if let Some(identity) = self.catalog.get(card_id) {
                        self.store
                            .request(card_id, self.data_dir.join(&identity.asset_path));
                    }
                }
            }
        }
    }
}
