use rand::Rng;

use crate::deal::{deal, DealtCard, FaceState};
use crate::spread::Spread;

/// Top-level screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenId {
    Cover,
    Intro,
    About,
    Display,
}

/// User-level events the presentation adapter feeds into the session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Any press or key on the cover screen.
    AdvanceCover,
    ChooseSpread(Spread),
    OpenAbout,
    CloseAbout,
    ToggleMeanings,
    /// Press on a card while the spread grid is showing.
    CardPressed(usize),
    /// Press anywhere while a card is enlarged.
    EnlargedPressed,
    /// The dedicated back control.
    Back,
    FocusNext,
    FocusPrev,
    /// One animation frame.
    Tick,
}

/// Side effects a transition asks the host to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    RequestImage(usize),
}

/// The single owned session value. All mutation goes through `handle`.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub screen: ScreenId,
    pub spread: Option<Spread>,
    pub cards: Vec<DealtCard>,
    /// Index of the enlarged card, if any.
    pub focused: Option<usize>,
    pub show_meanings: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            screen: ScreenId::Cover,
            spread: None,
            cards: Vec::new(),
            focused: None,
            show_meanings: false,
        }
    }

    /// Apply one event, returning the side-effect commands it produced.
    pub fn handle<R: Rng>(&mut self, event: Event, rng: &mut R) -> Vec<Command> {
        match event {
            Event::AdvanceCover => {
                if self.screen == ScreenId::Cover {
                    self.screen = ScreenId::Intro;
                }
                Vec::new()
            }

            Event::ChooseSpread(spread) => self.start_spread(spread, rng),

            Event::OpenAbout => {
                if self.screen == ScreenId::Intro {
                    self.screen = ScreenId::About;
                }
                Vec::new()
            }

            Event::CloseAbout => {
                if self.screen == ScreenId::About {
                    self.screen = ScreenId::Intro;
                }
                Vec::new()
            }

            Event::ToggleMeanings => {
                self.show_meanings = !self.show_meanings;
                Vec::new()
            }

            Event::CardPressed(index) => {
                self.press_card(index);
                Vec::new()
            }

            Event::EnlargedPressed => {
                self.press_enlarged();
                Vec::new()
            }

            Event::Back => {
                if self.screen == ScreenId::Display {
                    self.exit_display();
                }
                Vec::new()
            }

            Event::FocusNext => {
                self.move_focus(1);
                Vec::new()
            }

            Event::FocusPrev => {
                self.move_focus(-1);
                Vec::new()
            }

            Event::Tick => {
                for card in &mut self.cards {
                    card.tick_flip();
                }
                Vec::new()
            }
        }
    }

    fn start_spread<R: Rng>(&mut self, spread: Spread, rng: &mut R) -> Vec<Command> {
        if self.screen != ScreenId::Intro {
            return Vec::new();
        }
        self.cards = deal(spread, rng);
        self.spread = Some(spread);
        self.screen = ScreenId::Display;
        // The single card goes straight to the enlarged view.
        self.focused = (spread == Spread::SingleCard).then_some(0);
        self.cards
            .iter()
            .map(|c| Command::RequestImage(c.card_id))
            .collect()
    }

    /// Tap semantics on the spread grid: a face-down card flips in place,
    /// a face-up card enlarges, a mid-flip card ignores the press.
    fn press_card(&mut self, index: usize) {
        if self.screen != ScreenId::Display || self.focused.is_some() {
            return;
        }
        let Some(card) = self.cards.get_mut(index) else {
            return;
        };
        match card.face {
            FaceState::FaceDown => card.begin_flip(),
            FaceState::FaceUp => self.focused = Some(index),
            FaceState::Flipping(_) => {}
        }
    }

    /// Press while enlarged. The single-card spread flips first and exits
    /// on the next press; every other spread returns to the grid.
    fn press_enlarged(&mut self) {
        let Some(index) = self.focused else { return };
        if self.spread == Some(Spread::SingleCard) {
            match self.cards[index].face {
                FaceState::FaceDown => self.cards[index].begin_flip(),
                FaceState::FaceUp => self.exit_display(),
                FaceState::Flipping(_) => {}
            }
        } else {
            self.focused = None;
        }
    }

    fn exit_display(&mut self) {
        self.screen = ScreenId::Intro;
        self.spread = None;
        self.cards.clear();
        self.focused = None;
    }

    /// Sequential navigation of the enlarged view, clamped, no wraparound.
    fn move_focus(&mut self, delta: isize) {
        let Some(index) = self.focused else { return };
        if self.cards.len() <= 1 {
            return;
        }
        let next = index.saturating_add_signed(delta);
        if next < self.cards.len() {
            self.focused = Some(next);
        }
    }

    /// Whether any card is mid-flip (drives the animation loop).
    pub fn any_flipping(&self) -> bool {
        self.cards.iter().any(|c| c.face.is_flipping())
    }

    pub fn focused_card(&self) -> Option<&DealtCard> {
        self.focused.and_then(|i| self.cards.get(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn session_on(spread: Spread) -> (SessionState, StdRng) {
        let mut rng = rng();
        let mut session = SessionState::new();
        session.handle(Event::AdvanceCover, &mut rng);
        session.handle(Event::ChooseSpread(spread), &mut rng);
        (session, rng)
    }

    #[test]
    fn test_cover_advances_to_intro_once() {
        let mut rng = rng();
        let mut session = SessionState::new();
        assert_eq!(session.screen, ScreenId::Cover);
        session.handle(Event::AdvanceCover, &mut rng);
        assert_eq!(session.screen, ScreenId::Intro);
        session.handle(Event::AdvanceCover, &mut rng);
        assert_eq!(session.screen, ScreenId::Intro);
    }

    #[test]
    fn test_about_round_trip() {
        let mut rng = rng();
        let mut session = SessionState::new();
        session.handle(Event::AdvanceCover, &mut rng);
        session.handle(Event::OpenAbout, &mut rng);
        assert_eq!(session.screen, ScreenId::About);
        session.handle(Event::ToggleMeanings, &mut rng);
        assert!(session.show_meanings);
        session.handle(Event::CloseAbout, &mut rng);
        assert_eq!(session.screen, ScreenId::Intro);
        // The toggle survives leaving the about screen.
        assert!(session.show_meanings);
    }

    #[test]
    fn test_choosing_a_spread_deals_and_requests_images() {
        let mut rng = rng();
        let mut session = SessionState::new();
        session.handle(Event::AdvanceCover, &mut rng);
        let commands = session.handle(Event::ChooseSpread(Spread::PastPresentFuture), &mut rng);
        assert_eq!(session.screen, ScreenId::Display);
        assert_eq!(session.cards.len(), 3);
        assert_eq!(commands.len(), 3);
        for (card, command) in session.cards.iter().zip(&commands) {
            assert_eq!(*command, Command::RequestImage(card.card_id));
        }
    }

    #[test]
    fn test_spread_choice_outside_intro_is_ignored() {
        let (mut session, mut rng) = session_on(Spread::Star);
        let commands = session.handle(Event::ChooseSpread(Spread::Year), &mut rng);
        assert!(commands.is_empty());
        assert_eq!(session.spread, Some(Spread::Star));
        assert_eq!(session.cards.len(), 4);
    }

    #[test]
    fn test_press_flips_then_enlarges() {
        let (mut session, mut rng) = session_on(Spread::PastPresentFuture);
        session.handle(Event::CardPressed(1), &mut rng);
        assert!(session.cards[1].face.is_flipping());
        assert!(session.focused.is_none());

        // Pressing again mid-flip does nothing.
        session.handle(Event::CardPressed(1), &mut rng);
        assert!(session.cards[1].face.is_flipping());

        while session.any_flipping() {
            session.handle(Event::Tick, &mut rng);
        }
        assert_eq!(session.cards[1].face, FaceState::FaceUp);

        session.handle(Event::CardPressed(1), &mut rng);
        assert_eq!(session.focused, Some(1));

        // A press while enlarged returns to the grid, not to the picker.
        session.handle(Event::EnlargedPressed, &mut rng);
        assert_eq!(session.focused, None);
        assert_eq!(session.screen, ScreenId::Display);
    }

    #[test]
    fn test_single_card_auto_focuses_flips_then_exits() {
        let (mut session, mut rng) = session_on(Spread::SingleCard);
        assert_eq!(session.focused, Some(0));
        assert_eq!(session.cards[0].face, FaceState::FaceDown);

        session.handle(Event::EnlargedPressed, &mut rng);
        assert!(session.cards[0].face.is_flipping());
        while session.any_flipping() {
            session.handle(Event::Tick, &mut rng);
        }

        // Second press, once face up, exits straight to the picker.
        session.handle(Event::EnlargedPressed, &mut rng);
        assert_eq!(session.screen, ScreenId::Intro);
        assert!(session.cards.is_empty());
        assert_eq!(session.focused, None);
        assert_eq!(session.spread, None);
    }

    #[test]
    fn test_full_deck_enlarges_without_flipping() {
        let (mut session, mut rng) = session_on(Spread::FullDeck);
        assert!(session.focused.is_none());
        session.handle(Event::CardPressed(40), &mut rng);
        assert_eq!(session.focused, Some(40));
    }

    #[test]
    fn test_back_clears_the_deal() {
        let (mut session, mut rng) = session_on(Spread::CelticCross);
        session.handle(Event::Back, &mut rng);
        assert_eq!(session.screen, ScreenId::Intro);
        assert!(session.cards.is_empty());
        assert_eq!(session.spread, None);
    }

    #[test]
    fn test_focus_navigation_clamps_at_both_ends() {
        let (mut session, mut rng) = session_on(Spread::FullDeck);
        session.handle(Event::CardPressed(0), &mut rng);
        session.handle(Event::FocusPrev, &mut rng);
        assert_eq!(session.focused, Some(0));

        for _ in 0..100 {
            session.handle(Event::FocusNext, &mut rng);
        }
        assert_eq!(session.focused, Some(77));
        session.handle(Event::FocusNext, &mut rng);
        assert_eq!(session.focused, Some(77));
    }

    #[test]
    fn test_focus_navigation_needs_more_than_one_card() {
        let (mut session, mut rng) = session_on(Spread::SingleCard);
        session.handle(Event::FocusNext, &mut rng);
        assert_eq!(session.focused, Some(0));
        session.handle(Event::FocusPrev, &mut rng);
        assert_eq!(session.focused, Some(0));
    }

    #[test]
    fn test_grid_presses_ignored_while_enlarged() {
        let (mut session, mut rng) = session_on(Spread::FullDeck);
        session.handle(Event::CardPressed(3), &mut rng);
        assert_eq!(session.focused, Some(3));
        session.handle(Event::CardPressed(5), &mut rng);
        assert_eq!(session.focused, Some(3));
    }

    #[test]
    fn test_out_of_range_press_is_a_no_op() {
        let (mut session, mut rng) = session_on(Spread::Star);
        session.handle(Event::CardPressed(99), &mut rng);
        assert!(session.focused.is_none());
        assert!(session.cards.iter().all(|c| c.face == FaceState::FaceDown));
    }

    #[test]
    fn test_cards_flip_concurrently_and_independently() {
        let (mut session, mut rng) = session_on(Spread::Smart);
        session.handle(Event::CardPressed(0), &mut rng);
        for _ in 0..5 {
            session.handle(Event::Tick, &mut rng);
        }
        session.handle(Event::CardPressed(4), &mut rng);
        session.handle(Event::Tick, &mut rng);

        let (FaceState::Flipping(first), FaceState::Flipping(late)) =
            (session.cards[0].face, session.cards[4].face)
        else {
            panic!("both cards should be mid-flip");
        };
        assert!(first > late);
        assert_eq!(session.cards[1].face, FaceState::FaceDown);
    }
}
