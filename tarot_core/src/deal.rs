use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::DECK_SIZE;
use crate::spread::Spread;

/// Flip progress gained per animation tick.
pub const FLIP_SPEED: f32 = 0.05;

/// Whether a dealt card shows its back, is mid-flip, or shows its front.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FaceState {
    FaceDown,
    /// Animating, progress in 0..1. The rendered face switches to the
    /// front at the halfway point.
    Flipping(f32),
    FaceUp,
}

impl FaceState {
    pub fn shows_front(&self) -> bool {
        match self {
            FaceState::FaceDown => false,
            FaceState::Flipping(progress) => *progress >= 0.5,
            FaceState::FaceUp => true,
        }
    }

    pub fn is_flipping(&self) -> bool {
        matches!(self, FaceState::Flipping(_))
    }
}

/// One catalog card bound to a spread position. `x`/`y` hold the last
/// computed canvas position so presses can be hit-tested between frames.
#[derive(Debug, Clone, PartialEq)]
pub struct DealtCard {
    pub card_id: usize,
    pub position: usize,
    pub x: f32,
    pub y: f32,
    pub face: FaceState,
}

impl DealtCard {
    fn new(card_id: usize, position: usize, face: FaceState) -> Self {
        Self { card_id, position, x: 0.0, y: 0.0, face }
    }

    /// Start the flip animation. No-op unless the card is face down.
    pub fn begin_flip(&mut self) {
        if self.face == FaceState::FaceDown {
            self.face = FaceState::Flipping(0.0);
        }
    }

    /// Advance the flip by one tick. Only flipping cards move; at full
    /// progress the card settles face up.
    pub fn tick_flip(&mut self) {
        if let FaceState::Flipping(progress) = self.face {
            let progress = progress + FLIP_SPEED;
            self.face = if progress >= 1.0 {
                FaceState::FaceUp
            } else {
                FaceState::Flipping(progress)
            };
        }
    }
}

/// Bind cards to the positions of a spread.
///
/// "Full Deck" deals the identity assignment, every card face up. Any
/// other spread draws `position_count` distinct cards from a uniformly
/// shuffled deck, all face down.
pub fn deal<R: Rng>(spread: Spread, rng: &mut R) -> Vec<DealtCard> {
    let count = spread.position_count();

    if spread == Spread::FullDeck {
        return (0..count)
            .map(|i| DealtCard::new(i, i, FaceState::FaceUp))
            .collect();
    }

    let mut indices: Vec<usize> = (0..DECK_SIZE).collect();
    indices.shuffle(rng);
    indices
        .into_iter()
        .take(count)
        .enumerate()
        .map(|(pos, id)| DealtCard::new(id, pos, FaceState::FaceDown))
        .collect()
}
