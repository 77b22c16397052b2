use crate::catalog::DECK_SIZE;

/// Decoded card artwork: a small RGB grid the renderer samples from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardArt {
    pub width: u32,
    pub height: u32,
    /// Row-major RGB triples, `width * height` entries.
    pub pixels: Vec<[u8; 3]>,
}

impl CardArt {
    pub fn new(width: u32, height: u32, pixels: Vec<[u8; 3]>) -> Self {
        debug_assert_eq!(pixels.len(), (width * height) as usize);
        Self { width, height, pixels }
    }

    /// Nearest-neighbour sample at normalized coordinates in 0..1.
    pub fn sample(&self, u: f32, v: f32) -> [u8; 3] {
        let x = ((u * self.width as f32) as u32).min(self.width.saturating_sub(1));
        let y = ((v * self.height as f32) as u32).min(self.height.saturating_sub(1));
        self.pixels[(y * self.width + x) as usize]
    }
}

/// Lifecycle of one card's artwork.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AssetState {
    #[default]
    NotRequested,
    Loading,
    Loaded(CardArt),
    /// Load failed; the slot stays failed and the renderer keeps showing
    /// the placeholder. No retry.
    Failed,
}

/// Per-card asset cache, keyed by catalog id and owned by the app. Updated
/// only through the transition methods below and queried synchronously by
/// the renderer.
#[derive(Debug, Clone)]
pub struct AssetCache {
    slots: Vec<AssetState>,
}

impl Default for AssetCache {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetCache {
    pub fn new() -> Self {
        Self { slots: vec![AssetState::default(); DECK_SIZE] }
    }

    /// Claim the slot for loading. Returns false when the asset was already
    /// requested (loading, loaded, or failed), so a given card's image is
    /// fetched at most once per process.
    pub fn begin_loading(&mut self, card_id: usize) -> bool {
        match self.slots.get_mut(card_id) {
            Some(slot @ AssetState::NotRequested) => {
                *slot = AssetState::Loading;
                true
            }
            _ => false,
        }
    }

    pub fn complete(&mut self, card_id: usize, art: CardArt) {
        if let Some(slot) = self.slots.get_mut(card_id) {
            *slot = AssetState::Loaded(art);
        }
    }

    pub fn fail(&mut self, card_id: usize) {
        if let Some(slot) = self.slots.get_mut(card_id) {
            *slot = AssetState::Failed;
        }
    }

    pub fn get(&self, card_id: usize) -> &AssetState {
        self.slots.get(card_id).unwrap_or(&AssetState::NotRequested)
    }

    pub fn art(&self, card_id: usize) -> Option<&CardArt> {
        match self.get(card_id) {
            AssetState::Loaded(art) => Some(art),
            _ => None,
        }
    }
}
