#![allow(dead_code)]

use ratatui::style::Color;
use tachyonfx::fx;
use tachyonfx::{Effect, EffectManager, Interpolation, Motion};

/// Our keyed effect manager using tachyonfx's built-in EffectManager
pub type FxManager = EffectManager<&'static str>;

// ─── Effect Factories ────────────────────────────────────────────────

const DARK: Color = Color::Rgb(8, 8, 12);
const VELVET: Color = Color::Rgb(24, 20, 34);

/// Screen transition: content sweeps in from the left
pub fn screen_transition() -> Effect {
    fx::sweep_in(
        Motion::LeftToRight,
        8,
        2,
        DARK,
        (400, Interpolation::CubicOut),
    )
}

/// Gold shimmer for the logo on the cover and picker screens
pub fn logo_shimmer() -> Effect {
    let shift = fx::hsl_shift_fg([15.0, 0.1, 0.1], (1200, Interpolation::SineInOut));
    fx::repeating(fx::ping_pong(shift))
}

/// Slide in from below when a spread is dealt
pub fn deal_slide() -> Effect {
    fx::slide_in(Motion::DownToUp, 3, 1, VELVET, (350, Interpolation::CubicOut))
}

/// Coalesce for the enlarged card view
pub fn enlarge_coalesce() -> Effect {
    fx::coalesce((300, Interpolation::CubicOut))
}
