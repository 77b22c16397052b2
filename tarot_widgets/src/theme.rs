use ratatui::style::Color;

/// Palette for the tarot TUI.
pub struct Theme;

impl Theme {
    // Backgrounds
    pub const BG: Color = Color::Rgb(8, 8, 12);
    pub const PANEL_BG: Color = Color::Rgb(24, 20, 34);

    // Card surfaces
    pub const CARD_FACE: Color = Color::Rgb(200, 200, 200);
    pub const CARD_BACK: Color = Color::Rgb(52, 36, 94);
    pub const CARD_BACK_DIM: Color = Color::Rgb(30, 22, 56);
    pub const CARD_BORDER: Color = Color::Rgb(108, 117, 125);
    pub const CARD_FOCUSED: Color = Color::Rgb(255, 214, 10);

    // Buttons
    pub const BUTTON: Color = Color::Rgb(200, 150, 0);
    pub const BUTTON_MUTED: Color = Color::Rgb(180, 180, 180);
    pub const BUTTON_TEXT: Color = Color::Rgb(0, 0, 0);

    // Text
    pub const GOLD: Color = Color::Rgb(255, 183, 3);
    pub const BRIGHT_TEXT: Color = Color::Rgb(255, 255, 255);
    pub const MUTED_TEXT: Color = Color::Rgb(160, 160, 180);
    pub const DIM_TEXT: Color = Color::Rgb(100, 100, 120);
    pub const LABEL_TEXT: Color = Color::Rgb(235, 235, 245);
}
