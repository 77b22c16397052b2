use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;

use tarot_core::{CardArt, FaceState};

use crate::theme::Theme;

/// Smallest drawable card, in cells.
pub const MIN_CARD_WIDTH: u16 = 3;
pub const MIN_CARD_HEIGHT: u16 = 3;

/// One tarot card: back, front (decoded art or placeholder), or mid-flip.
pub struct TarotCardWidget<'a> {
    pub name: &'a str,
    pub art: Option<&'a CardArt>,
    pub face: FaceState,
    pub label: Option<&'a str>,
    pub focused: bool,
    /// Drawn turned 90 degrees (the Celtic Cross challenge card); the
    /// caller passes the already-swapped area.
    pub rotated: bool,
}

impl<'a> TarotCardWidget<'a> {
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            art: None,
            face: FaceState::FaceUp,
            label: None,
            focused: false,
            rotated: false,
        }
    }

    pub fn art(mut self, art: Option<&'a CardArt>) -> Self {
        self.art = art;
        self
    }

    pub fn face(mut self, face: FaceState) -> Self {
        self.face = face;
        self
    }

    pub fn label(mut self, label: Option<&'a str>) -> Self {
        self.label = label;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn rotated(mut self, rotated: bool) -> Self {
        self.rotated = rotated;
        self
    }

    /// Horizontal squash of the mid-flip card: full width at the ends of
    /// the animation, a sliver at the halfway point.
    fn flip_factor(&self) -> f32 {
        match self.face {
            FaceState::Flipping(progress) => ((0.5 - progress).abs() * 2.0).clamp(0.05, 1.0),
            _ => 1.0,
        }
    }
}

impl Widget for TarotCardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < MIN_CARD_WIDTH || area.height < MIN_CARD_HEIGHT {
            return;
        }

        // Squash the drawn rect around the area's center while flipping.
        let drawn_w = ((area.width as f32 * self.flip_factor()).round() as u16)
            .clamp(MIN_CARD_WIDTH, area.width);
        let drawn = Rect::new(
            area.x + (area.width - drawn_w) / 2,
            area.y,
            drawn_w,
            area.height,
        );

        let border_color = if self.focused {
            Theme::CARD_FOCUSED
        } else {
            Theme::CARD_BORDER
        };
        let border_style = Style::default().fg(border_color);
        draw_border(drawn, buf, border_style);

        let interior = Rect::new(
            drawn.x + 1,
            drawn.y + 1,
            drawn.width - 2,
            drawn.height - 2,
        );
        if self.face.shows_front() {
            match self.art {
                Some(art) => render_art(art, interior, buf, self.rotated),
                None => render_placeholder(self.name, interior, buf),
            }
        } else {
            render_back(interior, buf);
        }

        // Positional label overlays the top border.
        if let Some(label) = self.label {
            let style = Style::default()
                .fg(Theme::LABEL_TEXT)
                .add_modifier(Modifier::BOLD);
            let max = drawn.width.saturating_sub(1) as usize;
            let text: String = label.chars().take(max).collect();
            buf.set_string(drawn.x + 1, drawn.y, &text, style);
        }
    }
}

fn draw_border(area: Rect, buf: &mut Buffer, style: Style) {
    buf.set_string(area.x, area.y, "\u{256d}", style); // ╭
    buf.set_string(area.x + area.width - 1, area.y, "\u{256e}", style); // ╮
    for x in 1..area.width - 1 {
        buf.set_string(area.x + x, area.y, "\u{2500}", style); // ─
        buf.set_string(area.x + x, area.y + area.height - 1, "\u{2500}", style);
    }
    for y in 1..area.height - 1 {
        buf.set_string(area.x, area.y + y, "\u{2502}", style); // │
        buf.set_string(area.x + area.width - 1, area.y + y, "\u{2502}", style);
    }
    buf.set_string(area.x, area.y + area.height - 1, "\u{2570}", style); // ╰
    buf.set_string(
        area.x + area.width - 1,
        area.y + area.height - 1,
        "\u{256f}",
        style,
    ); // ╯
}

/// Decoded art as half-block pixels: every cell carries two vertically
/// stacked samples, upper in the foreground, lower in the background.
fn render_art(art: &CardArt, area: Rect, buf: &mut Buffer, rotated: bool) {
    for y in 0..area.height {
        for x in 0..area.width {
            let u = (x as f32 + 0.5) / area.width as f32;
            let v_top = (y as f32 * 2.0 + 0.5) / (area.height as f32 * 2.0);
            let v_bot = (y as f32 * 2.0 + 1.5) / (area.height as f32 * 2.0);
            let (top, bot) = if rotated {
                (art.sample(v_top, 1.0 - u), art.sample(v_bot, 1.0 - u))
            } else {
                (art.sample(u, v_top), art.sample(u, v_bot))
            };
            let style = Style::default()
                .fg(ratatui::style::Color::Rgb(top[0], top[1], top[2]))
                .bg(ratatui::style::Color::Rgb(bot[0], bot[1], bot[2]));
            buf.set_string(area.x + x, area.y + y, "\u{2580}", style); // ▀
        }
    }
}

/// Flat fill plus the card name while the art is missing or failed.
fn render_placeholder(name: &str, area: Rect, buf: &mut Buffer) {
    let fill = Style::default().fg(Theme::BUTTON_TEXT).bg(Theme::CARD_FACE);
    for y in 0..area.height {
        for x in 0..area.width {
            buf.set_string(area.x + x, area.y + y, " ", fill);
        }
    }

    // Word-wrapped name, centered.
    let width = area.width as usize;
    let mut lines: Vec<String> = Vec::new();
    for word in name.split_whitespace() {
        match lines.last_mut() {
            Some(line) if line.len() + 1 + word.len() <= width => {
                line.push(' ');
                line.push_str(word);
            }
            _ => lines.push(word.chars().take(width).collect()),
        }
    }
    let top = area.y + area.height.saturating_sub(lines.len() as u16) / 2;
    for (i, line) in lines.iter().enumerate() {
        let y = top + i as u16;
        if y >= area.y + area.height {
            break;
        }
        let x = area.x + (area.width.saturating_sub(line.len() as u16)) / 2;
        buf.set_string(x, y, line, fill);
    }
}

fn render_back(area: Rect, buf: &mut Buffer) {
    for y in 0..area.height {
        for x in 0..area.width {
            let (pattern, color) = if (x + y) % 2 == 0 {
                ("\u{2593}", Theme::CARD_BACK) // ▓
            } else {
                ("\u{2591}", Theme::CARD_BACK_DIM) // ░
            };
            buf.set_string(area.x + x, area.y + y, pattern, Style::default().fg(color));
        }
    }
}
