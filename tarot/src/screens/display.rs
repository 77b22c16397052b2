use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use tarot_core::{compute_positions, enlarged_slot, Event, SizingProfile, Slot};
use tarot_widgets::card::{TarotCardWidget, MIN_CARD_HEIGHT, MIN_CARD_WIDTH};
use tarot_widgets::theme::Theme;

use crate::screens::{Screen, ScreenAction, ViewCtx};

/// Horizontal cells a drag must cover to count as a swipe, and the vertical
/// wobble it may have.
const SWIPE_MIN_DX: i32 = 5;
const SWIPE_MAX_DY: i32 = 2;

/// The dealt spread: grid view and enlarged view.
pub struct DisplayScreen {
    /// Canvas-space geometry of the last rendered frame, for hit-testing.
    slots: Vec<Slot>,
    back_rect: Rect,
    press_origin: Option<(u16, u16)>,
    area: Rect,
}

impl DisplayScreen {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            back_rect: Rect::default(),
            press_origin: None,
            area: Rect::default(),
        }
    }

    pub fn reset(&mut self) {
        self.slots.clear();
        self.press_origin = None;
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent, ctx: &ViewCtx) -> Option<ScreenAction> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.press_origin = Some((mouse.column, mouse.row));
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let (ox, oy) = self.press_origin.take()?;
                let dx = mouse.column as i32 - ox as i32;
                let dy = mouse.row as i32 - oy as i32;

                if ctx.session.focused.is_some() && dx.abs() >= SWIPE_MIN_DX && dy.abs() <= SWIPE_MAX_DY {
                    // Swiping left pulls the next card in.
                    let event = if dx < 0 { Event::FocusNext } else { Event::FocusPrev };
                    return Some(ScreenAction::Session(event));
                }
                self.press(ox, oy, ctx)
            }
            _ => None,
        }
    }

    fn press(&self, col: u16, row: u16, ctx: &ViewCtx) -> Option<ScreenAction> {
        if ctx.session.focused.is_some() {
            return Some(ScreenAction::Session(Event::EnlargedPressed));
        }
        if self.back_rect.contains((col, row).into()) {
            return Some(ScreenAction::Session(Event::Back));
        }
        let (cx, cy) = self.cell_to_canvas(col, row, ctx.profile)?;
        // Presses resolve against each card's own canvas position; the slot
        // only contributes extent and rotation. First card wins where cards
        // overlap (Celtic Cross center).
        let index = ctx
            .session
            .cards
            .iter()
            .zip(&self.slots)
            .position(|(card, slot)| Slot { x: card.x, y: card.y, ..*slot }.contains(cx, cy))?;
        Some(ScreenAction::Session(Event::CardPressed(index)))
    }

    fn cell_to_canvas(&self, col: u16, row: u16, profile: &SizingProfile) -> Option<(f32, f32)> {
        let area = self.area;
        if area.width == 0 || area.height == 0 || !area.contains((col, row).into()) {
            return None;
        }
        let cx = (col - area.x) as f32 + 0.5;
        let cy = (row - area.y) as f32 + 0.5;
        Some((
            cx * profile.canvas_w / area.width as f32,
            cy * profile.canvas_h / area.height as f32,
        ))
    }

    fn slot_to_rect(&self, slot: &Slot, profile: &SizingProfile) -> Rect {
        let area = self.area;
        let sx = area.width as f32 / profile.canvas_w;
        let sy = area.height as f32 / profile.canvas_h;
        let (ew, eh) = slot.extent();
        let w = ((ew * sx).round() as u16).max(MIN_CARD_WIDTH);
        let h = ((eh * sy).round() as u16).max(MIN_CARD_HEIGHT);
        let x = ((slot.x * sx).round() as i32 - w as i32 / 2)
            .clamp(0, area.width.saturating_sub(w) as i32) as u16;
        let y = ((slot.y * sy).round() as i32 - h as i32 / 2)
            .clamp(0, area.height.saturating_sub(h) as i32) as u16;
        Rect::new(area.x + x, area.y + y, w, h)
    }

    fn render_grid(&mut self, frame: &mut Frame, ctx: &ViewCtx) {
        let Some(spread) = ctx.session.spread else { return };
        let profile = ctx.profile;
        self.slots = compute_positions(spread, profile.canvas_w, profile.canvas_h, profile);

        for (card, slot) in ctx.session.cards.iter().zip(&self.slots) {
            let rect = self.slot_to_rect(slot, profile);
            let name = ctx
                .catalog
                .get(card.card_id)
                .map(|c| c.name.as_str())
                .unwrap_or("");
            let widget = TarotCardWidget::new(name)
                .art(ctx.cache.art(card.card_id))
                .face(card.face)
                .label(spread.label(card.position))
                .rotated(slot.rotated);
            frame.render_widget(widget, rect);
        }

        // Back control, bottom-right.
        let area = self.area;
        self.back_rect = Rect::new(
            area.right().saturating_sub(10),
            area.bottom().saturating_sub(2),
            8,
            1,
        );
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "  Back  ",
                Style::default().fg(Theme::BUTTON_TEXT).bg(Theme::BUTTON_MUTED),
            ))),
            self.back_rect,
        );

        let hint = Paragraph::new(Line::from(vec![
            Span::styled(
                format!(" {} ", spread.name()),
                Style::default()
                    .fg(Theme::GOLD)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "tap a card to turn it, tap again to enlarge",
                Style::default().fg(Theme::DIM_TEXT),
            ),
        ]));
        let hint_rect = Rect::new(area.x, area.bottom().saturating_sub(1), area.width, 1);
        frame.render_widget(hint, hint_rect);
    }

    fn render_enlarged(&mut self, frame: &mut Frame, ctx: &ViewCtx) {
        let Some(card) = ctx.session.focused_card() else {
            return;
        };
        let profile = ctx.profile;
        let slot = enlarged_slot(profile.canvas_w, profile.canvas_h, profile);
        let rect = self.slot_to_rect(&slot, profile);

        let identity = ctx.catalog.get(card.card_id);
        let name = identity.map(|c| c.name.as_str()).unwrap_or("");
        let widget = TarotCardWidget::new(name)
            .art(ctx.cache.art(card.card_id))
            .face(card.face)
            .focused(true);
        frame.render_widget(widget, rect);

        // The meaning text sits above the card when enabled.
        if ctx.session.show_meanings {
            if let Some(description) = identity.map(|c| c.description.as_str()) {
                if !description.is_empty() {
                    let band = Rect::new(self.area.x, self.area.y, self.area.width, rect.y.saturating_sub(self.area.y));
                    frame.render_widget(
                        Paragraph::new(description)
                            .style(Style::default().fg(Theme::BRIGHT_TEXT))
                            .alignment(Alignment::Center)
                            .wrap(Wrap { trim: true }),
                        band,
                    );
                }
            }
        }

        let multi = ctx.session.cards.len() > 1;
        let mut spans = vec![Span::styled(
            format!(" {} ", name),
            Style::default()
                .fg(Theme::GOLD)
                .add_modifier(Modifier::BOLD),
        )];
        if multi {
            spans.push(Span::styled(
                "\u{2190}\u{2192} or swipe to browse, tap to return",
                Style::default().fg(Theme::DIM_TEXT),
            ));
        } else {
            spans.push(Span::styled(
                "tap to turn, tap again to finish",
                Style::default().fg(Theme::DIM_TEXT),
            ));
        }
        let hint_rect = Rect::new(
            self.area.x,
            self.area.bottom().saturating_sub(1),
            self.area.width,
            1,
        );
        frame.render_widget(Paragraph::new(Line::from(spans)), hint_rect);
    }
}

impl Screen for DisplayScreen {
    fn render(&mut self, frame: &mut Frame, ctx: &ViewCtx) {
        self.area = frame.area();
        if ctx.session.focused.is_some() {
            self.render_enlarged(frame, ctx);
        } else {
            self.render_grid(frame, ctx);
        }
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &ViewCtx) -> Option<ScreenAction> {
        let focused = ctx.session.focused.is_some();
        match key.code {
            KeyCode::Left | KeyCode::Char('h') if focused => {
                Some(ScreenAction::Session(Event::FocusPrev))
            }
            KeyCode::Right | KeyCode::Char('l') if focused => {
                Some(ScreenAction::Session(Event::FocusNext))
            }
            KeyCode::Enter | KeyCode::Char(' ') if focused => {
                Some(ScreenAction::Session(Event::EnlargedPressed))
            }
            KeyCode::Esc => {
                // Esc steps back out of the enlarged view first; from the
                // grid (or the auto-focused single card) it exits the deal.
                if focused && ctx.session.cards.len() > 1 {
                    Some(ScreenAction::Session(Event::EnlargedPressed))
                } else {
                    Some(ScreenAction::Session(Event::Back))
                }
            }
            _ => None,
        }
    }
}
