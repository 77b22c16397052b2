use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use tarot_core::Event;
use tarot_widgets::theme::Theme;

use crate::screens::{Screen, ScreenAction, ViewCtx};

const ABOUT_TEXT: &str = "This deck pairs the 22 major arcana with four suits \
of wishes: Mind, Heart, Body and World. Pick a spread from the list, tap each \
card to turn it over, and tap a turned card to study it up close. Turn on \
Tarot Meanings below to show each card's meaning in the enlarged view.";

pub struct AboutScreen {
    toggle_rect: Rect,
    back_rect: Rect,
}

impl AboutScreen {
    pub fn new() -> Self {
        Self {
            toggle_rect: Rect::default(),
            back_rect: Rect::default(),
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<ScreenAction> {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            let at = (mouse.column, mouse.row).into();
            if self.toggle_rect.contains(at) {
                return Some(ScreenAction::Session(Event::ToggleMeanings));
            }
            if self.back_rect.contains(at) {
                return Some(ScreenAction::Session(Event::CloseAbout));
            }
        }
        None
    }
}

impl Screen for AboutScreen {
    fn render(&mut self, frame: &mut Frame, ctx: &ViewCtx) {
        let area = frame.area();

        let chunks = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(6),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .split(area);

        let title = Paragraph::new(Line::from(Span::styled(
            "About",
            Style::default()
                .fg(Theme::GOLD)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(title, chunks[0]);

        let body_width = area.width.clamp(20, 60);
        let body = Rect::new(
            area.x + area.width.saturating_sub(body_width) / 2,
            chunks[1].y,
            body_width,
            chunks[1].height,
        );
        frame.render_widget(
            Paragraph::new(ABOUT_TEXT)
                .style(Style::default().fg(Theme::BRIGHT_TEXT))
                .wrap(Wrap { trim: true }),
            body,
        );

        // Meanings toggle lights up while enabled.
        let toggle_color = if ctx.session.show_meanings {
            Theme::BUTTON
        } else {
            Theme::BUTTON_MUTED
        };
        self.toggle_rect = centered_button(frame, chunks[2], " Tarot Meanings ", toggle_color);
        self.back_rect = centered_button(frame, chunks[3], " Back ", Theme::BUTTON_MUTED);

        let footer = Paragraph::new(Line::from(vec![
            Span::styled("[", Style::default().fg(Theme::DIM_TEXT)),
            Span::styled("m", Style::default().fg(Theme::GOLD)),
            Span::styled("] Meanings  [", Style::default().fg(Theme::DIM_TEXT)),
            Span::styled("Esc", Style::default().fg(Theme::GOLD)),
            Span::styled("] Back", Style::default().fg(Theme::DIM_TEXT)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(footer, chunks[4]);
    }

    fn handle_key(&mut self, key: KeyEvent, _ctx: &ViewCtx) -> Option<ScreenAction> {
        match key.code {
            KeyCode::Char('m') | KeyCode::Char('M') => {
                Some(ScreenAction::Session(Event::ToggleMeanings))
            }
            KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace => {
                Some(ScreenAction::Session(Event::CloseAbout))
            }
            _ => None,
        }
    }
}

fn centered_button(
    frame: &mut Frame,
    row: Rect,
    text: &str,
    color: ratatui::style::Color,
) -> Rect {
    let width = (text.len() as u16).min(row.width);
    let rect = Rect::new(
        row.x + row.width.saturating_sub(width) / 2,
        row.y,
        width,
        1,
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            text,
            Style::default().fg(Theme::BUTTON_TEXT).bg(color),
        ))),
        rect,
    );
    rect
}
