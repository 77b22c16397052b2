use crossterm::event::KeyEvent;
use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use tarot_core::Event;
use tarot_widgets::logo::LogoWidget;
use tarot_widgets::theme::Theme;

use crate::screens::{Screen, ScreenAction, ViewCtx};

pub struct CoverScreen;

impl CoverScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Screen for CoverScreen {
    fn render(&mut self, frame: &mut Frame, _ctx: &ViewCtx) {
        let area = frame.area();

        let chunks = Layout::vertical([
            Constraint::Percentage(35),
            Constraint::Length(8),
            Constraint::Min(1),
            Constraint::Length(2),
        ])
        .split(area);

        frame.render_widget(LogoWidget::new().subtitle("a deck of wishes"), chunks[1]);

        let hint = Paragraph::new(Line::from(Span::styled(
            "press any key or tap to begin",
            Style::default().fg(Theme::DIM_TEXT),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(hint, chunks[3]);
    }

    fn handle_key(&mut self, _key: KeyEvent, _ctx: &ViewCtx) -> Option<ScreenAction> {
        Some(ScreenAction::Session(Event::AdvanceCover))
    }
}
