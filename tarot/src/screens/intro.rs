use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use tarot_core::{Event, Spread};
use tarot_widgets::logo::LogoWidget;
use tarot_widgets::theme::Theme;

use crate::screens::{Screen, ScreenAction, ViewCtx};

const BUTTON_WIDTH: u16 = 26;

/// Spread picker. The last cursor slot is the About button.
pub struct IntroScreen {
    pub cursor: usize,
    /// Rect and logical button index of every button that was actually
    /// drawn, rebuilt every frame for mouse hit-testing. Buttons clipped
    /// by a short terminal are absent, so a click can never land on the
    /// wrong target.
    button_rects: Vec<(Rect, usize)>,
}

impl IntroScreen {
    pub fn new() -> Self {
        Self {
            cursor: 0,
            button_rects: Vec::new(),
        }
    }

    fn activate(&self, index: usize) -> Option<ScreenAction> {
        match Spread::ALL.get(index) {
            Some(spread) => Some(ScreenAction::Session(Event::ChooseSpread(*spread))),
            None => Some(ScreenAction::Session(Event::OpenAbout)),
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<ScreenAction> {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            for (rect, index) in &self.button_rects {
                if rect.contains((mouse.column, mouse.row).into()) {
                    let index = *index;
                    self.cursor = index;
                    return self.activate(index);
                }
            }
        }
        None
    }
}

impl Screen for IntroScreen {
    fn render(&mut self, frame: &mut Frame, _ctx: &ViewCtx) {
        let area = frame.area();

        let chunks = Layout::vertical([
            Constraint::Length(7),
            Constraint::Min(Spread::ALL.len() as u16 * 2 + 2),
            Constraint::Length(2),
            Constraint::Length(2),
        ])
        .split(area);

        frame.render_widget(LogoWidget::new(), chunks[0]);

        self.button_rects.clear();
        let x = area.x + area.width.saturating_sub(BUTTON_WIDTH) / 2;

        // One two-row button per spread.
        for (i, spread) in Spread::ALL.iter().enumerate() {
            let y = chunks[1].y + 1 + i as u16 * 2;
            if y >= chunks[1].bottom() {
                break;
            }
            let rect = Rect::new(x, y, BUTTON_WIDTH, 1);
            self.button_rects.push((rect, i));
            self.render_button(frame, rect, spread.name(), i == self.cursor, Theme::BUTTON);
        }

        // About button, muted.
        let about_rect = Rect::new(x, chunks[2].y, BUTTON_WIDTH, 1);
        self.button_rects.push((about_rect, Spread::ALL.len()));
        self.render_button(
            frame,
            about_rect,
            "About",
            self.cursor == Spread::ALL.len(),
            Theme::BUTTON_MUTED,
        );

        let footer = Paragraph::new(Line::from(vec![
            Span::styled("[", Style::default().fg(Theme::DIM_TEXT)),
            Span::styled("\u{2191}\u{2193}", Style::default().fg(Theme::GOLD)),
            Span::styled("] Navigate  [", Style::default().fg(Theme::DIM_TEXT)),
            Span::styled("Enter", Style::default().fg(Theme::GOLD)),
            Span::styled("] Select  [", Style::default().fg(Theme::DIM_TEXT)),
            Span::styled("q", Style::default().fg(Theme::GOLD)),
            Span::styled("] Quit", Style::default().fg(Theme::DIM_TEXT)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(footer, chunks[3]);
    }

    fn handle_key(&mut self, key: KeyEvent, _ctx: &ViewCtx) -> Option<ScreenAction> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.cursor < Spread::ALL.len() {
                    self.cursor += 1;
                }
            }
            KeyCode::Enter => return self.activate(self.cursor),
            KeyCode::Char('q') => return Some(ScreenAction::Quit),
            _ => {}
        }
        None
    }
}

impl IntroScreen {
    fn render_button(
        &self,
        frame: &mut Frame,
        rect: Rect,
        text: &str,
        selected: bool,
        color: ratatui::style::Color,
    ) {
        let style = if selected {
            Style::default()
                .fg(Theme::BUTTON_TEXT)
                .bg(Theme::CARD_FOCUSED)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Theme::BUTTON_TEXT).bg(color)
        };
        let padded = format!("{:^width$}", text, width = rect.width as usize);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(padded, style))),
            rect,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use tarot_core::{AssetCache, Catalog, SessionState, SizingProfile};

    fn left_click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn render_picker(screen: &mut IntroScreen, width: u16, height: u16) {
        let session = SessionState::new();
        let catalog = Catalog::build("");
        let cache = AssetCache::new();
        let profile = SizingProfile::new(true);
        let ctx = ViewCtx {
            session: &session,
            catalog: &catalog,
            cache: &cache,
            profile: &profile,
        };
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| screen.render(frame, &ctx)).unwrap();
    }

    #[test]
    fn test_about_click_still_opens_about_on_short_terminal() {
        let mut screen = IntroScreen::new();
        render_picker(&mut screen, 60, 12);

        // Too short for the full button column, so some spreads are clipped.
        assert!(screen.button_rects.len() < Spread::ALL.len() + 1);
        let (rect, _) = *screen
            .button_rects
            .iter()
            .find(|(_, index)| *index == Spread::ALL.len())
            .unwrap();

        let action = screen.handle_mouse(left_click(rect.x + rect.width / 2, rect.y));
        assert!(matches!(
            action,
            Some(ScreenAction::Session(Event::OpenAbout))
        ));
        assert_eq!(screen.cursor, Spread::ALL.len());
    }

    #[test]
    fn test_spread_click_deals_that_spread() {
        let mut screen = IntroScreen::new();
        render_picker(&mut screen, 60, 40);

        assert_eq!(screen.button_rects.len(), Spread::ALL.len() + 1);
        let (rect, _) = *screen
            .button_rects
            .iter()
            .find(|(_, index)| *index == 2)
            .unwrap();

        let action = screen.handle_mouse(left_click(rect.x + rect.width / 2, rect.y));
        assert!(matches!(
            action,
            Some(ScreenAction::Session(Event::ChooseSpread(
                Spread::CelticCross
            )))
        ));
    }
}
