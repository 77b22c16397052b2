use ratatui::layout::Alignment;
use ratatui::prelude::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::theme::Theme;

pub const LOGO_HEIGHT: u16 = 7;

const LOGO: [&str; 5] = [
    " _____  _    ____   ___ _____ ",
    "|_   _|/ \\  |  _ \\ / _ \\_   _|",
    "  | | / _ \\ | |_) | | | || |  ",
    "  | |/ ___ \\|  _ <| |_| || |  ",
    "  |_/_/   \\_\\_| \\_\\\\___/ |_|  ",
];

/// ASCII logo used on the cover and picker screens.
pub struct LogoWidget {
    pub subtitle: Option<&'static str>,
}

impl LogoWidget {
    pub fn new() -> Self {
        Self { subtitle: None }
    }

    pub fn subtitle(mut self, subtitle: &'static str) -> Self {
        self.subtitle = Some(subtitle);
        self
    }
}

impl Default for LogoWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for LogoWidget {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let title_style = Style::default()
            .fg(Theme::GOLD)
            .add_modifier(Modifier::BOLD);
        let mut lines: Vec<Line> = LOGO
            .iter()
            .map(|l| Line::from(Span::styled(*l, title_style)))
            .collect();
        if let Some(subtitle) = self.subtitle {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                subtitle,
                Style::default().fg(Theme::MUTED_TEXT),
            )));
        }
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
