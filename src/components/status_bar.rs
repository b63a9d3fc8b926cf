use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::theme::THEME;
use crate::utils;

pub struct StatusBar {
    pub locale: String,
    pub symbol: String,
    pub price: Option<f64>,
    pub error_message: Option<String>,
    pub info_message: Option<String>,
}

impl StatusBar {
    pub fn new(locale: &str, symbol: &str, price: Option<f64>) -> Self {
        Self {
            locale: locale.to_string(),
            symbol: symbol.to_string(),
            price,
            error_message: None,
            info_message: None,
        }
    }

    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.info_message = None;
    }

    fn right_text(&self) -> String {
        let price = self
            .price
            .map(|p| utils::format_currency(p, Some(&self.locale)))
            .unwrap_or_else(|| "--".to_string());
        format!("{} | {} {price} ", self.locale, self.symbol)
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        // Background
        let bg = Block::default().style(THEME.header_style());
        frame.render_widget(bg, area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(40)])
            .split(area);

        // --- Left side ---
        let left_content = if let Some(ref err) = self.error_message {
            Line::from(vec![
                Span::styled(
                    " ! ",
                    Style::default()
                        .fg(THEME.error)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(err.as_str(), Style::default().fg(THEME.warning)),
            ])
        } else if let Some(ref info) = self.info_message {
            Line::from(vec![
                Span::styled(" \u{2192} ", THEME.accent_style()),
                Span::styled(info.as_str(), THEME.link_style()),
            ])
        } else {
            Line::from(vec![
                Span::styled(" \u{2191}\u{2193}", Style::default().fg(THEME.text_accent)),
                Span::styled(":Scroll  ", Style::default().fg(THEME.text_muted)),
                Span::styled("Enter", Style::default().fg(THEME.text_accent)),
                Span::styled(":Open link  ", Style::default().fg(THEME.text_muted)),
                Span::styled("r", Style::default().fg(THEME.text_accent)),
                Span::styled(":Reload  ", Style::default().fg(THEME.text_muted)),
                Span::styled("?", Style::default().fg(THEME.text_accent)),
                Span::styled(":Help  ", Style::default().fg(THEME.text_muted)),
                Span::styled("q", Style::default().fg(THEME.text_accent)),
                Span::styled(":Quit", Style::default().fg(THEME.text_muted)),
            ])
        };

        let left = Paragraph::new(left_content).style(THEME.header_style());
        frame.render_widget(left, chunks[0]);

        // --- Right side: locale, currency and reference price ---
        let right = Paragraph::new(Line::from(Span::styled(
            self.right_text(),
            THEME.accent_style(),
        )))
        .alignment(Alignment::Right)
        .style(THEME.header_style());
        frame.render_widget(right, chunks[1]);
    }
}
