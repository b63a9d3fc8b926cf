use crossterm::event::KeyEvent;
use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::theme::THEME;

const SHORTCUTS: [(&str, &str); 8] = [
    ("\u{2191}/k", "Scroll up"),
    ("\u{2193}/j", "Scroll down"),
    ("PgUp/PgDn", "Scroll a page"),
    ("g/Home", "Go to top"),
    ("Enter", "Follow beneficiary link"),
    ("r", "Reload block file"),
    ("?", "Toggle this help"),
    ("q/Esc", "Quit"),
];

pub struct HelpOverlay {
    pub visible: bool,
}

impl HelpOverlay {
    pub fn new() -> Self {
        Self { visible: false }
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    /// Returns true if it consumed the event
    pub fn handle_key(&mut self, _key: KeyEvent) -> bool {
        if self.visible {
            self.visible = false;
            true
        } else {
            false
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if !self.visible {
            return;
        }

        let popup_area = popup_rect(area);

        // Clear the area behind the popup
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Keyboard Shortcuts ")
            .borders(Borders::ALL)
            .border_style(THEME.border_focused_style())
            .style(Style::default().bg(THEME.surface));

        let mut help_text = vec![Line::from(Span::styled(
            "Block Panel",
            Style::default()
                .fg(THEME.text_accent)
                .add_modifier(Modifier::BOLD),
        ))];
        help_text.extend(SHORTCUTS.iter().map(|(key, action)| {
            Line::from(vec![
                Span::styled(format!("  {key:<11}"), Style::default().fg(THEME.text_accent)),
                Span::styled(*action, Style::default().fg(THEME.text)),
            ])
        }));

        let paragraph = Paragraph::new(help_text)
            .block(block)
            .wrap(Wrap { trim: false });

        frame.render_widget(paragraph, popup_area);
    }
}

/// Centered popup, 60% of the width but at least 40 columns.
fn popup_rect(area: Rect) -> Rect {
    let popup_width = (area.width / 5 * 3).max(40).min(area.width);
    let popup_height = (SHORTCUTS.len() as u16 + 4).min(area.height);
    let x = area.x.saturating_add((area.width - popup_width) / 2);
    let y = area.y.saturating_add((area.height - popup_height) / 2);
    Rect {
        x,
        y,
        width: popup_width,
        height: popup_height,
    }
}
