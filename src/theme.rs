use ratatui::style::{Color, Modifier, Style};

pub struct Theme {
    pub bg: Color,
    pub bg_alt: Color,
    pub surface: Color,
    pub text: Color,
    pub text_muted: Color,
    pub text_accent: Color,
    pub secondary: Color,
    pub primary: Color,
    pub error: Color,
    pub warning: Color,
    pub border_focused: Color,
    pub address_color: Color,
    pub hash_color: Color,
    pub tx_type_value: Color,
    pub block_box_text: Color,
    pub cm_count: Color,
    pub gas_low: Color,
    pub gas_med: Color,
    pub gas_high: Color,
}

pub const THEME: Theme = Theme {
    bg: Color::Rgb(16, 16, 28),
    bg_alt: Color::Rgb(30, 30, 48),
    surface: Color::Rgb(24, 24, 40),
    text: Color::Rgb(220, 220, 230),
    text_muted: Color::Rgb(120, 120, 140),
    text_accent: Color::Cyan,
    secondary: Color::Rgb(168, 132, 242),
    primary: Color::Rgb(98, 126, 234),
    error: Color::Red,
    warning: Color::Yellow,
    border_focused: Color::Cyan,
    address_color: Color::Rgb(255, 179, 71),
    hash_color: Color::Rgb(150, 150, 180),
    tx_type_value: Color::Rgb(46, 58, 110),
    block_box_text: Color::Rgb(235, 235, 245),
    cm_count: Color::Rgb(255, 121, 198),
    gas_low: Color::Green,
    gas_med: Color::Yellow,
    gas_high: Color::Red,
};

/// Colors of a themed value box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxColors {
    pub background: Color,
    pub text: Color,
    pub border: Option<Color>,
}

impl BoxColors {
    /// Terminal cells have no box border, so a bordered box is drawn bold.
    pub const fn style(&self) -> Style {
        let style = Style::new().fg(self.text).bg(self.background);
        match self.border {
            Some(_) => style.add_modifier(Modifier::BOLD),
            None => style,
        }
    }
}

/// Named color schemes a panel node can ask for. Resolved against a
/// [`Theme`] only when drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    Primary,
    TimeInPool,
    Reward,
}

impl Palette {
    pub const fn resolve(self, theme: &Theme) -> BoxColors {
        match self {
            Palette::Primary => BoxColors {
                background: theme.surface,
                text: theme.primary,
                border: None,
            },
            Palette::TimeInPool => BoxColors {
                background: theme.bg_alt,
                text: theme.secondary,
                border: Some(theme.secondary),
            },
            Palette::Reward => BoxColors {
                background: theme.tx_type_value,
                text: theme.block_box_text,
                border: None,
            },
        }
    }
}

impl Theme {
    pub const fn header_style(&self) -> Style {
        Style::new().fg(self.text).bg(self.surface)
    }

    pub const fn border_focused_style(&self) -> Style {
        Style::new().fg(self.border_focused)
    }

    pub const fn label_style(&self) -> Style {
        Style::new().fg(self.text_muted)
    }

    pub const fn accent_style(&self) -> Style {
        Style::new().fg(self.text_accent)
    }

    pub const fn link_style(&self) -> Style {
        Style::new()
            .fg(self.text_accent)
            .add_modifier(Modifier::UNDERLINED)
    }

    pub const fn value_style(&self) -> Style {
        Style::new().fg(self.text)
    }

    pub const fn count_style(&self) -> Style {
        Style::new().fg(self.cm_count).add_modifier(Modifier::BOLD)
    }

    pub const fn address_style(&self) -> Style {
        Style::new().fg(self.address_color)
    }

    pub const fn hash_style(&self) -> Style {
        Style::new().fg(self.hash_color)
    }

    pub fn gas_style(&self, utilization_pct: f64) -> Style {
        let color = if utilization_pct < 50.0 {
            self.gas_low
        } else if utilization_pct < 80.0 {
            self.gas_med
        } else {
            self.gas_high
        };
        Style::new().fg(color)
    }
}
