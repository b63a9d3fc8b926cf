use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::components::Component;
use crate::events::AppEvent;
use crate::panel::{Field, Item, ItemLayout, Row, Section};
use crate::theme::{THEME, Theme};
use crate::utils;

/// Layout pixels per terminal column when honoring a row's `min_width`
const PX_PER_COLUMN: u16 = 8;
/// Below this width hashes and addresses are shortened
const COMPACT_WIDTH: u16 = 72;
const ITEM_GAP: &str = "    ";

pub struct BlockAdvancedView {
    pub section: Section,
    scroll_offset: u16,
}

impl BlockAdvancedView {
    pub fn new(section: Section) -> Self {
        Self {
            section,
            scroll_offset: 0,
        }
    }

    pub fn set_section(&mut self, section: Section) {
        self.section = section;
    }

    fn scroll_down(&mut self, by: u16) {
        self.scroll_offset = self.scroll_offset.saturating_add(by);
    }

    fn scroll_up(&mut self, by: u16) {
        self.scroll_offset = self.scroll_offset.saturating_sub(by);
    }
}

impl Component for BlockAdvancedView {
    fn handle_key(&mut self, key: KeyEvent) -> Option<AppEvent> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.scroll_down(1),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_up(1),
            KeyCode::PageDown => self.scroll_down(10),
            KeyCode::PageUp => self.scroll_up(10),
            KeyCode::Char('g') | KeyCode::Home => self.scroll_offset = 0,
            KeyCode::Enter => {
                return self.section.first_link().cloned().map(AppEvent::Follow);
            }
            _ => {}
        }
        None
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let outer_block = Block::default()
            .title(" Block Details ")
            .borders(Borders::ALL)
            .border_style(THEME.border_focused_style());

        let inner = outer_block.inner(area);
        let lines = section_lines(&self.section, inner.width, &THEME);

        let max_scroll = u16::try_from(lines.len())
            .unwrap_or(u16::MAX)
            .saturating_sub(inner.height);
        self.scroll_offset = self.scroll_offset.min(max_scroll);

        let paragraph = Paragraph::new(lines)
            .block(outer_block)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll_offset, 0));
        frame.render_widget(paragraph, area);
    }
}

/// Lay a panel out as styled lines for a viewport `width` columns wide.
pub fn section_lines(section: &Section, width: u16, theme: &Theme) -> Vec<Line<'static>> {
    let compact = width < COMPACT_WIDTH;
    let mut lines = Vec::new();

    for (i, row) in section.rows.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.extend(row_lines(row, width, compact, theme));
    }

    lines
}

/// Concatenated span contents of a line
pub fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}

fn row_lines(row: &Row, width: u16, compact: bool, theme: &Theme) -> Vec<Line<'static>> {
    let side_by_side = row
        .min_width
        .is_none_or(|px| width >= px / PX_PER_COLUMN)
        && row.items.iter().all(|item| item.layout == ItemLayout::Inline);

    let per_item: Vec<Vec<Line<'static>>> = row
        .items
        .iter()
        .map(|item| item_lines(item, width, compact, theme))
        .collect();

    if side_by_side && per_item.len() > 1 && per_item.iter().all(|lines| lines.len() == 1) {
        let mut spans = Vec::new();
        for (i, lines) in per_item.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(ITEM_GAP));
            }
            for line in lines {
                spans.extend(line.spans);
            }
        }
        return vec![Line::from(spans)];
    }

    per_item.into_iter().flatten().collect()
}

fn item_lines(item: &Item, width: u16, compact: bool, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();

    for field in &item.fields {
        if let Field::DecodedHex(bytes) = field {
            if !current.is_empty() {
                lines.push(Line::from(std::mem::take(&mut current)));
            }
            lines.extend(decoded_hex_lines(bytes, width, theme));
            continue;
        }
        if !current.is_empty() {
            current.push(Span::raw(" "));
        }
        current.extend(field_spans(field, compact, theme));
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(Line::from(current));
    }

    lines
}

fn field_spans(field: &Field, compact: bool, theme: &Theme) -> Vec<Span<'static>> {
    match field {
        Field::Label(text) => vec![Span::styled(format!("{text}:"), theme.label_style())],
        Field::Text { text, palette } => {
            vec![Span::styled(text.clone(), palette.resolve(theme).style())]
        }
        Field::ContractMsgCount(count) => {
            vec![Span::styled(format!(" {count} "), theme.count_style())]
        }
        Field::Hash(hash) => {
            let text = if compact {
                utils::truncate_hash(hash)
            } else {
                format!("{hash}")
            };
            vec![Span::styled(text, theme.hash_style())]
        }
        Field::Address(address) => {
            let text = if compact {
                utils::truncate_address(address)
            } else {
                format!("{address:#x}")
            };
            vec![Span::styled(text, theme.address_style())]
        }
        Field::MinerLabel(name) => vec![Span::styled(format!("[{name}]"), theme.accent_style())],
        Field::Link { child, .. } => field_spans(child, compact, theme)
            .into_iter()
            .map(|span| span.patch_style(theme.link_style()))
            .collect(),
        Field::TimeInPool {
            seconds,
            label,
            palette,
        } => vec![Span::styled(
            format!(" {label} {} ", utils::format_time_span(*seconds)),
            palette.resolve(theme).style(),
        )],
        Field::Reward {
            native,
            fiat,
            palette,
        } => {
            let text = match fiat {
                Some(fiat) => format!(" {native} = {fiat} "),
                None => format!(" {native} "),
            };
            vec![Span::styled(text, palette.resolve(theme).style())]
        }
        Field::Number(text) | Field::Difficulty(text) => {
            vec![Span::styled(text.clone(), theme.value_style())]
        }
        Field::GasUsed { used, limit, text } => vec![Span::styled(
            text.clone(),
            theme.gas_style(utils::gas_utilization_pct(*used, *limit)),
        )],
        Field::DecodedHex(bytes) => vec![Span::styled(
            alloy::primitives::hex::encode_prefixed(bytes),
            theme.hash_style(),
        )],
    }
}

/// Hex dump of `bytes` wrapped to `width`, followed by the printable text.
fn decoded_hex_lines(bytes: &[u8], width: u16, theme: &Theme) -> Vec<Line<'static>> {
    let hex = alloy::primitives::hex::encode_prefixed(bytes);
    let chunk = usize::from(width.max(8)) - 2;

    let mut lines: Vec<Line<'static>> = hex
        .as_bytes()
        .chunks(chunk)
        .map(|part| {
            Line::from(Span::styled(
                format!("  {}", String::from_utf8_lossy(part)),
                theme.hash_style(),
            ))
        })
        .collect();

    let text = utils::decode_printable(bytes);
    if !text.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("  \"{text}\""),
            theme.value_style(),
        )));
    }
    lines
}
