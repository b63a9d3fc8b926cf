//! Display tree for block panels.
//!
//! Panels are built as plain data, a [`Section`] of [`Row`]s holding [`Item`]s
//! of [`Field`]s, and drawn separately by the terminal components. Building
//! never fails and never touches the terminal.

pub mod block_advanced;

use std::collections::HashMap;

use alloy::primitives::{Address, B256, Bytes};

use crate::events::LinkTarget;
use crate::theme::Palette;

pub use block_advanced::{BlockAdvancedProps, block_advanced};

/// Top-level container of a panel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Section {
    pub rows: Vec<Row>,
}

impl Section {
    /// First link in reading order
    pub fn first_link(&self) -> Option<&LinkTarget> {
        self.rows
            .iter()
            .flat_map(|row| &row.items)
            .flat_map(|item| &item.fields)
            .find_map(|field| match field {
                Field::Link { target, .. } => Some(target),
                _ => None,
            })
    }
}

/// A horizontal group of items.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    /// Width (in layout pixels) below which items stack vertically
    pub min_width: Option<u16>,
    pub items: Vec<Item>,
}

impl Row {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            min_width: None,
            items,
        }
    }

    pub fn min_width(mut self, width: u16) -> Self {
        self.min_width = Some(width);
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ItemLayout {
    #[default]
    Inline,
    /// Occupies the whole row
    FullRow,
    /// Grows to fit multi-line content
    AutoHeight,
}

/// A labelled cell of a row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Item {
    pub layout: ItemLayout,
    pub fields: Vec<Field>,
}

impl Item {
    pub fn new(fields: Vec<Field>) -> Self {
        Self {
            layout: ItemLayout::Inline,
            fields,
        }
    }

    pub fn with_layout(layout: ItemLayout, fields: Vec<Field>) -> Self {
        Self { layout, fields }
    }
}

/// Leaf display widgets.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Label(String),
    Text { text: String, palette: Palette },
    ContractMsgCount(u64),
    Hash(B256),
    Address(Address),
    MinerLabel(String),
    Link { target: LinkTarget, child: Box<Field> },
    TimeInPool { seconds: u64, label: String, palette: Palette },
    Reward { native: String, fiat: Option<String>, palette: Palette },
    Number(String),
    GasUsed { used: u64, limit: u64, text: String },
    Difficulty(String),
    DecodedHex(Bytes),
}

/// Extension points a host can fill to replace a panel's default rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotType {
    ExtraData,
}

/// Replacement rows per extension point.
pub type Slots = HashMap<SlotType, Vec<Row>>;

/// The rows supplied for `slot`, if any are.
pub fn slot_rows(slots: &Slots, slot: SlotType) -> Option<&[Row]> {
    slots
        .get(&slot)
        .map(Vec::as_slice)
        .filter(|rows| !rows.is_empty())
}
