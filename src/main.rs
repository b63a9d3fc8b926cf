mod app;
mod components;
mod config;
mod data;
mod events;
mod i18n;
mod panel;
mod theme;
mod utils;

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr, eyre};
use tracing_subscriber::EnvFilter;

use crate::app::{App, PanelContext};
use crate::components::block_advanced::{line_text, section_lines};
use crate::config::Config;
use crate::i18n::Translations;
use crate::panel::{Field, Item, Row, SlotType, Slots};
use crate::theme::{Palette, THEME};

fn main() -> Result<()> {
    color_eyre::install()?;

    let config = Config::parse();

    if let Some(ref path) = config.log_file {
        init_logging(path)?;
    }

    // Explicit symbol wins over the chain preset
    let eth_symbol = match config.symbol.clone() {
        Some(symbol) => symbol,
        None => match data::chains::get_chain_config(&config.chain) {
            Some(chain) => {
                tracing::debug!(chain = %chain.name, chain_id = chain.chain_id, "using chain preset");
                chain.symbol
            }
            None => {
                eprintln!(
                    "Unknown chain '{}', expected one of {}; using ETH",
                    config.chain,
                    data::chains::supported_chains().join(", ")
                );
                "ETH".to_string()
            }
        },
    };

    let translations = Translations::load(config.translations.as_deref(), &config.locale)?;
    let block = data::load_block_details(&config.file, config.format)?;

    let context = PanelContext {
        source: config.file.clone(),
        format: config.format,
        block,
        latest_eth_price: config.price,
        translations,
        locale: config.locale.clone(),
        eth_symbol,
        slots: extra_data_slots(&config.extra_data_overrides),
        link_host: config.link_host.clone(),
    };

    if config.print {
        for line in section_lines(&context.build(), config.width, &THEME) {
            println!("{}", line_text(&line).trim_end());
        }
        return Ok(());
    }

    run_tui(context, config.tick_rate_ms)
}

#[tokio::main]
async fn run_tui(context: PanelContext, tick_rate_ms: u64) -> Result<()> {
    let mut app = App::new(context, tick_rate_ms);

    // Initialize terminal
    let terminal = ratatui::init();
    let result = app.run(terminal).await;

    // Restore terminal
    ratatui::restore();

    result
}

/// One text row per override, filling the extra data slot.
fn extra_data_slots(overrides: &[String]) -> Slots {
    let mut slots = Slots::new();
    if !overrides.is_empty() {
        let rows = overrides
            .iter()
            .map(|text| {
                Row::new(vec![Item::new(vec![Field::Text {
                    text: text.clone(),
                    palette: Palette::Primary,
                }])])
            })
            .collect();
        slots.insert(SlotType::ExtraData, rows);
    }
    slots
}

/// Send tracing output to `path`; the terminal belongs to the UI.
fn init_logging(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("Failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("eth_block_panel=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| eyre!("Failed to initialize logging: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::slot_rows;

    #[test]
    fn test_no_overrides_leave_slot_empty() {
        let slots = extra_data_slots(&[]);
        assert!(slot_rows(&slots, SlotType::ExtraData).is_none());
    }

    #[test]
    fn test_overrides_fill_slot_in_order() {
        let slots = extra_data_slots(&["one".to_string(), "two".to_string()]);
        let rows = slot_rows(&slots, SlotType::ExtraData).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[1].items[0].fields,
            vec![Field::Text {
                text: "two".into(),
                palette: Palette::Primary,
            }]
        );
    }
}
