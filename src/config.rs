use std::path::PathBuf;

use clap::Parser;

use crate::data::InputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "eth-block-panel",
    about = "Terminal view of the advanced details of an Ethereum block"
)]
pub struct Config {
    /// JSON file holding the block
    pub file: PathBuf,

    /// Shape of the block file
    #[arg(long, value_enum, default_value_t = InputFormat::Details)]
    pub format: InputFormat,

    /// Latest ether price in USD, used to value the block reward
    #[arg(short, long, env = "ETH_PRICE_USD")]
    pub price: Option<f64>,

    /// Locale for numbers, currency and translations
    #[arg(short, long, default_value = "en-US")]
    pub locale: String,

    /// Chain preset (ethereum, arbitrum, optimism, base, polygon)
    #[arg(long, default_value = "ethereum")]
    pub chain: String,

    /// Currency symbol, overrides the chain preset
    #[arg(long)]
    pub symbol: Option<String>,

    /// Translation file (flat or nested JSON)
    #[arg(short, long)]
    pub translations: Option<PathBuf>,

    /// Host used in account links
    #[arg(long, default_value = "aleth.io")]
    pub link_host: String,

    /// Text shown instead of the decoded extra data (repeatable)
    #[arg(long = "extra-data-override", value_name = "TEXT")]
    pub extra_data_overrides: Vec<String>,

    /// Print the panel as plain text and exit
    #[arg(long)]
    pub print: bool,

    /// Line width for --print
    #[arg(long, default_value = "120")]
    pub width: u16,

    /// Tick rate in milliseconds for UI refresh
    #[arg(long, default_value = "100")]
    pub tick_rate_ms: u64,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
