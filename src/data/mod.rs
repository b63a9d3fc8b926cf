pub mod chains;
pub mod types;

use std::fs;
use std::path::Path;

use alloy::rpc::types::Block;
use clap::ValueEnum;
use color_eyre::eyre::{Result, WrapErr};
use serde_json::Value;

use crate::data::types::BlockDetails;

/// Shape of the JSON document a block is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum InputFormat {
    /// Block explorer details (camelCase `BlockDetails`)
    #[default]
    Details,
    /// `eth_getBlockBy*` result, optionally wrapped in a JSON-RPC envelope
    Rpc,
}

/// Read and decode a block from `path`.
pub fn load_block_details(path: &Path, format: InputFormat) -> Result<BlockDetails> {
    let raw = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read block file {}", path.display()))?;
    let block = parse_block_details(&raw, format)
        .wrap_err_with(|| format!("Failed to decode block file {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        ?format,
        tx_count = block.tx_count,
        "loaded block details"
    );
    Ok(block)
}

pub fn parse_block_details(raw: &str, format: InputFormat) -> Result<BlockDetails> {
    match format {
        InputFormat::Details => Ok(serde_json::from_str(raw)?),
        InputFormat::Rpc => {
            let mut value: Value = serde_json::from_str(raw)?;
            // JSON-RPC envelope
            if let Some(result) = value.get_mut("result") {
                value = result.take();
            }
            let block: Block = serde_json::from_value(value)?;
            Ok(BlockDetails::from(&block))
        }
    }
}
