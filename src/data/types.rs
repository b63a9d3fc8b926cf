use alloy::primitives::{Address, B256, Bytes, U256};
use alloy::rpc::types::Block;
use serde::{Deserialize, Serialize};

/// Block fields shown by the advanced block panel.
///
/// Everything except the gas figures and difficulty is optional since not
/// every block format populates every field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockDetails {
    #[serde(default)]
    pub tx_count: usize,
    pub contract_msg_count: Option<u64>,
    pub tx_trie: Option<B256>,
    #[serde(rename = "sha3Uncles")]
    pub sha3_uncles: Option<B256>,
    pub beneficiary_address: Option<Address>,
    pub beneficiary_name: Option<String>,
    /// Seconds
    pub mine_time: Option<u64>,
    /// Wei
    pub beneficiary_reward: Option<U256>,
    pub gas_limit: u64,
    pub gas_used: u64,
    pub difficulty: U256,
    #[serde(default)]
    pub extra_data: Bytes,
    pub mix_hash: Option<B256>,
    pub receipts_trie: Option<B256>,
}

impl From<&Block> for BlockDetails {
    fn from(block: &Block) -> Self {
        let header = &block.header;
        Self {
            tx_count: block.transactions.len(),
            contract_msg_count: None,
            tx_trie: Some(header.transactions_root),
            sha3_uncles: Some(header.ommers_hash),
            beneficiary_address: Some(header.beneficiary),
            beneficiary_name: None,
            mine_time: None,
            beneficiary_reward: None,
            gas_limit: header.gas_limit,
            gas_used: header.gas_used,
            difficulty: header.difficulty,
            extra_data: header.extra_data.clone(),
            mix_hash: Some(header.mix_hash),
            receipts_trie: Some(header.receipts_root),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChainConfig {
    pub name: String,
    pub chain_id: u64,
    pub symbol: String,
}
