//! The "advanced" section of the block detail page: contract messages, trie
//! roots, beneficiary and reward, gas, difficulty, extra data and mix hash.

use alloy::primitives::B256;

use crate::data::types::BlockDetails;
use crate::events::LinkTarget;
use crate::i18n::{Translation, keys};
use crate::panel::{Field, Item, ItemLayout, Row, Section, SlotType, Slots, slot_rows};
use crate::theme::Palette;
use crate::utils;

/// Rows holding two hash-sized values side by side
const WIDE_ROW: u16 = 760;
const REWARD_DECIMALS: u8 = 4;

pub struct BlockAdvancedProps<'a> {
    pub block: &'a BlockDetails,
    /// Latest ether price in USD, `None` while unavailable
    pub latest_eth_price: Option<f64>,
    pub translation: &'a dyn Translation,
    pub locale: &'a str,
    pub eth_symbol: &'a str,
    pub slots: &'a Slots,
    /// Host of internal `page://` links
    pub link_host: &'a str,
}

/// Build the panel for `props.block`.
///
/// Absent optional fields drop their row (or their part of a row); the gas,
/// difficulty and extra data rows are always present.
pub fn block_advanced(props: &BlockAdvancedProps<'_>) -> Section {
    let block = props.block;
    let tr = props.translation;

    let mut rows = Vec::new();
    rows.extend(contract_messages_row(props));
    rows.extend(hash_pair_row(
        tr,
        [
            (keys::TX_TRIE_LABEL, block.tx_trie),
            (keys::SHA3_UNCLES_LABEL, block.sha3_uncles),
        ],
    ));
    rows.extend(beneficiary_row(props));
    rows.push(gas_row(props));
    rows.push(Row::new(vec![Item::new(vec![
        Field::Label(tr.get(keys::DIFFICULTY_LABEL)),
        Field::Difficulty(utils::format_u256(block.difficulty, Some(props.locale))),
    ])]));
    match slot_rows(props.slots, SlotType::ExtraData) {
        Some(overrides) => rows.extend_from_slice(overrides),
        None => rows.push(Row::new(vec![Item::with_layout(
            ItemLayout::AutoHeight,
            vec![
                Field::Label(tr.get(keys::EXTRA_DATA_LABEL)),
                Field::DecodedHex(block.extra_data.clone()),
            ],
        )])),
    }
    rows.extend(hash_pair_row(
        tr,
        [
            (keys::MIX_HASH_LABEL, block.mix_hash),
            (keys::RECEIPTS_TRIE_LABEL, block.receipts_trie),
        ],
    ));

    Section { rows }
}

fn contract_messages_row(props: &BlockAdvancedProps<'_>) -> Option<Row> {
    if props.block.tx_count == 0 {
        return None;
    }
    let count = props.block.contract_msg_count.filter(|&n| n > 0)?;
    let tr = props.translation;
    Some(Row::new(vec![Item::new(vec![
        Field::Label(tr.get(keys::CONTRACT_MESSAGES_LABEL)),
        Field::ContractMsgCount(count),
        Field::Text {
            text: tr.get(keys::CONTRACT_MESSAGES_TEXT),
            palette: Palette::Primary,
        },
    ])]))
}

fn hash_pair_row(tr: &dyn Translation, hashes: [(&str, Option<B256>); 2]) -> Option<Row> {
    let items: Vec<Item> = hashes
        .into_iter()
        .filter_map(|(key, hash)| {
            hash.map(|hash| Item::new(vec![Field::Label(tr.get(key)), Field::Hash(hash)]))
        })
        .collect();
    (!items.is_empty()).then(|| Row::new(items).min_width(WIDE_ROW))
}

fn beneficiary_row(props: &BlockAdvancedProps<'_>) -> Option<Row> {
    let block = props.block;
    let tr = props.translation;
    let locale = Some(props.locale);

    let address = block.beneficiary_address?;
    let name = block.beneficiary_name.as_deref().filter(|n| !n.is_empty());

    let mut fields = vec![
        Field::Label(tr.get(keys::BENEFICIARY_LABEL)),
        Field::Address(address),
    ];

    if let Some(name) = name {
        fields.push(Field::Link {
            target: LinkTarget::account(props.link_host, address),
            child: Box::new(Field::MinerLabel(name.to_string())),
        });
    }

    if let Some(seconds) = block.mine_time.filter(|&s| s > 0) {
        let base = tr.get(keys::BENEFICIARY_MINE_TIME);
        let label = match name {
            Some(name) => format!("{name} {base}"),
            None => base,
        };
        fields.push(Field::TimeInPool {
            seconds,
            label,
            palette: Palette::TimeInPool,
        });
    }

    if let Some(reward) = block.beneficiary_reward.filter(|r| !r.is_zero()) {
        let fiat = reference_price(props.latest_eth_price)
            .map(|price| utils::format_fiat_value(reward, price, locale));
        fields.push(Field::Label(tr.get(keys::BENEFICIARY_REWARD_LABEL)));
        fields.push(Field::Reward {
            native: utils::format_eth_value(reward, REWARD_DECIMALS, props.eth_symbol, locale),
            fiat,
            palette: Palette::Reward,
        });
    }

    Some(Row::new(vec![Item::with_layout(ItemLayout::FullRow, fields)]))
}

fn gas_row(props: &BlockAdvancedProps<'_>) -> Row {
    let block = props.block;
    let tr = props.translation;
    let locale = Some(props.locale);

    Row::new(vec![
        Item::new(vec![
            Field::Label(tr.get(keys::GAS_LIMIT)),
            Field::Number(utils::format_number(block.gas_limit, locale)),
        ]),
        Item::new(vec![
            Field::Label(tr.get(keys::GAS_USED)),
            Field::GasUsed {
                used: block.gas_used,
                limit: block.gas_limit,
                text: utils::format_gas_usage(block.gas_used, block.gas_limit, locale),
            },
        ]),
    ])
    .min_width(WIDE_ROW)
}

/// A zero or NaN price counts as unavailable.
fn reference_price(price: Option<f64>) -> Option<f64> {
    price.filter(|p| *p != 0.0 && !p.is_nan())
}
