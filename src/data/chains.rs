use crate::data::types::ChainConfig;

/// Get a chain configuration preset by name.
pub fn get_chain_config(name: &str) -> Option<ChainConfig> {
    let (name, chain_id, symbol) = match name.to_lowercase().as_str() {
        "ethereum" | "eth" | "mainnet" => ("Ethereum", 1, "ETH"),
        "arbitrum" | "arb" => ("Arbitrum One", 42161, "ETH"),
        "optimism" | "op" => ("Optimism", 10, "ETH"),
        "base" => ("Base", 8453, "ETH"),
        "polygon" | "matic" => ("Polygon", 137, "MATIC"),
        _ => return None,
    };
    Some(ChainConfig {
        name: name.to_string(),
        chain_id,
        symbol: symbol.to_string(),
    })
}

/// Return a list of all supported chain names.
pub fn supported_chains() -> Vec<&'static str> {
    vec!["ethereum", "arbitrum", "optimism", "base", "polygon"]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ethereum_config() {
        let config = get_chain_config("ethereum").unwrap();
        assert_eq!(config.chain_id, 1);
        assert_eq!(config.symbol, "ETH");
    }

    #[test]
    fn test_ethereum_aliases() {
        assert!(get_chain_config("eth").is_some());
        assert!(get_chain_config("mainnet").is_some());
        assert!(get_chain_config("Ethereum").is_some());
    }

    #[test]
    fn test_polygon_config() {
        let config = get_chain_config("polygon").unwrap();
        assert_eq!(config.chain_id, 137);
        assert_eq!(config.symbol, "MATIC");
        assert!(get_chain_config("matic").is_some());
    }

    #[test]
    fn test_unknown_chain() {
        assert!(get_chain_config("unknown").is_none());
    }

    #[test]
    fn test_supported_chains_resolve() {
        let chains = supported_chains();
        assert_eq!(chains.len(), 5);
        for chain in chains {
            assert!(get_chain_config(chain).is_some(), "{chain} has no preset");
        }
    }
}
