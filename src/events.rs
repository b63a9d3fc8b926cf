use std::fmt;

use alloy::primitives::Address;

/// Internal page a panel link points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    Account { host: String, address: Address },
}

impl LinkTarget {
    pub fn account(host: &str, address: Address) -> Self {
        LinkTarget::Account {
            host: host.to_string(),
            address,
        }
    }
}

impl fmt::Display for LinkTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkTarget::Account { host, address } => {
                write!(f, "page://{host}/account?accountHash={address:#x}")
            }
        }
    }
}

/// Events produced by components for the main app loop
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    Follow(LinkTarget),
    Reload,
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    const MINER: Address = address!("ea674fdde714fd979de3edf0f56aa9716b898ec8");

    #[test]
    fn test_account_uri() {
        let target = LinkTarget::account("aleth.io", MINER);
        assert_eq!(
            target.to_string(),
            "page://aleth.io/account?accountHash=0xea674fdde714fd979de3edf0f56aa9716b898ec8"
        );
    }
}
