//! Browser configuration.
//!
//! Defaults cover the common case; host applications override fields with the
//! `with_*` builders or deserialize a [`BrowserConfig`] from their own settings
//! file, then call [`BrowserConfig::validate`].

use crate::cache::{TtlCache, DEFAULT_BLOCK_HEIGHT_TTL};
use crate::error::{Error, Result};
use crate::paginator::DEFAULT_SIBLING_COUNT;
use crate::query::SortKey;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Rows shown per page when not configured.
pub const DEFAULT_PER_PAGE: usize = 9;

/// Largest accepted sibling count.
pub const MAX_SIBLING_COUNT: usize = 5;

/// Stacks network the records come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Stacks mainnet.
    Mainnet,
    /// Stacks testnet.
    #[default]
    Testnet,
}

impl Network {
    /// Address prefix of standard principals on this network.
    pub fn address_prefix(self) -> &'static str {
        match self {
            Network::Mainnet => "SP",
            Network::Testnet => "ST",
        }
    }

    /// The network a standard principal belongs to, judged by its prefix.
    pub fn from_address(address: &str) -> Option<Network> {
        [Network::Mainnet, Network::Testnet]
            .into_iter()
            .find(|n| address.starts_with(n.address_prefix()))
    }

    /// Explorer page for a Stacks address on this network.
    pub fn address_url(self, address: &str) -> String {
        match self {
            Network::Mainnet => format!("https://explorer.hiro.so/address/{address}?chain=mainnet"),
            Network::Testnet => format!("https://explorer.hiro.so/address/{address}?chain=testnet"),
        }
    }

    /// Lowercase network name.
    pub fn name(self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
        }
    }
}

/// Settings shared by the circle and NFT browsers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BrowserConfig {
    /// Rows per page.
    pub per_page: usize,
    /// Page numbers shown on each side of the current page.
    pub sibling_count: usize,
    /// Sort order applied when the browser opens.
    pub default_sort: SortKey,
    /// Network the records come from.
    pub network: Network,
    /// Block-height cache lifetime in seconds.
    pub block_height_ttl_secs: u64,
    /// Characters kept at the start of truncated addresses.
    pub address_head: usize,
    /// Characters kept at the end of truncated addresses.
    pub address_tail: usize,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            sibling_count: DEFAULT_SIBLING_COUNT,
            default_sort: SortKey::default(),
            network: Network::default(),
            block_height_ttl_secs: DEFAULT_BLOCK_HEIGHT_TTL.as_secs(),
            address_head: 5,
            address_tail: 4,
        }
    }
}

impl BrowserConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets rows per page (builder pattern).
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page;
        self
    }

    /// Sets the sibling count (builder pattern).
    pub fn with_sibling_count(mut self, sibling_count: usize) -> Self {
        self.sibling_count = sibling_count;
        self
    }

    /// Sets the initial sort (builder pattern).
    pub fn with_default_sort(mut self, sort: SortKey) -> Self {
        self.default_sort = sort;
        self
    }

    /// Sets the network (builder pattern).
    pub fn with_network(mut self, network: Network) -> Self {
        self.network = network;
        self
    }

    /// Checks that every field is in range.
    pub fn validate(&self) -> Result<()> {
        if self.per_page == 0 {
            return Err(Error::InvalidConfig("perPage must be at least 1".into()));
        }
        if self.sibling_count > MAX_SIBLING_COUNT {
            return Err(Error::InvalidConfig(format!(
                "siblingCount must be at most {MAX_SIBLING_COUNT}, got {}",
                self.sibling_count
            )));
        }
        if self.block_height_ttl_secs == 0 {
            return Err(Error::InvalidConfig(
                "blockHeightTtlSecs must be at least 1".into(),
            ));
        }
        debug!(config = ?self, "browser config validated");
        Ok(())
    }

    /// Block-height cache lifetime.
    pub fn block_height_ttl(&self) -> Duration {
        Duration::from_secs(self.block_height_ttl_secs)
    }

    /// A fresh block-height cache using this configuration's TTL.
    pub fn block_height_cache(&self) -> TtlCache<u64> {
        TtlCache::new(self.block_height_ttl())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = BrowserConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.per_page, DEFAULT_PER_PAGE);
        assert_eq!(config.sibling_count, 1);
        assert_eq!(config.default_sort, SortKey::Newest);
        assert_eq!(config.block_height_ttl(), Duration::from_secs(30));
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let zero = BrowserConfig::new().with_per_page(0);
        assert!(matches!(zero.validate(), Err(Error::InvalidConfig(_))));

        let wide = BrowserConfig::new().with_sibling_count(6);
        assert!(matches!(wide.validate(), Err(Error::InvalidConfig(_))));

        let mut no_ttl = BrowserConfig::new();
        no_ttl.block_height_ttl_secs = 0;
        assert!(no_ttl.validate().is_err());
    }

    #[test]
    fn test_deserialize_partial_json() {
        let json = r#"{"perPage": 12, "defaultSort": "price-low", "network": "mainnet"}"#;
        let config: BrowserConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.per_page, 12);
        assert_eq!(config.default_sort, SortKey::PriceLow);
        assert_eq!(config.network, Network::Mainnet);
        assert_eq!(config.sibling_count, DEFAULT_SIBLING_COUNT);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_sort_in_json_fails() {
        let json = r#"{"defaultSort": "cheapest"}"#;
        assert!(serde_json::from_str::<BrowserConfig>(json).is_err());
    }

    #[test]
    fn test_network_prefix() {
        assert_eq!(Network::Mainnet.address_prefix(), "SP");
        assert_eq!(Network::Testnet.address_prefix(), "ST");
        assert_eq!(
            Network::Mainnet.address_url("SP123"),
            "https://explorer.hiro.so/address/SP123?chain=mainnet"
        );
    }

    #[test]
    fn test_network_from_address() {
        assert_eq!(
            Network::from_address("SP2J6ZY48GV1EZ5V2V5RB9MP66SW86PYKKNRV9EJ7"),
            Some(Network::Mainnet)
        );
        assert_eq!(
            Network::from_address("ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM"),
            Some(Network::Testnet)
        );
        assert_eq!(Network::from_address("0x1234"), None);
        assert_eq!(Network::from_address(""), None);
    }
}
