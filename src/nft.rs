//! Circle membership NFTs and their marketplace listing state.

use crate::query::{ListRecord, RecordStatus, SortKey};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a token is offered for sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    /// Has an asking price.
    Listed,
    /// Not for sale.
    Unlisted,
}

impl RecordStatus for ListingStatus {
    const ALL: &'static [Self] = &[ListingStatus::Listed, ListingStatus::Unlisted];

    fn name(self) -> &'static str {
        match self {
            ListingStatus::Listed => "listed",
            ListingStatus::Unlisted => "unlisted",
        }
    }
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A membership token minted for a circle seat.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NftToken {
    /// Token id.
    pub token_id: u64,
    /// Display name.
    pub name: String,
    /// Circle the seat belongs to.
    pub circle_id: u64,
    /// Current owner's Stacks address.
    pub owner: String,
    /// Mint time, unix seconds.
    pub minted_at: u64,
    /// Asking price in microSTX when listed.
    pub price: Option<u64>,
    /// Whether the current user owns the token.
    pub owned_by_me: bool,
}

impl NftToken {
    /// Creates an unlisted token.
    pub fn new(token_id: u64, name: &str, circle_id: u64) -> Self {
        Self {
            token_id,
            name: name.to_string(),
            circle_id,
            ..Default::default()
        }
    }

    /// Lists the token at `micro` microSTX (builder pattern).
    pub fn with_price(mut self, micro: u64) -> Self {
        self.price = Some(micro);
        self
    }

    /// Sets the mint time (builder pattern).
    pub fn with_minted_at(mut self, minted_at: u64) -> Self {
        self.minted_at = minted_at;
        self
    }

    /// Sets the owner address (builder pattern).
    pub fn with_owner(mut self, owner: &str) -> Self {
        self.owner = owner.to_string();
        self
    }

    /// Marks the token as owned by the current user (builder pattern).
    pub fn with_owned_by_me(mut self, mine: bool) -> Self {
        self.owned_by_me = mine;
        self
    }

    /// `Listed` exactly when a price is set.
    pub fn listing_status(&self) -> ListingStatus {
        if self.price.is_some() {
            ListingStatus::Listed
        } else {
            ListingStatus::Unlisted
        }
    }
}

impl ListRecord for NftToken {
    type Status = ListingStatus;

    const SORT_KEYS: &'static [SortKey] = &[
        SortKey::Newest,
        SortKey::Oldest,
        SortKey::PriceLow,
        SortKey::PriceHigh,
        SortKey::Circle,
    ];

    fn id(&self) -> u64 {
        self.token_id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.owner.as_str()]
    }

    fn status(&self) -> ListingStatus {
        self.listing_status()
    }

    fn is_mine(&self) -> bool {
        self.owned_by_me
    }

    fn sort_value(&self, key: SortKey) -> Option<u64> {
        match key {
            SortKey::Newest | SortKey::Oldest => Some(self.minted_at),
            SortKey::PriceLow | SortKey::PriceHigh => self.price,
            SortKey::Circle => Some(self.circle_id),
            SortKey::Members | SortKey::Contribution | SortKey::Pool => None,
        }
    }
}
