//! Savings circle records as returned by the indexer.

use crate::query::{ListRecord, RecordStatus, SortKey};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CircleStatus {
    /// Accepting contributions and paying out.
    Active,
    /// Waiting for members before the first round.
    #[default]
    Pending,
    /// Every member has received the pool.
    Completed,
    /// Closed before completion.
    Cancelled,
}

impl RecordStatus for CircleStatus {
    const ALL: &'static [Self] = &[
        CircleStatus::Active,
        CircleStatus::Pending,
        CircleStatus::Completed,
        CircleStatus::Cancelled,
    ];

    fn name(self) -> &'static str {
        match self {
            CircleStatus::Active => "active",
            CircleStatus::Pending => "pending",
            CircleStatus::Completed => "completed",
            CircleStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for CircleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A rotating savings circle.
///
/// Amounts are in microSTX.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Circle {
    /// On-chain circle id.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Creator's Stacks address.
    pub creator: String,
    /// Lifecycle state.
    pub status: CircleStatus,
    /// Current member count.
    pub members: u32,
    /// Member cap; 0 when uncapped.
    pub max_members: u32,
    /// Per-round contribution.
    pub contribution: u64,
    /// Pooled total reported by the indexer, if any.
    pub pool: Option<u64>,
    /// Block height the circle was created at.
    pub created_at: u64,
    /// Whether the current user is a member.
    pub joined: bool,
    /// Whether the current user created the circle.
    pub created_by_me: bool,
}

impl Circle {
    /// Creates a pending circle with no members.
    pub fn new(id: u64, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Sets the member count (builder pattern).
    pub fn with_members(mut self, members: u32) -> Self {
        self.members = members;
        self
    }

    /// Sets the member cap (builder pattern).
    pub fn with_max_members(mut self, max_members: u32) -> Self {
        self.max_members = max_members;
        self
    }

    /// Sets the per-round contribution in microSTX (builder pattern).
    pub fn with_contribution(mut self, micro: u64) -> Self {
        self.contribution = micro;
        self
    }

    /// Sets the pooled total in microSTX (builder pattern).
    pub fn with_pool(mut self, micro: u64) -> Self {
        self.pool = Some(micro);
        self
    }

    /// Sets the status (builder pattern).
    pub fn with_status(mut self, status: CircleStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the creator address (builder pattern).
    pub fn with_creator(mut self, creator: &str) -> Self {
        self.creator = creator.to_string();
        self
    }

    /// Sets the description (builder pattern).
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Marks the circle as joined by the current user (builder pattern).
    pub fn with_joined(mut self, joined: bool) -> Self {
        self.joined = joined;
        self
    }

    /// Pooled total, falling back to contribution × members.
    pub fn pool_total(&self) -> u64 {
        self.pool
            .unwrap_or_else(|| self.contribution.saturating_mul(u64::from(self.members)))
    }

    /// Open seats, or `None` when the circle is uncapped.
    pub fn spots_left(&self) -> Option<u32> {
        (self.max_members > 0).then(|| self.max_members.saturating_sub(self.members))
    }

    /// Whether the member cap has been reached.
    pub fn is_full(&self) -> bool {
        self.spots_left() == Some(0)
    }
}

impl ListRecord for Circle {
    type Status = CircleStatus;

    const SORT_KEYS: &'static [SortKey] = &[
        SortKey::Newest,
        SortKey::Oldest,
        SortKey::Members,
        SortKey::Contribution,
        SortKey::Pool,
    ];

    fn id(&self) -> u64 {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.description.as_str(),
            self.creator.as_str(),
        ]
    }

    fn status(&self) -> CircleStatus {
        self.status
    }

    fn is_mine(&self) -> bool {
        self.joined || self.created_by_me
    }

    fn sort_value(&self, key: SortKey) -> Option<u64> {
        match key {
            SortKey::Newest | SortKey::Oldest | SortKey::Circle => Some(self.id),
            SortKey::Members => Some(u64::from(self.members)),
            SortKey::Contribution => Some(self.contribution),
            SortKey::Pool => Some(self.pool_total()),
            SortKey::PriceLow | SortKey::PriceHigh => None,
        }
    }
}
