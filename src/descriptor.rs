//! Display descriptors: icon, color and label for each kind of record.
//!
//! Every activity kind, status and reputation tier maps to a fixed
//! [`Descriptor`] through a plain `match`, so adding a variant is a compile
//! error until it has a descriptor.

use crate::circle::CircleStatus;
use crate::nft::ListingStatus;
use lipgloss_extras::prelude::*;
use serde::{Deserialize, Serialize};

/// How a record kind is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descriptor {
    /// Single glyph shown before the label.
    pub icon: &'static str,
    /// Hex color token.
    pub color: &'static str,
    /// Human readable label.
    pub label: &'static str,
}

impl Descriptor {
    const fn new(icon: &'static str, color: &'static str, label: &'static str) -> Self {
        Self { icon, color, label }
    }

    /// Renders `icon label` in the descriptor's color.
    pub fn render(&self) -> String {
        Style::new()
            .foreground(Color::from(self.color))
            .render(&format!("{} {}", self.icon, self.label))
    }

    /// Renders the label as a bold badge.
    pub fn badge(&self) -> String {
        Style::new()
            .foreground(Color::from(self.color))
            .bold(true)
            .render(self.label)
    }
}

const GREEN: &str = "#04B575";
const AMBER: &str = "#F2A93B";
const BLUE: &str = "#4F9CF9";
const GREY: &str = "#777777";
const RED: &str = "#E85D75";
const VIOLET: &str = "#AD58B4";

/// Kinds of entries in a circle's activity feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityKind {
    /// A new circle was created.
    CircleCreated,
    /// A member joined.
    MemberJoined,
    /// A member paid into the round.
    Contribution,
    /// The pool was paid out to a member.
    Payout,
    /// A seat NFT was minted.
    NftMinted,
    /// A seat NFT was listed for sale.
    NftListed,
    /// A seat NFT changed hands.
    NftSold,
    /// The last round finished.
    CircleCompleted,
    /// The circle was closed early.
    CircleCancelled,
}

impl ActivityKind {
    /// The descriptor for this kind.
    pub fn descriptor(self) -> Descriptor {
        match self {
            ActivityKind::CircleCreated => Descriptor::new("◎", BLUE, "Circle created"),
            ActivityKind::MemberJoined => Descriptor::new("+", GREEN, "Member joined"),
            ActivityKind::Contribution => Descriptor::new("↑", AMBER, "Contribution"),
            ActivityKind::Payout => Descriptor::new("↓", GREEN, "Payout"),
            ActivityKind::NftMinted => Descriptor::new("◆", VIOLET, "NFT minted"),
            ActivityKind::NftListed => Descriptor::new("$", AMBER, "NFT listed"),
            ActivityKind::NftSold => Descriptor::new("⇄", BLUE, "NFT sold"),
            ActivityKind::CircleCompleted => Descriptor::new("✓", GREY, "Circle completed"),
            ActivityKind::CircleCancelled => Descriptor::new("✗", RED, "Circle cancelled"),
        }
    }
}

/// Badge descriptor for a circle status.
pub fn circle_status(status: CircleStatus) -> Descriptor {
    match status {
        CircleStatus::Active => Descriptor::new("●", GREEN, "Active"),
        CircleStatus::Pending => Descriptor::new("◌", AMBER, "Pending"),
        CircleStatus::Completed => Descriptor::new("✓", GREY, "Completed"),
        CircleStatus::Cancelled => Descriptor::new("✗", RED, "Cancelled"),
    }
}

/// Badge descriptor for an NFT listing status.
pub fn listing_status(status: ListingStatus) -> Descriptor {
    match status {
        ListingStatus::Listed => Descriptor::new("$", GREEN, "Listed"),
        ListingStatus::Unlisted => Descriptor::new("·", GREY, "Unlisted"),
    }
}

/// Highest reputation score.
pub const MAX_REPUTATION: u32 = 1000;

/// Member reputation tiers, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReputationTier {
    /// Below 100.
    Newcomer,
    /// 100 to 299.
    Bronze,
    /// 300 to 549.
    Silver,
    /// 550 to 799.
    Gold,
    /// 800 and above.
    Platinum,
}

/// Lower score bound of each tier, highest first.
const TIER_FLOORS: [(u32, ReputationTier); 5] = [
    (800, ReputationTier::Platinum),
    (550, ReputationTier::Gold),
    (300, ReputationTier::Silver),
    (100, ReputationTier::Bronze),
    (0, ReputationTier::Newcomer),
];

impl ReputationTier {
    /// Looks up the tier for a score. Scores above [`MAX_REPUTATION`] are capped.
    pub fn from_score(score: u32) -> Self {
        let score = score.min(MAX_REPUTATION);
        TIER_FLOORS
            .iter()
            .find(|(floor, _)| score >= *floor)
            .map_or(ReputationTier::Newcomer, |(_, tier)| *tier)
    }

    /// Score needed to reach the next tier, `None` at the top.
    pub fn next_floor(self) -> Option<u32> {
        TIER_FLOORS
            .iter()
            .rev()
            .find(|(_, tier)| *tier > self)
            .map(|(floor, _)| *floor)
    }

    /// The descriptor for this tier.
    pub fn descriptor(self) -> Descriptor {
        match self {
            ReputationTier::Newcomer => Descriptor::new("○", GREY, "Newcomer"),
            ReputationTier::Bronze => Descriptor::new("◔", "#CD7F32", "Bronze"),
            ReputationTier::Silver => Descriptor::new("◑", "#C0C0C0", "Silver"),
            ReputationTier::Gold => Descriptor::new("◕", "#FFD700", "Gold"),
            ReputationTier::Platinum => Descriptor::new("●", "#E5E4E2", "Platinum"),
        }
    }
}
