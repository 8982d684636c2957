//! Row delegates: one line of text per record.
//!
//! The browser owns selection, paging and the query; a [`RowDelegate`] only
//! turns a record into a row. [`CircleRow`] and [`NftRow`] cover the two record
//! types in this crate, and host applications can supply their own.

use crate::cache::TtlCache;
use crate::circle::Circle;
use crate::config::BrowserConfig;
use crate::descriptor;
use crate::format::{
    format_blocks_remaining, format_relative_time, format_stx, truncate_address, truncate_text,
};
use crate::nft::NftToken;
use crate::query::ListRecord;
use lipgloss_extras::prelude::*;
use std::time::{SystemTime, UNIX_EPOCH};
use unicode_width::UnicodeWidthStr;

/// Width below which delegates drop their trailing detail columns.
pub const COMPACT_WIDTH: usize = 72;

/// Renders records of type `R` as rows.
pub trait RowDelegate<R: ListRecord> {
    /// Renders one row. `width` is the space available in terminal columns.
    fn render(&self, record: &R, selected: bool, width: usize) -> String;

    /// The record's Stacks address for copying, if it has one.
    fn address<'a>(&self, _record: &'a R) -> Option<&'a str> {
        None
    }

    /// Singular and plural noun for the record type, e.g. `("circle", "circles")`.
    fn noun(&self) -> (&'static str, &'static str) {
        ("item", "items")
    }
}

/// Pads or cuts `text` to exactly `width` terminal columns.
pub fn fit(text: &str, width: usize) -> String {
    let mut max = width;
    let mut out = truncate_text(text, max);
    while UnicodeWidthStr::width(out.as_str()) > width && max > 0 {
        max -= 1;
        out = truncate_text(text, max);
    }
    let pad = width.saturating_sub(UnicodeWidthStr::width(out.as_str()));
    out.push_str(&" ".repeat(pad));
    out
}

/// Shared look of the two built-in delegates.
#[derive(Debug, Clone)]
pub struct RowStyles {
    /// Marker in front of the highlighted row.
    pub cursor: Style,
    /// Title of the highlighted row.
    pub selected_title: Style,
    /// Title of other rows.
    pub title: Style,
    /// Secondary columns.
    pub detail: Style,
}

impl Default for RowStyles {
    fn default() -> Self {
        Self {
            cursor: Style::new().foreground(Color::from("#EE6FF8")).bold(true),
            selected_title: Style::new().foreground(Color::from("#EE6FF8")),
            title: Style::new().foreground(Color::from("#DDDDDD")),
            detail: Style::new().foreground(Color::from("#777777")),
        }
    }
}

impl RowStyles {
    fn marker(&self, selected: bool) -> String {
        if selected {
            self.cursor.render("›")
        } else {
            " ".to_string()
        }
    }

    fn title(&self, text: &str, selected: bool) -> String {
        if selected {
            self.selected_title.render(text)
        } else {
            self.title.render(text)
        }
    }
}

/// Address truncation lengths, shared with [`BrowserConfig`].
#[derive(Debug, Clone, Copy)]
struct AddressFormat {
    head: usize,
    tail: usize,
}

impl From<&BrowserConfig> for AddressFormat {
    fn from(config: &BrowserConfig) -> Self {
        Self {
            head: config.address_head,
            tail: config.address_tail,
        }
    }
}

impl Default for AddressFormat {
    fn default() -> Self {
        AddressFormat::from(&BrowserConfig::default())
    }
}

/// Row layout for savings circles:
///
/// `› #12  Market women   Active  7/10  50 STX / round  pool 350 STX  12h old`
#[derive(Debug, Clone, Default)]
pub struct CircleRow {
    /// Row styles.
    pub styles: RowStyles,
    block_height: Option<u64>,
    address: AddressFormat,
}

impl CircleRow {
    /// Creates a delegate with default styles and no known block height.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses the address lengths from `config` (builder pattern).
    pub fn with_config(mut self, config: &BrowserConfig) -> Self {
        self.address = AddressFormat::from(config);
        self
    }

    /// Sets the current block height used for circle ages (builder pattern).
    pub fn with_block_height(mut self, height: u64) -> Self {
        self.block_height = Some(height);
        self
    }

    /// Takes the block height from a cache, stale or not.
    pub fn with_block_height_from(mut self, cache: &TtlCache<u64>) -> Self {
        self.block_height = cache.stale();
        self
    }

    /// Updates the block height.
    pub fn set_block_height(&mut self, height: u64) {
        self.block_height = Some(height);
    }

    /// The block height ages are measured against.
    pub fn block_height(&self) -> Option<u64> {
        self.block_height
    }

    fn age(&self, circle: &Circle) -> Option<String> {
        let current = self.block_height?;
        if circle.created_at == 0 || circle.created_at > current {
            return None;
        }
        let blocks = current - circle.created_at;
        let span = format_blocks_remaining(0, blocks);
        Some(match span.as_str() {
            "now" => "new".to_string(),
            s => format!("{} old", s.trim_start_matches('~')),
        })
    }
}

impl RowDelegate<Circle> for CircleRow {
    fn render(&self, circle: &Circle, selected: bool, width: usize) -> String {
        let badge = descriptor::circle_status(circle.status);
        let seats = if circle.max_members > 0 {
            format!("{}/{}", circle.members, circle.max_members)
        } else {
            circle.members.to_string()
        };

        let mut cols = vec![
            self.styles.marker(selected),
            self.styles.detail.render(&fit(&format!("#{}", circle.id), 5)),
            self.styles.title(&fit(&circle.name, 20), selected),
            badge.badge() + &" ".repeat(10usize.saturating_sub(badge.label.len())),
            self.styles.detail.render(&fit(&seats, 6)),
            format!("{} / round", format_stx(circle.contribution)),
        ];
        if width >= COMPACT_WIDTH {
            cols.push(self.styles.detail.render(&format!("pool {}", format_stx(circle.pool_total()))));
            if let Some(age) = self.age(circle) {
                cols.push(self.styles.detail.render(&age));
            }
        }
        cols.join(" ")
    }

    fn address<'a>(&self, circle: &'a Circle) -> Option<&'a str> {
        Some(circle.creator.as_str()).filter(|a| !a.is_empty())
    }

    fn noun(&self) -> (&'static str, &'static str) {
        ("circle", "circles")
    }
}

impl CircleRow {
    /// The creator address as shown in rows.
    pub fn short_address(&self, circle: &Circle) -> String {
        truncate_address(&circle.creator, self.address.head, self.address.tail)
    }
}

/// Row layout for membership NFTs:
///
/// `› #4   Seat #3     circle #9   12.5 STX  SP2J6…9EJ7  minted 2 days ago`
#[derive(Debug, Clone)]
pub struct NftRow {
    /// Row styles.
    pub styles: RowStyles,
    now: u64,
    address: AddressFormat,
}

impl Default for NftRow {
    fn default() -> Self {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_secs());
        Self {
            styles: RowStyles::default(),
            now,
            address: AddressFormat::default(),
        }
    }
}

impl NftRow {
    /// Creates a delegate that measures mint ages against the wall clock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses the address lengths from `config` (builder pattern).
    pub fn with_config(mut self, config: &BrowserConfig) -> Self {
        self.address = AddressFormat::from(config);
        self
    }

    /// Measures mint ages against `now`, in unix seconds (builder pattern).
    pub fn with_now(mut self, now: u64) -> Self {
        self.now = now;
        self
    }
}

impl RowDelegate<NftToken> for NftRow {
    fn render(&self, token: &NftToken, selected: bool, width: usize) -> String {
        let price = match token.price {
            Some(micro) => format_stx(micro),
            None => descriptor::listing_status(token.listing_status()).badge(),
        };
        let price_width = token.price.map_or(0, |m| UnicodeWidthStr::width(format_stx(m).as_str()));
        let price_pad = " ".repeat(14usize.saturating_sub(price_width.max(8)));

        let mut cols = vec![
            self.styles.marker(selected),
            self.styles.detail.render(&fit(&format!("#{}", token.token_id), 5)),
            self.styles.title(&fit(&token.name, 16), selected),
            self.styles.detail.render(&fit(&format!("circle #{}", token.circle_id), 11)),
            price + &price_pad,
        ];
        if width >= COMPACT_WIDTH {
            if !token.owner.is_empty() {
                cols.push(truncate_address(&token.owner, self.address.head, self.address.tail));
            }
            if token.minted_at > 0 {
                cols.push(self.styles.detail.render(&format!(
                    "minted {}",
                    format_relative_time(token.minted_at, self.now)
                )));
            }
        }
        cols.join(" ")
    }

    fn address<'a>(&self, token: &'a NftToken) -> Option<&'a str> {
        Some(token.owner.as_str()).filter(|a| !a.is_empty())
    }

    fn noun(&self) -> (&'static str, &'static str) {
        ("token", "tokens")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circle::CircleStatus;
    use lipgloss_extras::lipgloss::strip_ansi;

    #[test]
    fn test_fit_pads_and_cuts() {
        assert_eq!(fit("abc", 5), "abc  ");
        assert_eq!(fit("abcdef", 4), "abc…");
        assert_eq!(fit("", 2), "  ");
        assert_eq!(fit("abc", 0), "");
    }

    #[test]
    fn test_fit_counts_wide_characters() {
        let out = fit("日本語", 5);
        assert_eq!(UnicodeWidthStr::width(out.as_str()), 5);
        assert!(out.starts_with('日'));
    }

    #[test]
    fn test_circle_row_columns() {
        let circle = Circle::new(12, "Market women")
            .with_status(CircleStatus::Active)
            .with_members(7)
            .with_max_members(10)
            .with_contribution(50_000_000);
        let row = strip_ansi(&CircleRow::new().render(&circle, true, 100));
        assert!(row.starts_with("› #12"), "{row}");
        assert!(row.contains("Market women"));
        assert!(row.contains("Active"));
        assert!(row.contains("7/10"));
        assert!(row.contains("50 STX / round"));
        assert!(row.contains("pool 350 STX"), "{row}");
    }

    #[test]
    fn test_circle_row_compact_drops_pool() {
        let circle = Circle::new(1, "Tiny").with_members(2).with_contribution(1_000_000);
        let row = strip_ansi(&CircleRow::new().render(&circle, false, 40));
        assert!(row.starts_with("  #1"));
        assert!(!row.contains("pool"));
    }

    #[test]
    fn test_circle_age_from_block_height() {
        let mut circle = Circle::new(1, "Aged");
        circle.created_at = 1_000;
        let delegate = CircleRow::new().with_block_height(1_018);
        let row = strip_ansi(&delegate.render(&circle, false, 100));
        assert!(row.contains("3 hours old"), "{row}");

        let cache = TtlCache::new(std::time::Duration::from_secs(30));
        assert_eq!(CircleRow::new().with_block_height_from(&cache).block_height(), None);
        crate::cache::ValueCache::set(&cache, 1_000);
        let same_block = CircleRow::new().with_block_height_from(&cache);
        assert!(strip_ansi(&same_block.render(&circle, false, 100)).contains("new"));
    }

    #[test]
    fn test_nft_row_listed_and_unlisted() {
        let delegate = NftRow::new().with_now(200_000);
        let listed = NftToken::new(4, "Seat #3", 9)
            .with_price(12_500_000)
            .with_owner("SP2J6ZY48GV1EZ5V2V5RB9MP66SW86PYKKNRV9EJ7")
            .with_minted_at(200_000 - 2 * 86_400);
        let row = strip_ansi(&delegate.render(&listed, false, 100));
        assert!(row.contains("circle #9"));
        assert!(row.contains("12.5 STX"));
        assert!(row.contains("SP2J6…9EJ7"));
        assert!(row.contains("minted 2 days ago"), "{row}");

        let unlisted = NftToken::new(5, "Seat #4", 9);
        let row = strip_ansi(&delegate.render(&unlisted, false, 100));
        assert!(row.contains("Unlisted"));
        assert!(!row.contains("minted"));
    }

    #[test]
    fn test_addresses() {
        let circle = Circle::new(1, "a").with_creator("SP2J6ZY48GV1EZ5V2V5RB9MP66SW86PYKKNRV9EJ7");
        let delegate = CircleRow::new();
        assert_eq!(
            delegate.address(&circle),
            Some("SP2J6ZY48GV1EZ5V2V5RB9MP66SW86PYKKNRV9EJ7")
        );
        assert_eq!(delegate.short_address(&circle), "SP2J6…9EJ7");
        assert_eq!(NftRow::new().address(&NftToken::new(1, "a", 1)), None);
    }
}
