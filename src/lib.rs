#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/susu-widgets/")]

//! # susu-widgets
//!
//! Terminal UI building blocks for exploring rotating savings circles
//! ("susu") and their membership NFTs on the Stacks blockchain, built on
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! ## Overview
//!
//! The crate splits into pure logic and one interactive component:
//!
//! - [`paginator`]: page-number windows with ellipses, and a paginator model
//! - [`query`]: search, status filter, "mine only" filter and sort pipeline
//! - [`circle`] and [`nft`]: the two record types and their statuses
//! - [`format`]: STX amounts, addresses, relative times and block estimates
//! - [`descriptor`]: icons, colors and labels for statuses, activity and
//!   reputation tiers
//! - [`cache`]: a TTL cache for the current block height
//! - [`browser`]: a paginated, filterable list that ties the rest together
//!
//! Pipelines and pagination never fail: out-of-range input is clamped and an
//! empty record set gives an empty view. Only parsing, configuration and cache
//! refreshes return [`Error`].
//!
//! ## Pagination
//!
//! ```rust
//! use susu_widgets::paginator::{generate_pages, PageItem::{Ellipsis, Page}};
//!
//! assert_eq!(
//!     generate_pages(5, 20, 1),
//!     vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(20)]
//! );
//! ```
//!
//! ## Browsing
//!
//! ```rust
//! use susu_widgets::prelude::*;
//!
//! let circles = vec![
//!     Circle::new(1, "Alpha").with_members(5).with_status(CircleStatus::Active),
//!     Circle::new(2, "Beta").with_members(10),
//! ];
//! let mut browser = Browser::new("Circles", circles, CircleRow::new(), &BrowserConfig::new());
//! browser.set_sort(SortKey::Members);
//! assert_eq!(browser.selected().map(|c| c.name.as_str()), Some("Beta"));
//!
//! browser.set_status_filter(StatusFilter::Only(CircleStatus::Active));
//! assert_eq!(browser.visible().len(), 1);
//! ```
//!
//! ## Logging
//!
//! The crate emits `tracing` events (query changes, page clamping, cache
//! refreshes, config validation) and never installs a subscriber.
//!
//! ## Feature flags
//!
//! - `clipboard-support` (default): copy the highlighted row's address with `c`

pub mod browser;
pub mod cache;
pub mod circle;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod format;
pub mod key;
pub mod nft;
pub mod paginator;
pub mod query;

pub use browser::{Browser, CircleRow, NftRow, RowDelegate, SelectedMsg};
pub use cache::{block_height_cache, TtlCache, ValueCache};
pub use circle::{Circle, CircleStatus};
pub use config::{BrowserConfig, Network};
pub use error::{Error, Result};
pub use key::{Binding, KeyMap};
pub use nft::{ListingStatus, NftToken};
pub use paginator::Model as Paginator;
pub use paginator::{generate_pages, should_render, PageItem};
pub use query::{apply, ListQuery, ListRecord, SortKey, StatusFilter};

/// Commonly used types, for glob import.
///
/// ```rust
/// use susu_widgets::prelude::*;
///
/// let query: ListQuery<CircleStatus> = ListQuery::new().with_search("market");
/// assert_eq!(query.sort, SortKey::Newest);
/// ```
pub mod prelude {
    pub use crate::browser::{Browser, CircleRow, NftRow, RowDelegate, SelectedMsg};
    pub use crate::cache::{block_height_cache, TtlCache, ValueCache};
    pub use crate::circle::{Circle, CircleStatus};
    pub use crate::config::{BrowserConfig, Network};
    pub use crate::descriptor::{ActivityKind, Descriptor, ReputationTier};
    pub use crate::error::Error;
    pub use crate::format::{format_stx, stx_to_micro, truncate_address};
    pub use crate::key::{Binding, KeyMap};
    pub use crate::nft::{ListingStatus, NftToken};
    pub use crate::paginator::{generate_pages, should_render, PageItem};
    pub use crate::query::{apply, ListQuery, ListRecord, SortKey, StatusFilter};
}
