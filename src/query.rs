//! Search, status filter, "mine only" filter and sort over in-memory records.
//!
//! [`apply`] derives the displayed list from a full record set. The steps run in
//! a fixed order:
//!
//! 1. case-insensitive substring search over every searchable field,
//! 2. status equality, skipped for [`StatusFilter::All`],
//! 3. the "mine only" flag,
//! 4. a stable sort by a single [`SortKey`] in that key's fixed direction.
//!
//! The input slice is never modified; a fresh `Vec` is returned on every call.
//! Records that lack a value for the chosen sort key always end up after the
//! records that have one, whichever direction the key sorts in.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// Sort direction of a [`SortKey`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

/// The recognized sort orders. Each key compares exactly one field in a fixed
/// direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Identifier or mint time, descending.
    #[default]
    Newest,
    /// Identifier or mint time, ascending.
    Oldest,
    /// Member count, descending.
    Members,
    /// Contribution amount, descending.
    Contribution,
    /// Pooled total, descending.
    #[serde(alias = "payout")]
    Pool,
    /// Listing price, ascending.
    PriceLow,
    /// Listing price, descending.
    PriceHigh,
    /// Associated circle identifier, ascending.
    Circle,
}

impl SortKey {
    /// Every key, in declaration order.
    pub const ALL: [SortKey; 8] = [
        SortKey::Newest,
        SortKey::Oldest,
        SortKey::Members,
        SortKey::Contribution,
        SortKey::Pool,
        SortKey::PriceLow,
        SortKey::PriceHigh,
        SortKey::Circle,
    ];

    /// The kebab-case name used in configuration and URLs.
    pub fn name(self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::Members => "members",
            SortKey::Contribution => "contribution",
            SortKey::Pool => "pool",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Circle => "circle",
        }
    }

    /// Label shown in the sort selector.
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Newest => "Newest first",
            SortKey::Oldest => "Oldest first",
            SortKey::Members => "Most members",
            SortKey::Contribution => "Highest contribution",
            SortKey::Pool => "Largest pool",
            SortKey::PriceLow => "Price: low to high",
            SortKey::PriceHigh => "Price: high to low",
            SortKey::Circle => "By circle",
        }
    }

    /// The fixed direction this key sorts in.
    pub fn direction(self) -> Direction {
        match self {
            SortKey::Oldest | SortKey::PriceLow | SortKey::Circle => Direction::Ascending,
            SortKey::Newest
            | SortKey::Members
            | SortKey::Contribution
            | SortKey::Pool
            | SortKey::PriceHigh => Direction::Descending,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        if name == "payout" {
            return Ok(SortKey::Pool);
        }
        SortKey::ALL
            .into_iter()
            .find(|key| key.name() == name)
            .ok_or_else(|| Error::UnknownSortKey(s.to_string()))
    }
}

/// A closed set of record statuses that can be filtered on.
pub trait RecordStatus: Copy + Eq + fmt::Debug + 'static {
    /// Every status, in the order filter options are offered.
    const ALL: &'static [Self];

    /// Lowercase name, e.g. `"active"`.
    fn name(self) -> &'static str;
}

/// Status filter selection: everything, or exactly one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter<S> {
    /// No status filtering.
    All,
    /// Keep records whose status equals this one.
    Only(S),
}

impl<S: RecordStatus> StatusFilter<S> {
    /// `All` followed by every status.
    pub fn options() -> Vec<StatusFilter<S>> {
        std::iter::once(StatusFilter::All)
            .chain(S::ALL.iter().copied().map(StatusFilter::Only))
            .collect()
    }

    /// The option after this one, wrapping back to `All`.
    pub fn cycle(self) -> StatusFilter<S> {
        let options = Self::options();
        let pos = options.iter().position(|o| *o == self).unwrap_or(0);
        options[(pos + 1) % options.len()]
    }

    /// Whether a record with `status` passes this filter.
    pub fn accepts(self, status: S) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => wanted == status,
        }
    }

    /// Lowercase name, `"all"` for [`StatusFilter::All`].
    pub fn name(self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(s) => s.name(),
        }
    }
}

impl<S: RecordStatus> fmt::Display for StatusFilter<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl<S: RecordStatus> FromStr for StatusFilter<S> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        Self::options()
            .into_iter()
            .find(|o| o.name() == name)
            .ok_or_else(|| Error::UnknownStatus(s.to_string()))
    }
}

/// A record that can be searched, filtered and sorted.
pub trait ListRecord: Clone {
    /// The record's status enumeration.
    type Status: RecordStatus;

    /// Sort keys that make sense for this record type, in selector order.
    const SORT_KEYS: &'static [SortKey];

    /// Unique ordinal identifier.
    fn id(&self) -> u64;

    /// Text fields matched by the search box.
    fn search_fields(&self) -> Vec<&str>;

    /// Current status.
    fn status(&self) -> Self::Status;

    /// Whether the record belongs to (or was joined by) the current user.
    fn is_mine(&self) -> bool;

    /// The value compared for `key`, or `None` when the record has none.
    fn sort_value(&self, key: SortKey) -> Option<u64>;
}

/// The user's current search, filter and sort selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery<S> {
    /// Free-text search; empty matches everything.
    pub search: String,
    /// Status filter.
    pub status: StatusFilter<S>,
    /// Sort order.
    pub sort: SortKey,
    /// Keep only the user's own records.
    pub mine_only: bool,
}

impl<S> Default for ListQuery<S> {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: StatusFilter::All,
            sort: SortKey::default(),
            mine_only: false,
        }
    }
}

impl<S> ListQuery<S> {
    /// Creates a query that matches everything, newest first.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search text (builder pattern).
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Sets the status filter (builder pattern).
    pub fn with_status(mut self, status: StatusFilter<S>) -> Self {
        self.status = status;
        self
    }

    /// Sets the sort key (builder pattern).
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Sets the "mine only" flag (builder pattern).
    pub fn with_mine_only(mut self, mine_only: bool) -> Self {
        self.mine_only = mine_only;
        self
    }
}

/// Case-insensitive substring match against any searchable field.
///
/// A blank search matches everything; otherwise surrounding whitespace is part
/// of the substring.
pub fn matches_search<R: ListRecord>(record: &R, search: &str) -> bool {
    if search.trim().is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Orders two optional values so that `None` always comes last.
fn compare_values(a: Option<u64>, b: Option<u64>, direction: Direction) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => match direction {
            Direction::Ascending => x.cmp(&y),
            Direction::Descending => y.cmp(&x),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable in-place sort by `key` with an explicit direction.
pub fn sort_records<R: ListRecord>(records: &mut [R], key: SortKey, direction: Direction) {
    records.sort_by(|a, b| compare_values(a.sort_value(key), b.sort_value(key), direction));
}

/// Runs the search, status, "mine only" and sort steps over `records`.
///
/// ```rust
/// use susu_widgets::circle::Circle;
/// use susu_widgets::query::{apply, ListQuery, SortKey};
///
/// let circles = vec![
///     Circle::new(1, "Alpha").with_members(5),
///     Circle::new(2, "Beta").with_members(10),
/// ];
/// let by_members = apply(&circles, &ListQuery::new().with_sort(SortKey::Members));
/// assert_eq!(by_members[0].name, "Beta");
///
/// let searched = apply(&circles, &ListQuery::new().with_search("alp"));
/// assert_eq!(searched.len(), 1);
/// ```
pub fn apply<R: ListRecord>(records: &[R], query: &ListQuery<R::Status>) -> Vec<R> {
    let mut out: Vec<R> = records
        .iter()
        .filter(|r| matches_search(*r, &query.search))
        .filter(|r| query.status.accepts(r.status()))
        .filter(|r| !query.mine_only || r.is_mine())
        .cloned()
        .collect();
    sort_records(&mut out, query.sort, query.sort.direction());

    trace!(
        total = records.len(),
        matched = out.len(),
        sort = %query.sort,
        status = %query.status.name(),
        mine_only = query.mine_only,
        "applied list query"
    );
    out
}
