//! Browser state and the operations that change it.

use super::delegate::RowDelegate;
use super::keys::BrowserKeyMap;
use super::style::BrowserStyles;
use crate::config::{BrowserConfig, Network};
use crate::paginator;
use crate::query::{apply, ListQuery, ListRecord, SortKey, StatusFilter};
use tracing::debug;

/// Default render width when the host never reports one.
pub(super) const DEFAULT_WIDTH: usize = 80;

/// A searchable, filterable, paginated list of records.
///
/// `records` is the full data set and is never reordered by querying; the
/// rows on screen are a fresh [`apply`] of the current [`ListQuery`], cut into
/// pages by an embedded numbered paginator. The cursor is an index within the
/// current page.
///
/// ```rust
/// use susu_widgets::browser::{Browser, CircleRow};
/// use susu_widgets::circle::Circle;
/// use susu_widgets::config::BrowserConfig;
///
/// let circles = (1..=20).map(|i| Circle::new(i, &format!("Circle {i}"))).collect();
/// let config = BrowserConfig::new().with_per_page(6);
/// let mut browser = Browser::new("Circles", circles, CircleRow::new(), &config);
///
/// assert_eq!(browser.total_pages(), 4);
/// assert_eq!(browser.selected().map(|c| c.id), Some(20));
///
/// browser.set_search("circle 1");
/// assert_eq!(browser.visible().len(), 11);
/// assert_eq!(browser.page(), 1);
/// ```
pub struct Browser<R: ListRecord, D: RowDelegate<R>> {
    pub(super) title: String,
    pub(super) records: Vec<R>,
    pub(super) visible: Vec<R>,
    pub(super) query: ListQuery<R::Status>,
    pub(super) paginator: paginator::Model,
    pub(super) cursor: usize,
    pub(super) searching: bool,
    pub(super) delegate: D,
    pub(super) network: Network,
    pub(super) width: usize,
    pub(super) status_message: Option<String>,
    /// Key bindings for rows and query editing.
    pub keymap: BrowserKeyMap,
    /// Styles for the title, summary, empty state and help.
    pub styles: BrowserStyles,
}

impl<R: ListRecord, D: RowDelegate<R>> Browser<R, D> {
    /// Creates a browser over `records`.
    ///
    /// The initial sort is `config.default_sort` when the record type supports
    /// it, otherwise the record type's first sort key.
    pub fn new(title: &str, records: Vec<R>, delegate: D, config: &BrowserConfig) -> Self {
        let sort = if R::SORT_KEYS.contains(&config.default_sort) {
            config.default_sort
        } else {
            R::SORT_KEYS.first().copied().unwrap_or_default()
        };
        let paginator = paginator::Model::new()
            .with_type(paginator::Type::Numbered)
            .with_per_page(config.per_page)
            .with_sibling_count(config.sibling_count);

        let mut browser = Self {
            title: title.to_string(),
            records,
            visible: Vec::new(),
            query: ListQuery::new().with_sort(sort),
            paginator,
            cursor: 0,
            searching: false,
            delegate,
            network: config.network,
            width: DEFAULT_WIDTH,
            status_message: None,
            keymap: BrowserKeyMap::default(),
            styles: BrowserStyles::default(),
        };
        browser.recompute();
        browser
    }

    /// Sets the render width (builder pattern).
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Replaces the query (builder pattern).
    pub fn with_query(mut self, query: ListQuery<R::Status>) -> Self {
        self.set_query(query);
        self
    }

    /// Sets the render width.
    pub fn set_width(&mut self, width: usize) {
        self.width = width;
    }

    /// The title shown in the header.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The full, unfiltered record set.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Every record that passes the query, in display order.
    pub fn visible(&self) -> &[R] {
        &self.visible
    }

    /// The records on the current page.
    pub fn page_items(&self) -> &[R] {
        let (start, end) = self.paginator.get_slice_bounds(self.visible.len());
        &self.visible[start..end]
    }

    /// The highlighted record, if the page has any.
    pub fn selected(&self) -> Option<&R> {
        self.page_items().get(self.cursor)
    }

    /// The current query.
    pub fn query(&self) -> &ListQuery<R::Status> {
        &self.query
    }

    /// The embedded paginator.
    pub fn paginator(&self) -> &paginator::Model {
        &self.paginator
    }

    /// Current page, starting at 1.
    pub fn page(&self) -> usize {
        self.paginator.page
    }

    /// Number of pages, at least 1.
    pub fn total_pages(&self) -> usize {
        self.paginator.total_pages
    }

    /// Cursor index within the current page.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether keystrokes currently edit the search text.
    pub fn is_searching(&self) -> bool {
        self.searching
    }

    /// Network the records come from.
    pub fn network(&self) -> Network {
        self.network
    }

    /// Explorer page for the highlighted row's address.
    ///
    /// Addresses are linked on the network their prefix names; addresses
    /// without a known prefix use the browser's network.
    pub fn selected_address_url(&self) -> Option<String> {
        let record = self.selected()?;
        let address = self.delegate.address(record)?;
        let network = Network::from_address(address).unwrap_or(self.network);
        Some(network.address_url(address))
    }

    /// The row delegate.
    pub fn delegate(&self) -> &D {
        &self.delegate
    }

    /// Mutable access to the row delegate, e.g. to update its block height.
    pub fn delegate_mut(&mut self) -> &mut D {
        &mut self.delegate
    }

    /// Last copy result or similar notice.
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Replaces the data set, keeping the query and the current page.
    ///
    /// The page is clamped when the new data set has fewer pages.
    pub fn set_records(&mut self, records: Vec<R>) {
        self.records = records;
        self.recompute();
    }

    /// Replaces the whole query and returns to page 1.
    pub fn set_query(&mut self, query: ListQuery<R::Status>) {
        self.query = query;
        self.requery();
    }

    /// Sets the search text and returns to page 1.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
        self.requery();
    }

    /// Sets the status filter and returns to page 1.
    pub fn set_status_filter(&mut self, status: StatusFilter<R::Status>) {
        self.query.status = status;
        self.requery();
    }

    /// Sets the sort key and returns to page 1.
    pub fn set_sort(&mut self, sort: SortKey) {
        self.query.sort = sort;
        self.requery();
    }

    /// Sets the "mine only" flag and returns to page 1.
    pub fn set_mine_only(&mut self, mine_only: bool) {
        self.query.mine_only = mine_only;
        self.requery();
    }

    /// Switches to the record type's next sort key, wrapping around.
    pub fn cycle_sort(&mut self) {
        let keys = R::SORT_KEYS;
        if keys.is_empty() {
            return;
        }
        let next = keys
            .iter()
            .position(|k| *k == self.query.sort)
            .map_or(0, |i| (i + 1) % keys.len());
        self.set_sort(keys[next]);
    }

    /// Switches to the next status filter, wrapping back to all.
    pub fn cycle_status(&mut self) {
        self.set_status_filter(self.query.status.cycle());
    }

    /// Flips the "mine only" flag.
    pub fn toggle_mine_only(&mut self) {
        self.set_mine_only(!self.query.mine_only);
    }

    /// Jumps to `page`, clamped into range, with the cursor on its first row.
    pub fn go_to_page(&mut self, page: usize) {
        self.paginator.go_to(page);
        self.cursor = 0;
    }

    /// Moves the cursor up, onto the previous page's last row at the top.
    pub fn cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        } else if !self.paginator.on_first_page() {
            self.paginator.prev_page();
            self.cursor = self.page_len().saturating_sub(1);
        }
    }

    /// Moves the cursor down, onto the next page's first row at the bottom.
    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.page_len() {
            self.cursor += 1;
        } else if !self.paginator.on_last_page() {
            self.paginator.next_page();
            self.cursor = 0;
        }
    }

    fn page_len(&self) -> usize {
        self.paginator.items_on_page(self.visible.len())
    }

    fn requery(&mut self) {
        self.recompute();
        self.paginator.go_to(1);
        self.cursor = 0;
        debug!(
            search = %self.query.search,
            status = %self.query.status,
            sort = %self.query.sort,
            mine_only = self.query.mine_only,
            visible = self.visible.len(),
            "browser query changed"
        );
    }

    fn recompute(&mut self) {
        self.visible = apply(&self.records, &self.query);
        self.paginator.set_total_items(self.visible.len());
        self.cursor = self.cursor.min(self.page_len().saturating_sub(1));
    }
}
