//! Pagination for circle and NFT listings.
//!
//! Two layers live here:
//!
//! - [`generate_pages`], a pure function that turns the current page, total page
//!   count and sibling count into the sequence of page markers to draw, with the
//!   first and last page always visible and elided runs collapsed into
//!   [`PageItem::Ellipsis`].
//! - [`Model`], the stateful paginator component. It tracks the current page,
//!   reacts to key presses and renders either the numbered page range, a compact
//!   `3/10` counter or a row of dots.
//!
//! Pages are 1-indexed everywhere in this module.

use crate::key::{self, KeyMap as KeyMapTrait};
use bubbletea_rs::{KeyMsg, Msg};
use crossterm::event::KeyCode;
use lipgloss_extras::prelude::*;
use std::fmt;
use tracing::trace;

/// Sibling count used when none is configured.
pub const DEFAULT_SIBLING_COUNT: usize = 1;

/// One marker in a rendered page range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageItem {
    /// A clickable page number (1-indexed).
    Page(usize),
    /// A collapsed run of pages.
    Ellipsis,
}

impl fmt::Display for PageItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageItem::Page(n) => write!(f, "{n}"),
            PageItem::Ellipsis => f.write_str("…"),
        }
    }
}

/// Returns `false` when pagination controls should not be drawn at all.
pub fn should_render(total_pages: usize) -> bool {
    total_pages > 1
}

/// Computes the page markers to render for the given position.
///
/// The output always starts with page `1` and ends with `total_pages`. When the
/// whole range fits in `sibling_count * 2 + 5` slots every page is listed;
/// otherwise the side(s) far from the current page collapse into an ellipsis.
/// Out-of-range input is clamped: `total_pages < 1` behaves as one page and
/// `current_page` is pulled into `[1, total_pages]`.
///
/// ```rust
/// use susu_widgets::paginator::{generate_pages, PageItem::{Ellipsis, Page}};
///
/// assert_eq!(
///     generate_pages(5, 20, 1),
///     vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(20)]
/// );
/// assert_eq!(generate_pages(1, 3, 1), vec![Page(1), Page(2), Page(3)]);
/// ```
pub fn generate_pages(current_page: usize, total_pages: usize, sibling_count: usize) -> Vec<PageItem> {
    let total = total_pages.max(1);
    let current = current_page.clamp(1, total);
    if current != current_page {
        trace!(current_page, total, "clamped current page");
    }

    let window = sibling_count * 2 + 5;
    if total <= window {
        return (1..=total).map(PageItem::Page).collect();
    }

    let left_sibling = current.saturating_sub(sibling_count).max(1);
    let right_sibling = (current + sibling_count).min(total);
    let collapse_left = left_sibling > 2;
    let collapse_right = right_sibling + 1 < total;
    let edge_count = 3 + 2 * sibling_count;

    let mut pages = Vec::with_capacity(window);
    match (collapse_left, collapse_right) {
        (false, true) => {
            pages.extend((1..=edge_count).map(PageItem::Page));
            pages.push(PageItem::Ellipsis);
            pages.push(PageItem::Page(total));
        }
        (true, false) => {
            pages.push(PageItem::Page(1));
            pages.push(PageItem::Ellipsis);
            pages.extend((total - edge_count + 1..=total).map(PageItem::Page));
        }
        (true, true) => {
            pages.push(PageItem::Page(1));
            pages.push(PageItem::Ellipsis);
            pages.extend((left_sibling..=right_sibling).map(PageItem::Page));
            pages.push(PageItem::Ellipsis);
            pages.push(PageItem::Page(total));
        }
        // Only reachable when the range fits the window, handled above.
        (false, false) => pages.extend((1..=total).map(PageItem::Page)),
    }
    pages
}

/// The type of pagination to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Type {
    /// Page range with ellipses and previous/next arrows (e.g. "‹ 1 … 4 5 6 … 20 ›").
    #[default]
    Numbered,
    /// Display pagination as Arabic numerals (e.g., "1/5").
    Arabic,
    /// Display pagination as dots (e.g., "● ○ ○ ○ ○").
    Dots,
}

/// Key bindings for different actions within the paginator.
#[derive(Debug, Clone)]
pub struct PaginatorKeyMap {
    /// Previous page. Default keys: PageUp, Left Arrow, 'h'
    pub prev_page: key::Binding,
    /// Next page. Default keys: PageDown, Right Arrow, 'l'
    pub next_page: key::Binding,
    /// Jump to page 1. Default key: Home
    pub first_page: key::Binding,
    /// Jump to the last page. Default key: End
    pub last_page: key::Binding,
}

impl Default for PaginatorKeyMap {
    fn default() -> Self {
        Self {
            prev_page: key::Binding::new(vec![KeyCode::PageUp, KeyCode::Left, KeyCode::Char('h')])
                .with_help("←/h", "prev page"),
            next_page: key::Binding::new(vec![
                KeyCode::PageDown,
                KeyCode::Right,
                KeyCode::Char('l'),
            ])
            .with_help("→/l", "next page"),
            first_page: key::Binding::new(vec![KeyCode::Home]).with_help("home", "first page"),
            last_page: key::Binding::new(vec![KeyCode::End]).with_help("end", "last page"),
        }
    }
}

impl KeyMapTrait for PaginatorKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.prev_page, &self.next_page]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![vec![
            &self.prev_page,
            &self.next_page,
            &self.first_page,
            &self.last_page,
        ]]
    }
}

/// Styles for the numbered view.
#[derive(Debug, Clone)]
pub struct PaginatorStyles {
    /// Inactive page numbers.
    pub page: Style,
    /// The current page number.
    pub active_page: Style,
    /// The ellipsis marker.
    pub ellipsis: Style,
    /// Previous/next arrows while navigation is possible.
    pub arrow: Style,
    /// Previous/next arrows at the first/last page.
    pub disabled_arrow: Style,
}

impl Default for PaginatorStyles {
    fn default() -> Self {
        Self {
            page: Style::new().foreground(Color::from("#A49FA5")),
            active_page: Style::new().foreground(Color::from("#EE6FF8")).bold(true),
            ellipsis: Style::new().foreground(Color::from("#777777")),
            arrow: Style::new().foreground(Color::from("#dddddd")),
            disabled_arrow: Style::new().foreground(Color::from("#4D4D4D")).faint(true),
        }
    }
}

/// A paginator model for handling pagination state and rendering.
///
/// # Examples
///
/// ```rust
/// use susu_widgets::paginator::Model;
///
/// let mut paginator = Model::new()
///     .with_per_page(10)
///     .with_total_items(150);
///
/// assert_eq!(paginator.total_pages, 15);
/// assert!(paginator.on_first_page());
///
/// paginator.next_page();
/// assert_eq!(paginator.page, 2);
/// assert_eq!(paginator.get_slice_bounds(150), (10, 20));
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    /// The type of pagination to display.
    pub paginator_type: Type,
    /// The current page, starting at 1.
    pub page: usize,
    /// The number of items per page.
    pub per_page: usize,
    /// The total number of pages, at least 1.
    pub total_pages: usize,
    /// Pages shown on each side of the current page in the numbered view.
    pub sibling_count: usize,

    /// The character to use for the active page in Dots mode.
    pub active_dot: String,
    /// The character to use for inactive pages in Dots mode.
    pub inactive_dot: String,
    /// The format string for Arabic mode (e.g., "%d/%d").
    pub arabic_format: String,

    /// Styles for the numbered view.
    pub styles: PaginatorStyles,
    /// Key bindings.
    pub keymap: PaginatorKeyMap,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            paginator_type: Type::default(),
            page: 1,
            per_page: 1,
            total_pages: 1,
            sibling_count: DEFAULT_SIBLING_COUNT,
            active_dot: "•".to_string(),
            inactive_dot: "○".to_string(),
            arabic_format: "%d/%d".to_string(),
            styles: PaginatorStyles::default(),
            keymap: PaginatorKeyMap::default(),
        }
    }
}

impl Model {
    /// Creates a new paginator model with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the total number of items and recalculates total pages (builder pattern).
    pub fn with_total_items(mut self, items: usize) -> Self {
        self.set_total_items(items);
        self
    }

    /// Sets the number of items per page (builder pattern). Clamped to at least 1.
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page.max(1);
        self
    }

    /// Sets the sibling count used by the numbered view (builder pattern).
    pub fn with_sibling_count(mut self, sibling_count: usize) -> Self {
        self.sibling_count = sibling_count;
        self
    }

    /// Sets the display type (builder pattern).
    pub fn with_type(mut self, paginator_type: Type) -> Self {
        self.paginator_type = paginator_type;
        self
    }

    /// Sets the number of items per page. Clamped to at least 1.
    pub fn set_per_page(&mut self, per_page: usize) {
        self.per_page = per_page.max(1);
    }

    /// Sets the total number of pages directly, clamping the current page.
    pub fn set_total_pages(&mut self, pages: usize) {
        self.total_pages = pages.max(1);
        self.clamp_page();
    }

    /// Calculates total pages from an item count. Zero items still yields one page.
    ///
    /// ```rust
    /// use susu_widgets::paginator::Model;
    ///
    /// let mut paginator = Model::new().with_per_page(10);
    /// paginator.set_total_items(95);
    /// assert_eq!(paginator.total_pages, 10);
    /// paginator.set_total_items(0);
    /// assert_eq!(paginator.total_pages, 1);
    /// ```
    pub fn set_total_items(&mut self, items: usize) {
        self.total_pages = items.div_ceil(self.per_page).max(1);
        self.clamp_page();
    }

    fn clamp_page(&mut self) {
        let clamped = self.page.clamp(1, self.total_pages);
        if clamped != self.page {
            trace!(page = self.page, total_pages = self.total_pages, "clamped page");
            self.page = clamped;
        }
    }

    /// Moves to `page`, clamped into `[1, total_pages]`.
    pub fn go_to(&mut self, page: usize) {
        self.page = page;
        self.clamp_page();
    }

    /// Returns the number of items on the current page.
    pub fn items_on_page(&self, total_items: usize) -> usize {
        let (start, end) = self.get_slice_bounds(total_items);
        end - start
    }

    /// Returns `(start, end)` slice bounds of the current page for data of
    /// length `length`. Bounds never exceed `length`.
    pub fn get_slice_bounds(&self, length: usize) -> (usize, usize) {
        let start = ((self.page - 1) * self.per_page).min(length);
        let end = (start + self.per_page).min(length);
        (start, end)
    }

    /// Navigates to the previous page. No effect on page 1.
    pub fn prev_page(&mut self) {
        if !self.on_first_page() {
            self.page -= 1;
        }
    }

    /// Navigates to the next page. No effect on the last page.
    pub fn next_page(&mut self) {
        if !self.on_last_page() {
            self.page += 1;
        }
    }

    /// Returns true if the paginator is on the first page.
    pub fn on_first_page(&self) -> bool {
        self.page <= 1
    }

    /// Returns true if the paginator is on the last page.
    pub fn on_last_page(&self) -> bool {
        self.page >= self.total_pages
    }

    /// Page markers for the current position.
    pub fn pages(&self) -> Vec<PageItem> {
        generate_pages(self.page, self.total_pages, self.sibling_count)
    }

    /// Handles navigation key presses. Returns true when the page changed.
    pub fn update(&mut self, msg: &Msg) -> bool {
        let before = self.page;
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            self.handle_key(key_msg);
        }
        before != self.page
    }

    pub(crate) fn handle_key(&mut self, key_msg: &KeyMsg) {
        if self.keymap.next_page.matches(key_msg) {
            self.next_page();
        } else if self.keymap.prev_page.matches(key_msg) {
            self.prev_page();
        } else if self.keymap.first_page.matches(key_msg) {
            self.go_to(1);
        } else if self.keymap.last_page.matches(key_msg) {
            self.go_to(self.total_pages);
        }
    }

    /// Renders the paginator as a string.
    pub fn view(&self) -> String {
        match self.paginator_type {
            Type::Numbered => self.numbered_view(),
            Type::Arabic => self.arabic_view(),
            Type::Dots => self.dots_view(),
        }
    }

    fn numbered_view(&self) -> String {
        let arrow = |enabled: bool, glyph: &str| {
            if enabled {
                self.styles.arrow.render(glyph)
            } else {
                self.styles.disabled_arrow.render(glyph)
            }
        };

        let mut parts = Vec::new();
        parts.push(arrow(!self.on_first_page(), "‹"));
        for item in self.pages() {
            let text = item.to_string();
            parts.push(match item {
                PageItem::Page(n) if n == self.page => self.styles.active_page.render(&text),
                PageItem::Page(_) => self.styles.page.render(&text),
                PageItem::Ellipsis => self.styles.ellipsis.render(&text),
            });
        }
        parts.push(arrow(!self.on_last_page(), "›"));
        parts.join(" ")
    }

    fn arabic_view(&self) -> String {
        self.arabic_format
            .replacen("%d", &self.page.to_string(), 1)
            .replacen("%d", &self.total_pages.to_string(), 1)
    }

    fn dots_view(&self) -> String {
        (1..=self.total_pages)
            .map(|i| {
                if i == self.page {
                    self.active_dot.as_str()
                } else {
                    self.inactive_dot.as_str()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::PageItem::{Ellipsis, Page};
    use super::*;
    use crossterm::event::KeyModifiers;
    use proptest::prelude::*;

    fn pages(list: &[usize]) -> Vec<PageItem> {
        list.iter().copied().map(Page).collect()
    }

    fn key(code: KeyCode) -> Msg {
        Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn plain(s: &str) -> String {
        lipgloss_extras::lipgloss::strip_ansi(s)
    }

    #[test]
    fn test_middle_page_collapses_both_sides() {
        assert_eq!(
            generate_pages(5, 20, 1),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(20)]
        );
    }

    #[test]
    fn test_small_range_lists_every_page() {
        assert_eq!(generate_pages(1, 3, 1), pages(&[1, 2, 3]));
        assert_eq!(generate_pages(4, 7, 1), pages(&[1, 2, 3, 4, 5, 6, 7]));
    }

    #[test]
    fn test_single_page() {
        assert_eq!(generate_pages(1, 1, 1), pages(&[1]));
        assert!(!should_render(1));
        assert!(!should_render(0));
        assert!(should_render(2));
    }

    #[test]
    fn test_last_page_collapses_left_only() {
        // Deliberately the last 3 + 2*siblings pages, mirroring the
        // right-collapsed case, rather than only [1, …, 18, 19, 20].
        let mut expected = vec![Page(1), Ellipsis];
        expected.extend(pages(&[14, 15, 16, 17, 18, 19, 20]));
        assert_eq!(generate_pages(20, 20, 2), expected);

        let mut mirror = pages(&[1, 2, 3, 4, 5, 6, 7]);
        mirror.extend([Ellipsis, Page(20)]);
        assert_eq!(generate_pages(1, 20, 2), mirror);
        assert_eq!(generate_pages(20, 20, 2).len(), generate_pages(1, 20, 2).len());
    }

    #[test]
    fn test_first_page_collapses_right_only() {
        assert_eq!(
            generate_pages(1, 20, 1),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(20)]
        );
    }

    #[test]
    fn test_zero_siblings() {
        assert_eq!(
            generate_pages(10, 20, 0),
            vec![Page(1), Ellipsis, Page(10), Ellipsis, Page(20)]
        );
        assert_eq!(
            generate_pages(1, 20, 0),
            vec![Page(1), Page(2), Page(3), Ellipsis, Page(20)]
        );
    }

    #[test]
    fn test_switch_boundary() {
        // left sibling 3 is the first position that collapses the left side
        assert_eq!(
            generate_pages(4, 20, 1),
            vec![Page(1), Ellipsis, Page(3), Page(4), Page(5), Ellipsis, Page(20)]
        );
        assert_eq!(
            generate_pages(3, 20, 1),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(20)]
        );
        assert_eq!(
            generate_pages(17, 20, 1),
            vec![Page(1), Ellipsis, Page(16), Page(17), Page(18), Ellipsis, Page(20)]
        );
        assert_eq!(
            generate_pages(18, 20, 1),
            vec![Page(1), Ellipsis, Page(16), Page(17), Page(18), Page(19), Page(20)]
        );
    }

    #[test]
    fn test_clamps_out_of_range_input() {
        assert_eq!(generate_pages(0, 20, 1), generate_pages(1, 20, 1));
        assert_eq!(generate_pages(99, 20, 1), generate_pages(20, 20, 1));
        assert_eq!(generate_pages(3, 0, 1), pages(&[1]));
    }

    #[test]
    fn test_large_total_keeps_fixed_width() {
        let items = generate_pages(500_000, 1_000_000, 1);
        assert_eq!(items.len(), 7);
        assert_eq!(items[3], Page(500_000));
    }

    proptest! {
        #[test]
        fn prop_small_totals_have_no_ellipsis(siblings in 0usize..5, extra in 0usize..9, current in 0usize..20) {
            let total = (siblings * 2 + 5).min(extra + 1);
            let out = generate_pages(current, total, siblings);
            prop_assert_eq!(out, (1..=total).map(Page).collect::<Vec<_>>());
        }

        #[test]
        fn prop_bounds_and_no_double_ellipsis(current in 0usize..300, total in 0usize..300, siblings in 0usize..6) {
            let out = generate_pages(current, total, siblings);
            prop_assert_eq!(out.first(), Some(&Page(1)));
            prop_assert_eq!(out.last(), Some(&Page(total.max(1))));
            prop_assert!(out.windows(2).all(|w| !(w[0] == Ellipsis && w[1] == Ellipsis)));

            let numbers: Vec<usize> = out.iter().filter_map(|p| match p {
                Page(n) => Some(*n),
                Ellipsis => None,
            }).collect();
            prop_assert!(numbers.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(numbers.contains(&current.clamp(1, total.max(1))));
        }
    }

    #[test]
    fn test_model_defaults() {
        let paginator = Model::default();
        assert_eq!(paginator.paginator_type, Type::Numbered);
        assert_eq!(paginator.page, 1);
        assert_eq!(paginator.per_page, 1);
        assert_eq!(paginator.total_pages, 1);
        assert_eq!(paginator.sibling_count, DEFAULT_SIBLING_COUNT);
    }

    #[test]
    fn test_set_total_items_clamps_page() {
        let mut paginator = Model::new().with_per_page(10).with_total_items(100);
        paginator.go_to(9);
        paginator.set_total_items(25);
        assert_eq!(paginator.total_pages, 3);
        assert_eq!(paginator.page, 3);
    }

    #[test]
    fn test_navigation_disabled_at_bounds() {
        let mut paginator = Model::new().with_per_page(10).with_total_items(30);
        paginator.prev_page();
        assert_eq!(paginator.page, 1);
        paginator.go_to(3);
        paginator.next_page();
        assert_eq!(paginator.page, 3);
        assert!(paginator.on_last_page());
    }

    #[test]
    fn test_slice_bounds_partial_last_page() {
        let mut paginator = Model::new().with_per_page(10).with_total_items(95);
        paginator.go_to(10);
        assert_eq!(paginator.get_slice_bounds(95), (90, 95));
        assert_eq!(paginator.items_on_page(95), 5);
        assert_eq!(paginator.items_on_page(0), 0);
    }

    #[test]
    fn test_update_handles_keys() {
        let mut paginator = Model::new().with_per_page(5).with_total_items(50);
        assert!(paginator.update(&key(KeyCode::Right)));
        assert_eq!(paginator.page, 2);
        assert!(paginator.update(&key(KeyCode::End)));
        assert_eq!(paginator.page, 10);
        assert!(!paginator.update(&key(KeyCode::Char('l'))));
        assert!(paginator.update(&key(KeyCode::Home)));
        assert_eq!(paginator.page, 1);
        assert!(!paginator.update(&key(KeyCode::Char('x'))));
    }

    #[test]
    fn test_views() {
        let mut paginator = Model::new().with_per_page(10).with_total_items(200);
        paginator.go_to(5);
        assert_eq!(plain(&paginator.view()), "‹ 1 … 4 5 6 … 20 ›");

        paginator.paginator_type = Type::Arabic;
        assert_eq!(paginator.view(), "5/20");

        let mut dots = Model::new()
            .with_per_page(10)
            .with_total_items(30)
            .with_type(Type::Dots);
        dots.go_to(2);
        assert_eq!(dots.view(), "○ • ○");
    }
}
