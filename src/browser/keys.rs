//! Key bindings for the browser.
//!
//! Page navigation is owned by the embedded paginator (`←/h`, `→/l`, `home`,
//! `end`); everything else lives here:
//!
//! - **Rows**: `↑/k`, `↓/j`, `enter` to select, `c` to copy the row's address
//! - **Query**: `/` search, `esc` clear search, `s` next sort, `f` next status,
//!   `m` toggle "mine only"

use crate::key::{self, KeyMap};
use crossterm::event::KeyCode;

/// Key bindings for row navigation and query editing.
#[derive(Debug, Clone)]
pub struct BrowserKeyMap {
    /// Move the cursor up one row.
    pub cursor_up: key::Binding,
    /// Move the cursor down one row.
    pub cursor_down: key::Binding,
    /// Select the highlighted row.
    pub select: key::Binding,
    /// Copy the highlighted row's address.
    pub copy_address: key::Binding,
    /// Start editing the search text.
    pub search: key::Binding,
    /// Clear the search text.
    pub clear_search: key::Binding,
    /// Finish editing the search text.
    pub accept_search: key::Binding,
    /// Switch to the next sort order.
    pub cycle_sort: key::Binding,
    /// Switch to the next status filter.
    pub cycle_status: key::Binding,
    /// Toggle the "mine only" filter.
    pub toggle_mine: key::Binding,
}

impl Default for BrowserKeyMap {
    fn default() -> Self {
        Self {
            cursor_up: key::Binding::new(vec![KeyCode::Up, KeyCode::Char('k')])
                .with_help("↑/k", "up"),
            cursor_down: key::Binding::new(vec![KeyCode::Down, KeyCode::Char('j')])
                .with_help("↓/j", "down"),
            select: key::Binding::new(vec![KeyCode::Enter]).with_help("enter", "open"),
            copy_address: key::Binding::new(vec![KeyCode::Char('c')]).with_help("c", "copy address"),
            search: key::Binding::new(vec![KeyCode::Char('/')]).with_help("/", "search"),
            clear_search: key::Binding::new(vec![KeyCode::Esc]).with_help("esc", "clear search"),
            accept_search: key::Binding::new(vec![KeyCode::Enter, KeyCode::Tab])
                .with_help("enter", "apply search"),
            cycle_sort: key::Binding::new(vec![KeyCode::Char('s')]).with_help("s", "sort"),
            cycle_status: key::Binding::new(vec![KeyCode::Char('f')]).with_help("f", "status"),
            toggle_mine: key::Binding::new(vec![KeyCode::Char('m')]).with_help("m", "mine only"),
        }
    }
}

impl KeyMap for BrowserKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![
            &self.search,
            &self.cycle_sort,
            &self.cycle_status,
            &self.toggle_mine,
            &self.select,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![&self.cursor_up, &self.cursor_down, &self.select, &self.copy_address],
            vec![
                &self.search,
                &self.clear_search,
                &self.cycle_sort,
                &self.cycle_status,
                &self.toggle_mine,
            ],
        ]
    }
}
