//! Interactive record browser.
//!
//! [`Browser`] combines the query pipeline, a numbered paginator and a
//! [`RowDelegate`] into one component that a bubbletea-rs application embeds
//! and drives from its own `update`/`view`.
//!
//! ## Keys
//!
//! - `/` edits the search text; `enter` keeps it, `esc` discards it
//! - `s` cycles the sort keys the record type supports
//! - `f` cycles the status filter, starting from "all"
//! - `m` toggles "mine only"
//! - `←/→` (or `h/l`, `home`, `end`) change page
//! - `↑/↓` (or `k/j`) move the cursor, turning pages at the edges
//! - `enter` emits [`SelectedMsg`] for the highlighted row
//! - `c` copies the highlighted row's address (needs `clipboard-support`)
//!
//! Every query change goes back to page 1. Replacing the data with
//! [`Browser::set_records`] keeps the page when it still exists.
//!
//! ```rust
//! use susu_widgets::browser::{Browser, NftRow};
//! use susu_widgets::config::BrowserConfig;
//! use susu_widgets::nft::NftToken;
//! use susu_widgets::query::SortKey;
//!
//! let tokens = vec![
//!     NftToken::new(1, "Seat #1", 10).with_price(5_000_000),
//!     NftToken::new(2, "Seat #2", 10),
//!     NftToken::new(3, "Seat #1", 11).with_price(2_000_000),
//! ];
//! let config = BrowserConfig::new().with_default_sort(SortKey::PriceLow);
//! let browser = Browser::new("Marketplace", tokens, NftRow::new(), &config);
//!
//! let order: Vec<u64> = browser.visible().iter().map(|t| t.token_id).collect();
//! assert_eq!(order, vec![3, 1, 2]);
//! ```

pub mod delegate;
pub mod keys;
mod model;
mod rendering;
pub mod style;


pub use delegate::{fit, CircleRow, NftRow, RowDelegate, RowStyles};
pub use keys::BrowserKeyMap;
pub use model::Browser;
pub use style::BrowserStyles;

use crate::format::truncate_address;
use crate::query::ListRecord;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use std::time::Duration;
use tracing::{debug, warn};

/// Sent when the user presses `enter` on a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedMsg {
    /// Id of the selected record.
    pub id: u64,
}

/// Sent after an address was written to the clipboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopiedMsg(pub String);

/// Sent when writing to the clipboard failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyErrMsg(pub String);

/// A command that delivers [`SelectedMsg`] for `id`.
pub fn select(id: u64) -> Cmd {
    use bubbletea_rs::tick as bubbletea_tick;
    bubbletea_tick(Duration::from_nanos(1), move |_| {
        Box::new(SelectedMsg { id }) as Msg
    })
}

/// A command that writes `text` to the system clipboard.
///
/// Produces [`CopiedMsg`] on success and [`CopyErrMsg`] otherwise, including
/// when the crate was built without `clipboard-support`.
pub fn copy_to_clipboard(text: String) -> Cmd {
    use bubbletea_rs::tick as bubbletea_tick;
    bubbletea_tick(Duration::from_nanos(1), move |_| {
        #[cfg(feature = "clipboard-support")]
        {
            use clipboard::{ClipboardContext, ClipboardProvider};
            let res: Result<(), String> = (|| {
                let mut ctx: ClipboardContext = ClipboardProvider::new()
                    .map_err(|e| format!("Failed to open clipboard: {}", e))?;
                ctx.set_contents(text.clone())
                    .map_err(|e| format!("Failed to write clipboard: {}", e))
            })();
            match res {
                Ok(()) => Box::new(CopiedMsg(text.clone())) as Msg,
                Err(e) => Box::new(CopyErrMsg(e)) as Msg,
            }
        }
        #[cfg(not(feature = "clipboard-support"))]
        {
            let _ = &text;
            Box::new(CopyErrMsg("Clipboard support not enabled".to_string())) as Msg
        }
    })
}

impl<R: ListRecord, D: RowDelegate<R>> Browser<R, D> {
    /// Handles key presses and clipboard results.
    ///
    /// While the search text is being edited, printable characters and
    /// backspace edit it and every other binding is ignored. Returns a command
    /// for `enter` (select) and `c` (copy).
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(CopiedMsg(address)) = msg.downcast_ref::<CopiedMsg>() {
            self.status_message = Some(format!("Copied {}", truncate_address(address, 5, 4)));
            return None;
        }
        if let Some(CopyErrMsg(err)) = msg.downcast_ref::<CopyErrMsg>() {
            warn!(error = %err, "copy failed");
            self.status_message = Some(err.clone());
            return None;
        }

        let key_msg = msg.downcast_ref::<KeyMsg>()?;
        if self.searching {
            self.handle_search_key(key_msg);
            return None;
        }
        self.handle_key(key_msg)
    }

    fn handle_search_key(&mut self, key_msg: &KeyMsg) {
        if self.keymap.accept_search.matches(key_msg) {
            self.searching = false;
            return;
        }
        if self.keymap.clear_search.matches(key_msg) {
            self.searching = false;
            self.set_search(String::new());
            return;
        }
        match key_msg.key {
            KeyCode::Char(c) if !key_msg.modifiers.contains(KeyModifiers::CONTROL) => {
                let mut search = self.query.search.clone();
                search.push(c);
                self.set_search(search);
            }
            KeyCode::Backspace => {
                let mut search = self.query.search.clone();
                if search.pop().is_some() {
                    self.set_search(search);
                }
            }
            _ => {}
        }
    }

    fn handle_key(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        self.status_message = None;

        if self.keymap.search.matches(key_msg) {
            self.searching = true;
        } else if self.keymap.clear_search.matches(key_msg) {
            if !self.query.search.is_empty() {
                self.set_search(String::new());
            }
        } else if self.keymap.cycle_sort.matches(key_msg) {
            self.cycle_sort();
        } else if self.keymap.cycle_status.matches(key_msg) {
            self.cycle_status();
        } else if self.keymap.toggle_mine.matches(key_msg) {
            self.toggle_mine_only();
        } else if self.keymap.cursor_up.matches(key_msg) {
            self.cursor_up();
        } else if self.keymap.cursor_down.matches(key_msg) {
            self.cursor_down();
        } else if self.keymap.select.matches(key_msg) {
            let id = self.selected()?.id();
            debug!(id, "row selected");
            return Some(select(id));
        } else if self.keymap.copy_address.matches(key_msg) {
            let address = self
                .selected()
                .and_then(|r| self.delegate.address(r))
                .map(str::to_string);
            match address {
                Some(address) => return Some(copy_to_clipboard(address)),
                None => self.status_message = Some("Nothing to copy".to_string()),
            }
        } else {
            let before = self.paginator.page;
            self.paginator.handle_key(key_msg);
            if self.paginator.page != before {
                self.cursor = 0;
            }
        }
        None
    }
}
