//! Styles for the browser chrome. Row styling belongs to the delegates.

use lipgloss_extras::prelude::*;

/// Colors and emphasis for everything the browser draws around the rows.
#[derive(Debug, Clone)]
pub struct BrowserStyles {
    /// Title line.
    pub title: Style,
    /// Query summary under the title.
    pub summary: Style,
    /// Search prompt while editing.
    pub search_prompt: Style,
    /// Text shown when no record matches.
    pub empty: Style,
    /// Transient status message (copy results and the like).
    pub status_message: Style,
    /// Help line.
    pub help: Style,
}

impl Default for BrowserStyles {
    fn default() -> Self {
        Self {
            title: Style::new()
                .foreground(Color::from("#FFFDF5"))
                .background(Color::from("#25A065"))
                .padding(0, 1, 0, 1),
            summary: Style::new().foreground(Color::from("#A49FA5")),
            search_prompt: Style::new().foreground(Color::from("#ECFD65")),
            empty: Style::new().foreground(Color::from("#626262")).faint(true),
            status_message: Style::new().foreground(Color::from("#04B575")),
            help: Style::new().foreground(Color::from("#626262")),
        }
    }
}
