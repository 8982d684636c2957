//! Key bindings and help metadata for the interactive components.
//!
//! A [`Binding`] groups the key codes that trigger one action together with the
//! short label shown in the help line. Components expose their bindings through
//! the [`KeyMap`] trait so a host application can render contextual help.
//!
//! ```rust
//! use susu_widgets::key::Binding;
//! use crossterm::event::KeyCode;
//!
//! let next = Binding::new(vec![KeyCode::Right, KeyCode::Char('l')])
//!     .with_help("→/l", "next page");
//! assert_eq!(next.help().key, "→/l");
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::KeyCode;

/// Help text attached to a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Human readable key label, e.g. `"←/h"`.
    pub key: String,
    /// Short description of the action, e.g. `"prev page"`.
    pub desc: String,
}

/// A set of keys bound to a single action.
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<KeyCode>,
    help: Help,
    enabled: bool,
}

impl Binding {
    /// Creates an enabled binding for the given key codes.
    pub fn new(keys: Vec<KeyCode>) -> Self {
        Self {
            keys,
            help: Help::default(),
            enabled: true,
        }
    }

    /// Attaches help text (builder pattern).
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Returns the help text for this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Returns the bound key codes.
    pub fn keys(&self) -> &[KeyCode] {
        &self.keys
    }

    /// Enables or disables the binding. Disabled bindings never match and are
    /// left out of help output.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether the binding is currently enabled.
    pub fn enabled(&self) -> bool {
        self.enabled && !self.keys.is_empty()
    }

    /// Returns true when `msg` was produced by one of this binding's keys.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled() && self.keys.contains(&msg.key)
    }
}

/// Components implement this to publish their bindings for help rendering.
pub trait KeyMap {
    /// Bindings shown in the single-line help view.
    fn short_help(&self) -> Vec<&Binding>;

    /// Bindings grouped into columns for an expanded help view.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

/// Renders bindings as `key desc • key desc`, skipping disabled ones.
pub fn short_help_line(bindings: &[&Binding]) -> String {
    bindings
        .iter()
        .filter(|b| b.enabled())
        .map(|b| format!("{} {}", b.help.key, b.help.desc))
        .collect::<Vec<_>>()
        .join(" • ")
}
