//! Type-safe key bindings for dropdown components.
//!
//! A [`Binding`] pairs one or more [`KeyCode`]s with help text, and can be
//! matched against incoming [`KeyMsg`] values from the bubbletea-rs runtime.
//! Components expose their bindings through the [`KeyMap`] trait so help
//! views can be generated from the same source of truth that drives input
//! handling.
//!
//! # Examples
//!
//! ```rust
//! use bubbletea_dropdown::key::Binding;
//! use crossterm::event::KeyCode;
//!
//! let select = Binding::new(vec![KeyCode::Enter]).with_help("enter", "select");
//! assert_eq!(select.help().key, "enter");
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::KeyCode;

/// Help text associated with a key binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short key representation, e.g. `"↑/↓"`.
    pub key: String,
    /// Description of what the binding does, e.g. `"navigate"`.
    pub desc: String,
}

/// A keyboard binding: a set of key codes plus help text.
///
/// Multiple key codes may trigger the same binding, which is how
/// conventions like `↑`/`k` map to a single action.
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<KeyCode>,
    help: Help,
}

impl Binding {
    /// Creates a binding that matches any of the given key codes.
    pub fn new(keys: Vec<KeyCode>) -> Self {
        Self {
            keys,
            help: Help::default(),
        }
    }

    /// Sets the help text shown for this binding.
    pub fn with_help(mut self, key: &str, desc: &str) -> Self {
        self.help = Help {
            key: key.to_string(),
            desc: desc.to_string(),
        };
        self
    }

    /// Returns true if the key message matches one of this binding's keys.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.keys.contains(&msg.key)
    }

    /// Returns the help text for this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }
}

/// Trait for components that expose their key bindings for help display.
pub trait KeyMap {
    /// A compact set of the most important bindings.
    fn short_help(&self) -> Vec<&Binding>;

    /// All bindings, grouped into columns of related actions.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: KeyModifiers::empty(),
        }
    }

    #[test]
    fn matches_any_listed_key() {
        let up = Binding::new(vec![KeyCode::Up, KeyCode::Char('k')]);
        assert!(up.matches(&key(KeyCode::Up)));
        assert!(up.matches(&key(KeyCode::Char('k'))));
        assert!(!up.matches(&key(KeyCode::Down)));
    }

    #[test]
    fn help_text_round_trips() {
        let b = Binding::new(vec![KeyCode::Esc]).with_help("esc", "close");
        assert_eq!(b.help().key, "esc");
        assert_eq!(b.help().desc, "close");
    }
}
