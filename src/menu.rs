//! Player action menu.
//!
//! The menu is a plain value rebuilt from the game before every prompt. It
//! carries no rendering; front ends decide how to show enabled and disabled
//! entries.

use alloc::vec::Vec;

use crate::error::ActionError;
use crate::game::{Action, Game};

/// One selectable entry of the action menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    /// Key the player types to pick this entry.
    pub key: &'static str,
    /// Human readable label.
    pub label: &'static str,
    /// Action run when picked.
    pub action: Action,
    /// Whether the entry can be picked right now.
    pub enabled: bool,
}

/// The actions offered to the player for the current turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    entries: Vec<MenuEntry>,
}

impl Menu {
    /// Builds the menu for the current state of `game`.
    ///
    /// Hit and stand are enabled while the round is pending. Double is enabled
    /// only on the first two cards with credit for twice the bet. Split is
    /// always listed and never enabled.
    #[must_use]
    pub fn for_game(game: &Game) -> Self {
        let pending = !game.result().is_terminal();
        let entries = alloc::vec![
            MenuEntry {
                key: "h",
                label: "hit",
                action: Action::Hit,
                enabled: pending,
            },
            MenuEntry {
                key: "s",
                label: "stand",
                action: Action::Stand,
                enabled: pending,
            },
            MenuEntry {
                key: "d",
                label: "double",
                action: Action::Double,
                enabled: game.can_double(),
            },
            MenuEntry {
                key: "p",
                label: "split",
                action: Action::Split,
                enabled: false,
            },
        ];
        Self { entries }
    }

    /// Returns every entry, enabled or not.
    #[must_use]
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Returns the entries that can be picked.
    pub fn enabled(&self) -> impl Iterator<Item = &MenuEntry> {
        self.entries.iter().filter(|entry| entry.enabled)
    }

    /// Maps typed input to an action.
    ///
    /// Input is trimmed and matched case-insensitively against entry keys.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidAction`] if no enabled entry matches.
    pub fn resolve(&self, input: &str) -> Result<Action, ActionError> {
        let input = input.trim();
        self.enabled()
            .find(|entry| entry.key.eq_ignore_ascii_case(input))
            .map(|entry| entry.action)
            .ok_or(ActionError::InvalidAction)
    }
}
