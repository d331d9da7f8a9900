//! Input events and state-change notifications.

use serde::{Deserialize, Serialize};

use crate::events::state::SearchState;

/// A discrete event from the input device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// A printable character typed into the query.
    Char(char),
    /// Delete the last query character.
    Backspace,
    /// Move the highlight one row up (towards higher indices).
    MoveUp,
    /// Move the highlight one row down (towards index 0).
    MoveDown,
    /// The terminal was resized.
    Resize,
    /// Accept the highlighted entry.
    Confirm,
    /// Abandon the search.
    Cancel,
}

/// The kind of a [`Notification`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    Resize,
    Changed,
    Selected,
    Cancelled,
}

/// Published by the state machine for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notification {
    /// The screen must be redrawn at a new size; the state is unchanged.
    Resize(SearchState),
    /// The state changed from `old` to `new`.
    Changed { old: SearchState, new: SearchState },
    /// The user confirmed; final.
    Selected(SearchState),
    /// The user cancelled; final.
    Cancelled(SearchState),
}

impl Notification {
    /// The kind of this notification.
    pub fn kind(&self) -> NotificationKind {
        match self {
            Notification::Resize(_) => NotificationKind::Resize,
            Notification::Changed { .. } => NotificationKind::Changed,
            Notification::Selected(_) => NotificationKind::Selected,
            Notification::Cancelled(_) => NotificationKind::Cancelled,
        }
    }

    /// The state after the notified transition.
    pub fn state(&self) -> &SearchState {
        match self {
            Notification::Resize(state)
            | Notification::Selected(state)
            | Notification::Cancelled(state) => state,
            Notification::Changed { new, .. } => new,
        }
    }

    /// Whether no notification can follow this one.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Notification::Selected(_) | Notification::Cancelled(_))
    }
}
