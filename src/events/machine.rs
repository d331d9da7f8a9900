//! Transition rules of the interaction state machine.

use log::debug;

use crate::events::event::{InputEvent, Notification};
use crate::events::state::SearchState;
use crate::search::SharedSearcher;

/// Owns the current [`SearchState`] and applies input events to it.
///
/// Every transition is applied completely before the next event is looked
/// at. A character or backspace updates the query and re-applies the
/// selection clamp as one transition, so it yields a single
/// [`Notification::Changed`]. Events that leave the state untouched yield
/// nothing. After confirm or cancel the machine ignores all input.
#[derive(Debug)]
pub struct StateMachine {
    searcher: SharedSearcher,
    state: SearchState,
    terminated: bool,
}

impl StateMachine {
    /// Start with an empty query and the first row selected.
    pub fn new(searcher: SharedSearcher) -> Self {
        Self::with_state(searcher, SearchState::default())
    }

    /// Start from a given state.
    pub fn with_state(searcher: SharedSearcher, state: SearchState) -> Self {
        StateMachine {
            searcher,
            state,
            terminated: false,
        }
    }

    /// The current state.
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Whether confirm or cancel has been handled.
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Apply one input event.
    pub fn handle(&mut self, event: InputEvent) -> Option<Notification> {
        if self.terminated {
            debug!("ignoring {event:?} after termination");
            return None;
        }

        match event {
            InputEvent::Char(c) => {
                let mut query = self.state.query.clone();
                query.push(c);
                self.set_query(query)
            }
            InputEvent::Backspace => {
                if self.state.query.is_empty() {
                    return None;
                }
                let mut query = self.state.query.clone();
                query.pop();
                self.set_query(query)
            }
            InputEvent::MoveUp => {
                let filtered_len = self.state.filtered_count(&self.searcher);
                if self.state.selected + 1 < filtered_len {
                    let next = SearchState::new(self.state.query.clone(), self.state.selected + 1);
                    self.transition(next)
                } else {
                    None
                }
            }
            InputEvent::MoveDown => {
                if self.state.selected > 0 {
                    let next = SearchState::new(self.state.query.clone(), self.state.selected - 1);
                    self.transition(next)
                } else {
                    None
                }
            }
            InputEvent::Resize => Some(Notification::Resize(self.state.clone())),
            InputEvent::Confirm => {
                self.terminated = true;
                Some(Notification::Selected(self.state.clone()))
            }
            InputEvent::Cancel => {
                self.terminated = true;
                Some(Notification::Cancelled(self.state.clone()))
            }
        }
    }

    /// Re-apply the selection clamp against the searcher's current content.
    ///
    /// Called on every tick while ingestion may still be adding documents.
    pub fn refresh(&mut self) -> Option<Notification> {
        if self.terminated {
            return None;
        }
        let filtered_len = self.state.filtered_count(&self.searcher);
        let next = self.state.clone().clamped(filtered_len);
        self.transition(next)
    }

    fn set_query(&mut self, query: String) -> Option<Notification> {
        let next = SearchState::new(query, self.state.selected);
        let filtered_len = next.filtered_count(&self.searcher);
        self.transition(next.clamped(filtered_len))
    }

    fn transition(&mut self, next: SearchState) -> Option<Notification> {
        if next == self.state {
            return None;
        }
        let old = std::mem::replace(&mut self.state, next);
        debug!("state {:?} -> {:?}", old, self.state);
        Some(Notification::Changed {
            old,
            new: self.state.clone(),
        })
    }
}
