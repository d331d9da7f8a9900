//! The presentation loop.

use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::{Receiver, select, tick};
use log::debug;

use crate::config::FinderConfig;
use crate::document::Document;
use crate::error::{PicklineError, Result};
use crate::events::{Notification, SearchState};
use crate::screen::Presenter;
use crate::screen::view::View;
use crate::search::{SharedSearcher, SortOrder};

/// How a session ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The user confirmed in this state. `entry` is the document that was
    /// highlighted at that moment, if any.
    Selected {
        state: SearchState,
        entry: Option<Arc<Document>>,
    },
    /// The user cancelled.
    Cancelled(SearchState),
}

enum Step {
    Notified(Notification),
    Closed,
    Tick,
}

/// Redraws a presenter from state-change notifications.
pub struct Display<P: Presenter> {
    presenter: P,
    searcher: SharedSearcher,
    headers: Vec<String>,
    sort_order: SortOrder,
    tick_interval: Duration,
}

impl<P: Presenter> std::fmt::Debug for Display<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Display")
            .field("headers", &self.headers)
            .field("sort_order", &self.sort_order)
            .field("tick_interval", &self.tick_interval)
            .finish()
    }
}

impl<P: Presenter> Display<P> {
    pub fn new(
        presenter: P,
        searcher: SharedSearcher,
        headers: Vec<String>,
        config: &FinderConfig,
    ) -> Self {
        Display {
            presenter,
            searcher,
            headers,
            sort_order: config.sort_order,
            tick_interval: config.tick_interval,
        }
    }

    /// Draw one frame for `state`.
    pub fn redraw(&mut self, state: &SearchState) -> Result<()> {
        let (width, height) = self.presenter.size()?;
        let view = View::build(state, &self.searcher, self.sort_order, &self.headers);
        self.presenter.draw(&view.render(width, height))
    }

    /// Draw until a terminal notification arrives.
    ///
    /// Every non-terminal notification triggers a redraw of its state. The
    /// last known state is also redrawn on every tick, so documents
    /// ingested in the meantime show up without a key press. On selection
    /// the entry is resolved right away, before later ingestion can change
    /// the ranking. A stream that closes without confirm or cancel is a
    /// channel error.
    pub fn run(&mut self, notifications: &Receiver<Notification>) -> Result<Outcome> {
        let ticker = tick(self.tick_interval);
        let mut state = SearchState::default();
        self.redraw(&state)?;

        loop {
            let step = select! {
                recv(notifications) -> notification => {
                    notification.map_or(Step::Closed, Step::Notified)
                }
                recv(ticker) -> _ => Step::Tick,
            };

            match step {
                Step::Notified(Notification::Selected(final_state)) => {
                    let entry = final_state.entry(&self.searcher, self.sort_order);
                    return Ok(Outcome::Selected {
                        state: final_state,
                        entry,
                    });
                }
                Step::Notified(Notification::Cancelled(final_state)) => {
                    return Ok(Outcome::Cancelled(final_state));
                }
                Step::Notified(notification) => {
                    state = notification.state().clone();
                    self.redraw(&state)?;
                }
                Step::Tick => self.redraw(&state)?,
                Step::Closed => {
                    debug!("notification stream closed in state {state:?}");
                    return Err(PicklineError::channel(
                        "notification stream closed before confirm or cancel",
                    ));
                }
            }
        }
    }

    /// Give the presenter back.
    pub fn into_presenter(self) -> P {
        self.presenter
    }
}
