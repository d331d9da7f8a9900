//! Threaded event loop around the state machine.

use std::thread;
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender, select, tick, unbounded};
use log::debug;

use crate::config::FinderConfig;
use crate::error::Result;
use crate::events::event::{InputEvent, Notification};
use crate::events::machine::StateMachine;
use crate::search::SharedSearcher;

/// Runs a [`StateMachine`] on a dedicated thread.
pub struct EventLoop;

impl EventLoop {
    /// Spawn the loop and return its notification stream.
    ///
    /// The loop receives input events in order and, on every tick of the
    /// configured interval, re-applies the selection clamp against the
    /// searcher's current content. Notifications are delivered in the
    /// order they were produced. The stream closes after a terminal
    /// notification, or when the input channel closes.
    pub fn spawn(
        input: Receiver<InputEvent>,
        searcher: SharedSearcher,
        config: &FinderConfig,
    ) -> Result<Receiver<Notification>> {
        let (sender, notifications) = unbounded();
        let machine = StateMachine::new(searcher);
        let interval = config.tick_interval;

        thread::Builder::new()
            .name("pickline-events".to_string())
            .spawn(move || run(machine, input, sender, interval))?;

        Ok(notifications)
    }
}

fn run(
    mut machine: StateMachine,
    input: Receiver<InputEvent>,
    sender: Sender<Notification>,
    interval: Duration,
) {
    let ticker = tick(interval);

    loop {
        let step = select! {
            recv(input) -> event => event.ok().map(|event| machine.handle(event)),
            recv(ticker) -> _ => Some(machine.refresh()),
        };

        let Some(notification) = step else {
            debug!("input channel closed, stopping event loop");
            break;
        };
        let Some(notification) = notification else {
            continue;
        };
        let terminal = notification.is_terminal();
        if sender.send(notification).is_err() {
            debug!("notification receiver dropped, stopping event loop");
            break;
        }
        if terminal {
            break;
        }
    }
}
