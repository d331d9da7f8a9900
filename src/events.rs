//! Interaction state machine.
//!
//! Key presses arrive as [`event::InputEvent`]s. A
//! [`machine::StateMachine`] owns the single current
//! [`state::SearchState`] and turns each event into at most one
//! [`event::Notification`]. The [`event_loop::EventLoop`] runs the machine on
//! its own thread, fans in input events and a periodic tick, and publishes
//! notifications on an ordered channel that closes after confirm or cancel.
//!
//! # Examples
//!
//! ```
//! use pickline::document::Document;
//! use pickline::events::{InputEvent, Notification, SearchState, StateMachine};
//! use pickline::search::{SearcherConfig, SearcherFactory};
//!
//! let searcher = SearcherFactory::create_shared(SearcherConfig::default());
//! for line in ["hello", "hello world"] {
//!     searcher.add_document(Document::plain(line)).unwrap();
//! }
//!
//! let mut machine = StateMachine::new(searcher);
//! for c in "hello".chars() {
//!     machine.handle(InputEvent::Char(c));
//! }
//! let notification = machine.handle(InputEvent::MoveUp).unwrap();
//! assert_eq!(notification.state(), &SearchState::new("hello", 1));
//! assert!(matches!(
//!     machine.handle(InputEvent::Confirm),
//!     Some(Notification::Selected(_))
//! ));
//! ```

pub mod event;
pub mod event_loop;
pub mod machine;
pub mod state;

pub use event::{InputEvent, Notification, NotificationKind};
pub use event_loop::EventLoop;
pub use machine::StateMachine;
pub use state::SearchState;
