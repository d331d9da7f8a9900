//! Presentation of the search state.
//!
//! A [`view::View`] resolves a [`SearchState`](crate::events::SearchState)
//! against the searcher and lays it out as screen lines. A [`Presenter`]
//! puts those lines on a device; [`terminal::TerminalPresenter`] does it
//! with crossterm. [`display::Display`] redraws on every notification and
//! on its own tick until the user confirms or cancels.

pub mod display;
pub mod table;
pub mod terminal;
pub mod view;

use crate::error::Result;
use crate::screen::view::ScreenLine;

pub use display::{Display, Outcome};
pub use terminal::TerminalPresenter;
pub use view::View;

/// A device frames are drawn on.
pub trait Presenter {
    /// Current size as `(width, height)` in cells.
    fn size(&self) -> Result<(usize, usize)>;

    /// Replace the screen content with `lines`, top row first.
    fn draw(&mut self, lines: &[ScreenLine]) -> Result<()>;
}
