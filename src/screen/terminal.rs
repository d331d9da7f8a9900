//! Crossterm-backed terminal: drawing and key input.

use std::io::{self, Stderr, Write};
use std::thread;

use crossbeam_channel::Sender;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use crossterm::{execute, queue};
use log::{debug, warn};

use crate::error::{PicklineError, Result};
use crate::events::InputEvent;
use crate::screen::Presenter;
use crate::screen::view::{LineStyle, ScreenLine};

/// Draws frames on the terminal through stderr, leaving stdout free for
/// the selected entry.
///
/// Raw mode and the alternate screen are entered on [`open`](Self::open)
/// and restored on drop.
pub struct TerminalPresenter {
    out: Stderr,
}

impl std::fmt::Debug for TerminalPresenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalPresenter").finish()
    }
}

impl TerminalPresenter {
    /// Take over the terminal.
    pub fn open() -> Result<Self> {
        enable_raw_mode().map_err(|e| PicklineError::terminal(format!("raw mode: {e}")))?;
        let mut out = io::stderr();
        if let Err(e) = execute!(out, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(PicklineError::terminal(format!("alternate screen: {e}")));
        }
        Ok(TerminalPresenter { out })
    }
}

impl Presenter for TerminalPresenter {
    fn size(&self) -> Result<(usize, usize)> {
        let (width, height) =
            terminal::size().map_err(|e| PicklineError::terminal(format!("size: {e}")))?;
        Ok((width as usize, height as usize))
    }

    fn draw(&mut self, lines: &[ScreenLine]) -> Result<()> {
        queue!(self.out, Clear(ClearType::All))?;
        for (row, line) in lines.iter().enumerate() {
            let row = u16::try_from(row).unwrap_or(u16::MAX);
            queue!(self.out, MoveTo(0, row))?;
            match line.style {
                LineStyle::Plain => {}
                LineStyle::Selected => queue!(self.out, SetForegroundColor(Color::Grey))?,
                LineStyle::Bold => queue!(self.out, SetAttribute(Attribute::Bold))?,
            }
            queue!(
                self.out,
                Print(&line.text),
                SetAttribute(Attribute::Reset),
                ResetColor
            )?;
        }
        self.out.flush()?;
        Ok(())
    }
}

impl Drop for TerminalPresenter {
    fn drop(&mut self) {
        if let Err(e) = execute!(self.out, Show, LeaveAlternateScreen) {
            warn!("failed to leave alternate screen: {e}");
        }
        if let Err(e) = disable_raw_mode() {
            warn!("failed to disable raw mode: {e}");
        }
    }
}

/// Map a terminal event to an input event.
///
/// Esc and Ctrl-C cancel, Enter confirms, Up/Ctrl-P and Down/Ctrl-N move
/// the highlight. Key releases and other control chords are ignored.
pub fn map_event(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) => map_key(key),
        Event::Resize(_, _) => Some(InputEvent::Resize),
        _ => None,
    }
}

fn map_key(key: &KeyEvent) -> Option<InputEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let control = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => Some(InputEvent::Cancel),
        KeyCode::Enter => Some(InputEvent::Confirm),
        KeyCode::Backspace => Some(InputEvent::Backspace),
        KeyCode::Up => Some(InputEvent::MoveUp),
        KeyCode::Down => Some(InputEvent::MoveDown),
        KeyCode::Char('c') if control => Some(InputEvent::Cancel),
        KeyCode::Char('p') if control => Some(InputEvent::MoveUp),
        KeyCode::Char('n') if control => Some(InputEvent::MoveDown),
        KeyCode::Char(c) if !control && !key.modifiers.contains(KeyModifiers::ALT) => {
            Some(InputEvent::Char(c))
        }
        _ => None,
    }
}

/// Read terminal events on a background thread and forward them.
///
/// The reader stops after forwarding confirm or cancel, when the receiving
/// side goes away, or when reading fails.
pub fn spawn_input_reader(sender: Sender<InputEvent>) -> Result<()> {
    thread::Builder::new()
        .name("pickline-input".to_string())
        .spawn(move || {
            loop {
                let event = match event::read() {
                    Ok(event) => event,
                    Err(e) => {
                        warn!("failed to read terminal input: {e}");
                        break;
                    }
                };
                let Some(input) = map_event(&event) else {
                    continue;
                };
                let last = matches!(input, InputEvent::Confirm | InputEvent::Cancel);
                if sender.send(input).is_err() || last {
                    break;
                }
            }
            debug!("input reader stopped");
        })?;
    Ok(())
}
