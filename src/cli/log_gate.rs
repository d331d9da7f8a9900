//! Holds back log output while the terminal UI is on screen.

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

struct GateState {
    held: bool,
    buffer: Vec<u8>,
    sink: Box<dyn Write + Send>,
}

/// A switch in front of a log sink.
///
/// While held, everything written through a [`GateWriter`] is buffered.
/// Releasing writes the buffer out and lets later writes pass straight
/// through.
#[derive(Clone)]
pub struct LogGate {
    state: Arc<Mutex<GateState>>,
}

impl std::fmt::Debug for LogGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("LogGate")
            .field("held", &state.held)
            .field("buffered", &state.buffer.len())
            .finish()
    }
}

impl LogGate {
    /// A gate in front of `sink`, initially open.
    pub fn new(sink: Box<dyn Write + Send>) -> Self {
        LogGate {
            state: Arc::new(Mutex::new(GateState {
                held: false,
                buffer: Vec::new(),
                sink,
            })),
        }
    }

    /// A gate in front of stderr.
    pub fn stderr() -> Self {
        Self::new(Box::new(io::stderr()))
    }

    /// A writer to hand to the logger.
    pub fn writer(&self) -> GateWriter {
        GateWriter {
            state: Arc::clone(&self.state),
        }
    }

    /// Buffer output until the returned guard is dropped.
    pub fn hold(&self) -> LogHold<'_> {
        self.state.lock().held = true;
        LogHold { gate: self }
    }

    /// Whether output is currently held back.
    pub fn is_held(&self) -> bool {
        self.state.lock().held
    }

    fn release(&self) -> io::Result<()> {
        let mut state = self.state.lock();
        state.held = false;
        let buffered = std::mem::take(&mut state.buffer);
        state.sink.write_all(&buffered)?;
        state.sink.flush()
    }
}

/// Keeps a [`LogGate`] held; releases it on drop.
#[must_use = "output is released as soon as the hold is dropped"]
#[derive(Debug)]
pub struct LogHold<'a> {
    gate: &'a LogGate,
}

impl Drop for LogHold<'_> {
    fn drop(&mut self) {
        if let Err(e) = self.gate.release() {
            eprintln!("failed to write held log output: {e}");
        }
    }
}

/// The write side of a [`LogGate`].
pub struct GateWriter {
    state: Arc<Mutex<GateState>>,
}

impl std::fmt::Debug for GateWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GateWriter").finish()
    }
}

impl Write for GateWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut state = self.state.lock();
        if state.held {
            state.buffer.extend_from_slice(buf);
            Ok(buf.len())
        } else {
            state.sink.write(buf)
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut state = self.state.lock();
        if state.held {
            Ok(())
        } else {
            state.sink.flush()
        }
    }
}
