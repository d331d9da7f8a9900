//! Command implementation for the pickline CLI.

use std::io;

use crossbeam_channel::unbounded;
use log::{info, warn};

use crate::cli::args::PicklineArgs;
use crate::cli::log_gate::LogGate;
use crate::cli::output::OutputRenderer;
use crate::config::FinderConfig;
use crate::error::Result;
use crate::events::EventLoop;
use crate::screen::terminal::{TerminalPresenter, spawn_input_reader};
use crate::screen::{Display, Outcome};
use crate::search::{SearcherFactory, SharedSearcher};
use crate::source::{IngestHandle, Ingestor, LineSource};

/// Exit code after an entry was printed.
pub const EXIT_SELECTED: i32 = 0;
/// Exit code when the selection matched no entry.
pub const EXIT_NO_MATCH: i32 = 1;
/// Exit code after the user cancelled.
pub const EXIT_CANCELLED: i32 = 130;

/// Run an interactive session and return the process exit code.
///
/// Log output written through `log_gate` is held back while the terminal
/// UI is on screen.
pub fn execute_command(args: PicklineArgs, log_gate: &LogGate) -> Result<i32> {
    let config = args.to_config();
    let renderer = OutputRenderer::from_config(&config)?;

    let searcher = SearcherFactory::create_shared(config.searcher_config());
    let ingestion = Ingestor::new(searcher.clone(), &config).start(LineSource::detect())?;

    let outcome = run_session(&config, &searcher, &ingestion, log_gate)?;
    finish(outcome, &searcher, &renderer, ingestion)
}

/// Drive the terminal until the user confirms or cancels.
///
/// The terminal is restored, and held log output released, before this
/// returns.
fn run_session(
    config: &FinderConfig,
    searcher: &SharedSearcher,
    ingestion: &IngestHandle,
    log_gate: &LogGate,
) -> Result<Outcome> {
    let _hold = log_gate.hold();
    let presenter = TerminalPresenter::open()?;

    let (input, events) = unbounded();
    spawn_input_reader(input)?;
    let notifications = EventLoop::spawn(events, searcher.clone(), config)?;

    let mut display = Display::new(
        presenter,
        searcher.clone(),
        ingestion.headers().to_vec(),
        config,
    );
    display.run(&notifications)
}

fn finish(
    outcome: Outcome,
    searcher: &SharedSearcher,
    renderer: &OutputRenderer,
    ingestion: IngestHandle,
) -> Result<i32> {
    match ingestion.try_join() {
        Some(Ok(stats)) => info!("ingested {} lines, skipped {}", stats.added, stats.skipped),
        Some(Err(e)) => return Err(e),
        None => info!("ingestion still running, {} lines so far", searcher.count()),
    }

    match outcome {
        Outcome::Cancelled(_) => Ok(EXIT_CANCELLED),
        Outcome::Selected { state, entry } => match entry {
            Some(document) => {
                renderer.write_entry(&mut io::stdout().lock(), &document)?;
                Ok(EXIT_SELECTED)
            }
            None => {
                warn!("nothing to select for query '{}'", state.query);
                Ok(EXIT_NO_MATCH)
            }
        },
    }
}
