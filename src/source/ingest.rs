//! Background ingestion of raw lines into the shared searcher.

use std::thread::{self, JoinHandle};

use log::{error, info, warn};

use crate::config::{FinderConfig, ParseErrorPolicy};
use crate::document::converter::{LineFormat, LineParser, LineParserFactory, parse_line};
use crate::error::{PicklineError, Result};
use crate::search::SharedSearcher;
use crate::source::{LineIter, LineSource};

/// Outcome of a finished ingestion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    /// Documents added to the searcher.
    pub added: usize,
    /// Lines dropped because they failed to parse.
    pub skipped: usize,
}

/// Reads a line source and adds every parsed line to a searcher.
#[derive(Debug, Clone)]
pub struct Ingestor {
    searcher: SharedSearcher,
    line_format: LineFormat,
    headers: Vec<String>,
    delimiter: char,
    policy: ParseErrorPolicy,
}

impl Ingestor {
    /// Create an ingestor feeding `searcher` with the parsing settings of `config`.
    pub fn new(searcher: SharedSearcher, config: &FinderConfig) -> Self {
        Ingestor {
            searcher,
            line_format: config.line_format,
            headers: config.headers.clone(),
            delimiter: config.delimiter,
            policy: config.parse_error_policy,
        }
    }

    /// Start ingesting on a background thread.
    ///
    /// For record streams the first line is read here, on the calling
    /// thread, because the parser (and with it the display headers) is
    /// derived from it. A tabular header line is not ingested; any other
    /// first line is. Errors building the parser are returned immediately.
    pub fn start(&self, source: LineSource) -> Result<IngestHandle> {
        let (parser, pending, lines) = if source.is_record_stream() {
            let mut lines = source.open()?;
            let first_line = lines.next().transpose()?;
            let parser = self.create_parser(first_line.as_deref().unwrap_or(""))?;
            let pending = first_line.filter(|_| !parser.consumes_first_line());
            (parser, pending, Lines::Opened(lines))
        } else {
            (self.create_parser("")?, None, Lines::Deferred(source))
        };

        let headers = parser.headers().to_vec();
        let searcher = self.searcher.clone();
        let policy = self.policy;

        let handle = thread::Builder::new()
            .name("pickline-ingest".to_string())
            .spawn(move || {
                let result = lines.open().and_then(|lines| {
                    ingest_lines(&searcher, parser.as_ref(), policy, pending, lines)
                });
                match &result {
                    Ok(stats) => info!(
                        "ingestion finished: {} added, {} skipped",
                        stats.added, stats.skipped
                    ),
                    Err(e) => error!("ingestion stopped: {e}"),
                }
                result
            })?;

        Ok(IngestHandle { headers, handle })
    }

    fn create_parser(&self, first_line: &str) -> Result<Box<dyn LineParser>> {
        LineParserFactory::create(self.line_format, first_line, &self.headers, self.delimiter)
    }
}

/// Lines already opened on the calling thread, or a source to open on the
/// ingestion thread.
enum Lines {
    Opened(LineIter),
    Deferred(LineSource),
}

impl Lines {
    fn open(self) -> Result<LineIter> {
        match self {
            Lines::Opened(lines) => Ok(lines),
            Lines::Deferred(source) => source.open(),
        }
    }
}

fn ingest_lines(
    searcher: &SharedSearcher,
    parser: &dyn LineParser,
    policy: ParseErrorPolicy,
    pending: Option<String>,
    lines: LineIter,
) -> Result<IngestStats> {
    let mut stats = IngestStats::default();

    for (line_number, line) in pending.map(Ok).into_iter().chain(lines).enumerate() {
        let line = line?;
        match parse_line(parser, &line) {
            Ok(document) => {
                searcher.add_document(document)?;
                stats.added += 1;
            }
            Err(e) => match policy {
                ParseErrorPolicy::Skip => {
                    warn!("skipping line {}: {e}", line_number + 1);
                    stats.skipped += 1;
                }
                ParseErrorPolicy::Abort => {
                    return Err(PicklineError::parse(format!(
                        "line {}: {e}",
                        line_number + 1
                    )));
                }
            },
        }
    }

    Ok(stats)
}

/// A running ingestion.
#[derive(Debug)]
pub struct IngestHandle {
    headers: Vec<String>,
    handle: JoinHandle<Result<IngestStats>>,
}

impl IngestHandle {
    /// Display headers of the parser in use.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Whether the ingestion thread has exited.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for ingestion to end.
    pub fn join(self) -> Result<IngestStats> {
        self.handle
            .join()
            .map_err(|_| PicklineError::internal("ingestion thread panicked"))?
    }

    /// The outcome if ingestion already ended, without waiting.
    pub fn try_join(self) -> Option<Result<IngestStats>> {
        if self.is_finished() {
            Some(self.join())
        } else {
            None
        }
    }
}
