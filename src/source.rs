//! Raw line sources and background ingestion.
//!
//! A [`LineSource`] yields raw text lines: piped standard input, the files
//! tracked by git, or a recursive walk of a directory. An
//! [`ingest::Ingestor`] reads a source on its own thread and feeds parsed
//! documents into the shared searcher while the interaction loop runs.

use std::io::{self, BufReader, IsTerminal};
use std::path::PathBuf;

use log::{debug, info};

use crate::error::Result;

pub mod git;
pub mod ingest;
pub mod reader;
pub mod walk;

pub use ingest::{IngestHandle, IngestStats, Ingestor};
pub use reader::LossyLines;

/// Boxed iterator of raw lines.
pub type LineIter = Box<dyn Iterator<Item = io::Result<String>> + Send>;

/// Where raw lines come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineSource {
    /// Lines read from standard input.
    Stdin,
    /// Paths tracked by git in the current work tree.
    Git,
    /// Files found by recursively walking a directory.
    Walk(PathBuf),
    /// Fixed, in-memory lines.
    Lines(Vec<String>),
}

impl LineSource {
    /// Pick the source the way an interactive invocation expects:
    /// piped stdin first, then the git work tree, then a walk of `.`.
    pub fn detect() -> Self {
        if !io::stdin().is_terminal() {
            debug!("stdin is not a terminal, reading lines from it");
            return LineSource::Stdin;
        }
        if git::is_inside_work_tree() {
            debug!("inside a git work tree, listing tracked files");
            return LineSource::Git;
        }
        debug!("walking the current directory");
        LineSource::Walk(PathBuf::from("."))
    }

    /// Whether the source carries records whose first line may describe
    /// the format (a tabular header or a JSON sample). File listings never
    /// do.
    pub fn is_record_stream(&self) -> bool {
        matches!(self, LineSource::Stdin | LineSource::Lines(_))
    }

    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            LineSource::Stdin => "stdin",
            LineSource::Git => "git",
            LineSource::Walk(_) => "walk",
            LineSource::Lines(_) => "lines",
        }
    }

    /// Open the source.
    ///
    /// Every source is streamed: lines are yielded as they are read, listed
    /// or found. Stdin lines that are not valid UTF-8 are decoded lossily.
    pub fn open(self) -> Result<LineIter> {
        info!("opening {} line source", self.name());
        match self {
            LineSource::Stdin => Ok(Box::new(LossyLines::new(BufReader::new(io::stdin())))),
            LineSource::Git => Ok(Box::new(git::ls_files()?)),
            LineSource::Walk(root) => Ok(Box::new(walk::walk_files(&root)?.map(Ok))),
            LineSource::Lines(lines) => Ok(Box::new(lines.into_iter().map(Ok))),
        }
    }
}
