//! Command line argument parsing for pickline using clap.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::{FinderConfig, ParseErrorPolicy};
use crate::document::converter::LineFormat;
use crate::search::{SearcherKind, SortOrder};

/// pickline - Interactively filter lines and print the one you pick
#[derive(Parser, Debug, Clone)]
#[command(name = "pickline")]
#[command(about = "Interactively filter lines and print the one you pick")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct PicklineArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Format of the input lines
    #[arg(long, value_enum, default_value_t = LineFormat::Plain)]
    pub line_format: LineFormat,

    /// Search strategy
    #[arg(long, value_enum, default_value_t = SearcherKind::Indexed)]
    pub searcher: SearcherKind,

    /// Ordering of the filtered entries
    #[arg(long = "sort", value_enum, default_value_t = SortOrder::Default)]
    pub sort_order: SortOrder,

    /// Comma separated column names to display instead of the derived ones
    #[arg(long, value_delimiter = ',')]
    pub headers: Vec<String>,

    /// Column delimiter of the tabular format
    #[arg(long, default_value_t = ' ')]
    pub delimiter: char,

    /// Field printed for the selected entry
    #[arg(long, default_value = "$")]
    pub output_column: String,

    /// Template printed for the selected entry, e.g. "{{file}}:{{line}}"
    #[arg(long)]
    pub output_template: Option<String>,

    /// What to do with lines that fail to parse
    #[arg(long = "on-parse-error", value_enum, default_value_t = ParseErrorPolicy::Skip)]
    pub on_parse_error: ParseErrorPolicy,

    /// Redraw interval in milliseconds
    #[arg(long, default_value_t = 500, value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: u64,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl PicklineArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose.saturating_add(1)
        }
    }

    /// Build the session configuration.
    pub fn to_config(&self) -> FinderConfig {
        let mut config = FinderConfig::new()
            .with_line_format(self.line_format)
            .with_searcher(self.searcher)
            .with_sort_order(self.sort_order)
            .with_headers(self.headers.clone())
            .with_delimiter(self.delimiter)
            .with_output_column(self.output_column.clone())
            .with_tick_interval(Duration::from_millis(self.tick_ms))
            .with_parse_error_policy(self.on_parse_error);
        if let Some(template) = &self.output_template {
            config = config.with_output_template(template.clone());
        }
        config
    }
}
