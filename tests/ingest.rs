//! Integration tests for line sources feeding the searchers.

use std::fs;

use pickline::config::{FinderConfig, ParseErrorPolicy};
use pickline::document::LineFormat;
use pickline::error::Result;
use pickline::query::parse_query;
use pickline::search::{SearcherFactory, SearcherKind, SharedSearcher, SortOrder};
use pickline::source::{IngestStats, Ingestor, LineSource};
use tempfile::TempDir;

fn lines(items: &[&str]) -> LineSource {
    LineSource::Lines(items.iter().map(|s| s.to_string()).collect())
}

fn ingest(config: &FinderConfig, source: LineSource) -> Result<(SharedSearcher, Vec<String>, IngestStats)> {
    let searcher = SearcherFactory::create_shared(config.searcher_config());
    let handle = Ingestor::new(searcher.clone(), config).start(source)?;
    let headers = handle.headers().to_vec();
    let stats = handle.join()?;
    Ok((searcher, headers, stats))
}

fn raw_texts(searcher: &SharedSearcher, query: &str) -> Vec<String> {
    searcher
        .search(&parse_query(query), SortOrder::Default)
        .iter()
        .map(|d| d.raw_text().to_string())
        .collect()
}

#[test]
fn test_walked_directory_is_searchable() -> Result<()> {
    let dir = TempDir::new()?;
    fs::create_dir_all(dir.path().join("src/events"))?;
    fs::write(dir.path().join("Cargo.toml"), "")?;
    fs::write(dir.path().join("src/lib.rs"), "")?;
    fs::write(dir.path().join("src/events/machine.rs"), "")?;

    for kind in [SearcherKind::Indexed, SearcherKind::Fuzzy] {
        let config = FinderConfig::default().with_searcher(kind);
        let (searcher, headers, stats) =
            ingest(&config, LineSource::Walk(dir.path().to_path_buf()))?;

        assert_eq!(headers, vec!["$"]);
        assert_eq!(stats, IngestStats { added: 3, skipped: 0 });
        assert_eq!(raw_texts(&searcher, "machine"), vec!["src/events/machine.rs"]);
        assert_eq!(raw_texts(&searcher, "src rs").len(), 2);
    }
    Ok(())
}

#[test]
fn test_tabular_stream_with_custom_delimiter() -> Result<()> {
    let config = FinderConfig::default()
        .with_line_format(LineFormat::Tabular)
        .with_delimiter(',');
    let (searcher, headers, stats) = ingest(
        &config,
        lines(&[
            "name,role,notes",
            "ada,engineer,wrote notes, lots of them",
            "grace,admiral,cobol",
        ]),
    )?;

    assert_eq!(headers, vec!["name", "role", "notes"]);
    assert_eq!(stats.added, 2);

    let first = searcher.get_document(0).unwrap();
    assert_eq!(first.field("notes"), Some("wrote notes, lots of them"));
    assert_eq!(searcher.filter_entries(&parse_query("role:admiral")), vec![1]);
    Ok(())
}

#[test]
fn test_json_stream_skips_malformed_lines() -> Result<()> {
    let config = FinderConfig::default()
        .with_line_format(LineFormat::Json)
        .with_searcher(SearcherKind::Fuzzy);
    let (searcher, headers, stats) = ingest(
        &config,
        lines(&[
            r#"{"host": "web-1", "status": "up"}"#,
            r#"{"host": "web-2", "status": "down""#,
            "42",
            r#"{"host": "db-1", "status": "up"}"#,
        ]),
    )?;

    assert_eq!(headers, vec!["host", "status"]);
    assert_eq!(stats, IngestStats { added: 2, skipped: 2 });
    assert_eq!(searcher.filter_entries(&parse_query("status:up")), vec![0, 1]);
    assert_eq!(searcher.filter_entries(&parse_query("host:db")), vec![1]);
    Ok(())
}

#[test]
fn test_abort_policy_reports_the_failing_line() -> Result<()> {
    let config = FinderConfig::default()
        .with_line_format(LineFormat::Json)
        .with_parse_error_policy(ParseErrorPolicy::Abort);
    let searcher = SearcherFactory::create_shared(config.searcher_config());
    let handle = Ingestor::new(searcher.clone(), &config).start(lines(&[
        r#"{"a": "1"}"#,
        r#"{"a": "2"}"#,
        "not json",
        r#"{"a": "3"}"#,
    ]))?;

    let err = handle.join().unwrap_err();
    assert!(err.to_string().contains("line 3"));
    assert_eq!(searcher.count(), 2);
    Ok(())
}

#[test]
fn test_missing_walk_root_fails() -> Result<()> {
    let dir = TempDir::new()?;
    let config = FinderConfig::default();
    let searcher = SearcherFactory::create_shared(config.searcher_config());
    let handle = Ingestor::new(searcher.clone(), &config)
        .start(LineSource::Walk(dir.path().join("missing")))?;

    assert!(handle.join().is_err());
    assert_eq!(searcher.count(), 0);
    Ok(())
}
