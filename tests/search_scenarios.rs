//! Integration tests for searching parsed lines.

use pickline::document::{Document, LineFormat, LineParserFactory, parse_line};
use pickline::error::Result;
use pickline::query::parse_query;
use pickline::search::{SearcherConfig, SearcherFactory, SharedSearcher, SortOrder};

fn plain_searcher(config: SearcherConfig, lines: &[&str]) -> Result<SharedSearcher> {
    let searcher = SearcherFactory::create_shared(config);
    for line in lines {
        searcher.add_document(Document::plain(line))?;
    }
    Ok(searcher)
}

fn texts(searcher: &SharedSearcher, query: &str) -> Vec<String> {
    searcher
        .search(&parse_query(query), SortOrder::Default)
        .iter()
        .map(|d| d.raw_text().to_string())
        .collect()
}

fn both() -> [SearcherConfig; 2] {
    [SearcherConfig::default(), SearcherConfig::Fuzzy]
}

#[test]
fn test_indexed_end_to_end() -> Result<()> {
    let searcher = plain_searcher(
        SearcherConfig::default(),
        &["hello world", "this is the best WOrld", "this won't match"],
    )?;

    let mut ids = searcher.filter_entries(&parse_query("world"));
    ids.sort_unstable();
    assert_eq!(ids, vec![0, 1]);
    assert_eq!(
        texts(&searcher, "world"),
        vec!["hello world", "this is the best WOrld"]
    );
    Ok(())
}

#[test]
fn test_fuzzy_end_to_end() -> Result<()> {
    let searcher = plain_searcher(
        SearcherConfig::Fuzzy,
        &["abcd", "aaaacbddddd", "tttttbxxxxxc"],
    )?;
    assert_eq!(texts(&searcher, "bc"), vec!["abcd", "tttttbxxxxxc"]);
    Ok(())
}

#[test]
fn test_results_are_valid_ids() -> Result<()> {
    let lines = [
        "src/main.rs",
        "src/lib.rs",
        "src/search/fuzzy.rs",
        "README.md",
        "Cargo.toml",
        "tests/search_scenarios.rs",
    ];
    for config in both() {
        let searcher = plain_searcher(config, &lines)?;
        for query in ["src", "rs", "s r", "md", "nothing", "$:main", "x:y", "  "] {
            for id in searcher.filter_entries(&parse_query(query)) {
                assert!(id < searcher.count());
            }
        }
    }
    Ok(())
}

#[test]
fn test_empty_query_returns_everything() -> Result<()> {
    for config in both() {
        let searcher = plain_searcher(config, &["a", "b", "c"])?;
        let mut ids = searcher.filter_entries(&parse_query(""));
        ids.sort_unstable();
        assert_eq!(ids, vec![0, 1, 2]);
    }
    Ok(())
}

#[test]
fn test_swapped_case_queries_agree() -> Result<()> {
    let lines = ["Hello World", "HELLO there", "goodbye"];
    for config in both() {
        let searcher = plain_searcher(config, &lines)?;
        for (lower, upper) in [("hello", "HELLO"), ("world", "wORLD"), ("$:there", "$:THERE")] {
            let mut a = searcher.filter_entries(&parse_query(lower));
            let mut b = searcher.filter_entries(&parse_query(upper));
            a.sort_unstable();
            b.sort_unstable();
            assert_eq!(a, b);
        }
    }
    Ok(())
}

#[test]
fn test_field_scoping_over_json_lines() -> Result<()> {
    let lines = [
        r#"{"Name": "ada", "city": "london", "tags": ["math", "engines"]}"#,
        r#"{"Name": "grace", "city": "arlington", "tags": ["cobol"]}"#,
        r#"{"Name": "london", "city": "paris", "age": 30}"#,
    ];
    let parser = LineParserFactory::create(LineFormat::Json, lines[0], &[], ' ')?;
    assert_eq!(parser.headers(), ["Name", "city", "tags"]);

    for config in both() {
        let searcher = SearcherFactory::create_shared(config);
        for line in lines {
            searcher.add_document(parse_line(parser.as_ref(), line)?)?;
        }

        let mut unscoped = searcher.filter_entries(&parse_query("london"));
        unscoped.sort_unstable();
        assert_eq!(unscoped, vec![0, 2]);
        assert_eq!(searcher.filter_entries(&parse_query("city:london")), vec![0]);
        assert_eq!(searcher.filter_entries(&parse_query("NAME:london")), vec![2]);
        assert_eq!(searcher.filter_entries(&parse_query("tags:cobol")), vec![1]);
        assert!(searcher.filter_entries(&parse_query("country:london")).is_empty());
    }
    Ok(())
}

#[test]
fn test_field_scoping_over_tabular_lines() -> Result<()> {
    let parser = LineParserFactory::create(LineFormat::Tabular, "PID TTY CMD", &[], ' ')?;
    let searcher = SearcherFactory::create_shared(SearcherConfig::default());
    for line in ["1 pts/0 vim notes.md", "22 pts/1 cargo test", "333 pts/2 vim Cargo.toml"] {
        searcher.add_document(parse_line(parser.as_ref(), line)?)?;
    }

    let hits = searcher.search(&parse_query("cmd:vim"), SortOrder::Index);
    let pids: Vec<&str> = hits.iter().filter_map(|d| d.field("PID")).collect();
    assert_eq!(pids, vec!["333", "1"]);

    assert_eq!(searcher.filter_entries(&parse_query("tty:pts/1")), Vec::<usize>::new());
    assert_eq!(searcher.filter_entries(&parse_query("tty:1 cargo")), vec![1]);
    Ok(())
}

#[test]
fn test_default_ranking_is_deterministic_and_by_length() -> Result<()> {
    let lines = ["aa x", "a x", "aaaa x", "b x", "aaa x"];
    for config in both() {
        let searcher = plain_searcher(config, &lines)?;
        let first = texts(&searcher, "x");
        let second = texts(&searcher, "x");
        assert_eq!(first, second);
        assert!(first.windows(2).all(|w| w[0].len() <= w[1].len()));
        assert_eq!(first[..2], ["a x".to_string(), "b x".to_string()]);
    }
    Ok(())
}
