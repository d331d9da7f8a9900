//! Query parsing.
//!
//! A raw query string typed by the user is split into [`parser::SubQuery`]
//! values, each scoped to one field. All sub-queries of a query are ANDed
//! by the searchers.
//!
//! ```
//! use pickline::query::parse_query;
//!
//! let sub_queries = parse_query("name:Ada  rust");
//! assert_eq!(sub_queries.len(), 2);
//! assert_eq!(sub_queries[0].field, "name");
//! assert_eq!(sub_queries[0].term, "ada");
//! assert_eq!(sub_queries[1].field, "$");
//! ```

pub mod parser;

pub use parser::{QueryParser, SubQuery, parse_query};
