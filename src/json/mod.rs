//! # JSON input conversion
//!
//! The `graphql_query_builder::json` module contains utilities to build queries from
//! `serde_json` values. This recovers the loosely shaped inputs of the reference builder —
//! argument maps, selection lists mixing field names and alias objects, and the overloaded
//! two-argument query constructor — on top of the typed builder nodes, with the same shape
//! checks the reference applied at runtime.
//!
//! The module contains a handful of conversions and constructors:
//!
//! - `From<serde_json::Value>` converts any JSON value into a builder [Value](crate::ast::Value).
//! - [selections_from_json] converts a JSON selection list into [Selection](crate::ast::Selection) items.
//! - [Query::with](crate::ast::Query::with) is the two-argument constructor taking an alias or argument map.
//! - [Query::filter_json](crate::ast::Query::filter_json), [Query::find_json](crate::ast::Query::find_json),
//!   and [Mutation::find_json](crate::ast::Mutation::find_json) accept JSON where their typed
//!   counterparts take builder nodes.
//!
//! JSON object entries convert in their original order, which keeps argument output order
//! faithful to the input document.

mod conversion;

pub use conversion::*;
