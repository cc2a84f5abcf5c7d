//! # GraphQL Query and Mutation builders
//!
//! The `graphql_query_builder::ast` module contains the builder nodes and the trait to print them
//! into GraphQL source text. The nodes implemented in this crate are specialized to the
//! client-side task of assembling query and mutation documents that are sent to a GraphQL
//! service; nothing here parses or validates GraphQL.
//! [Reference](https://spec.graphql.org/October2021/#sec-Language)
//!
//! It's easiest to use this module by importing all of it, however, its three main parts are:
//! - [`Query`], a chainable builder for a single field invocation with arguments and selections
//! - [`Mutation`], a builder for a mutation operation document with variable declarations
//! - [`PrintNode`], a trait using which builder nodes are printed into source text
//!
//! The following workflow describes the minimum that's done using this module:
//!
//! ```
//! use graphql_query_builder::ast::*;
//!
//! // Describe a field invocation with arguments and a selection
//! let query = Query::new("user")
//!     .filter([("id", Value::Int(12345))])
//!     .find(["id", "name"])
//!     .unwrap();
//!
//! // Print the node to an output String
//! let output = query.render();
//! assert_eq!(output, "user(id: 12345) { id, name }");
//! ```

#[allow(clippy::module_inception)]
mod ast;

mod ast_conversion;
mod printer;

#[cfg(test)]
mod tests;

pub use ast::*;
pub use printer::PrintNode;
