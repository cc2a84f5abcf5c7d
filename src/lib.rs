//! `graphql_query_builder`
//! =========
//!
//! _Simple, chainable builders for GraphQL query and mutation document text._
//!
//! The **`graphql_query_builder`** library follows two goals:
//!
//! - To support a pleasant-to-use, chainable API for assembling GraphQL operations
//! - To serialize any argument tree — strings, lists, objects, enum tokens, nested
//!   builders — into correct GraphQL literal syntax without hand-concatenation
//!
//! In short, this crate handles the *writing* side of GraphQL only. It does not parse
//! documents, validate them against a schema, execute them, or transport them; those concerns
//! belong to an HTTP client and a schema-aware validator sitting next to this crate. What it
//! guarantees is that the token sequence it emits — names, aliases, colons, commas,
//! parentheses, braces, and literal encodings — forms a syntactically valid query or mutation
//! document for the structure that was described.
//!
//! A [`Query`](ast::Query) describes one field invocation with arguments, an alias, and a
//! selection set, and composes by embedding into other queries' selections. A
//! [`Mutation`](ast::Mutation) describes a mutation operation with variable declarations that
//! are forwarded to the inner field call. Rendering is a pure read of the builder's current
//! state and can be repeated freely.
//!
//! With the default `json` feature enabled, the [`json`] module additionally accepts
//! `serde_json` values wherever arguments or selections are expected, which mirrors the
//! loosely shaped inputs of the JavaScript `graphql-query-builder` this crate is compatible
//! with.
//!
//! [A good place to start learning more about this crate is the `ast` module...](ast)

pub mod ast;
pub mod error;

#[cfg(feature = "json")]
pub mod json;
