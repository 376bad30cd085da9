//! Schema-checked, lazily materialized views over GraphQL response data.
//!
//! A [`FieldSchema`] is built once from a parsed selection (an operation, a
//! fragment definition, a field, or an inline fragment) and describes which
//! fields that selection makes observable. Each response value is then
//! [wrapped](FieldSchema::wrap) into a [`View`] that reads fields by their
//! snake_case accessor names and refuses to read anything the selection did
//! not ask for.
//!
//! ```
//! use libgraphql_query_result_core::ast;
//! use libgraphql_query_result_core::schema::FieldSchemaBuilder;
//!
//! let document = ast::parse("fragment PersonFragment on Person { firstName company }")?;
//! let schema = FieldSchemaBuilder::from_document(&document, None)?.build()?;
//!
//! let data = serde_json::json!({ "firstName": "Joshua", "company": null });
//! let person = schema.wrap(&data);
//! assert_eq!(person.get("first_name")?.as_str(), Some("Joshua"));
//! assert!(!person.has("company")?);
//! assert!(person.get("last_name").is_err());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod _macro_runtime;
mod accessor_name;
pub mod ast;
pub mod schema;
pub mod view;

#[cfg(test)]
mod test;

pub use accessor_name::to_accessor_name;
pub use schema::FieldDef;
pub use schema::FieldSchema;
pub use schema::FieldSchemaBuilder;
pub use schema::SchemaBuildError;
pub use schema::SourceNode;
pub use serde_json::Value as JsonValue;
pub use view::FieldValue;
pub use view::FromView;
pub use view::NestedView;
pub use view::Nodes;
pub use view::ResultView;
pub use view::Typed;
pub use view::View;
pub use view::ViewError;
