mod emittable_view;
mod graphql_view_input;
mod rust_ident;


use crate::emittable_view::EmittableView;
use crate::graphql_view_input::GraphQLViewInput;
use libgraphql_query_result_core::FieldSchemaBuilder;
use libgraphql_query_result_core::ast;
use quote::quote;
use syn::parse_macro_input;

/// Defines a set of structs for reading GraphQL response data through the
/// selections of a GraphQL document, checked at Rust compile-time.
///
/// The document is parsed and its [`FieldSchema`](libgraphql_query_result::FieldSchema)
/// is built while your crate compiles; a document that does not parse, or
/// whose selections conflict, is a compile error. The first operation or
/// fragment definition in the document is the one that gets wrapped.
///
/// `graphql_view! { struct Name = "..."; }` generates:
///
/// * `Name<'data>` with `Name::new(&data)` and one method per selected field,
///   named after the field's snake_case accessor name (Rust keywords become
///   raw identifiers, e.g. `r#type()`). Each accessor has a matching
///   `has_*()` predicate.
/// * One struct per field with sub-selections (e.g. `NameRepository`,
///   `NameRepositoryOwner`), returned wrapped in a
///   [`Typed`](libgraphql_query_result::Typed).
/// * A typed `nodes()` on every struct whose selections have the shape of a
///   Relay connection.
///
/// Every generated struct implements
/// [`ResultView`](libgraphql_query_result::ResultView), so the runtime-checked
/// `get()`/`has()`/`supports()` remain available alongside the generated
/// methods.
///
/// Example usage:
///
/// ```rust
/// use libgraphql_query_result::macros::graphql_view;
///
/// graphql_view! {
///     struct RepositoryQuery = r#"
///         query RepositoryQuery {
///             repository {
///                 nameWithOwner
///                 issues(first: 2) {
///                     edges {
///                         node {
///                             title
///                         }
///                     }
///                 }
///             }
///         }
///     "#;
/// }
///
/// let data = serde_json::json!({
///     "repository": {
///         "nameWithOwner": "github/graphql-client",
///         "issues": {
///             "edges": [
///                 { "node": { "title": "First" } },
///                 { "node": { "title": "Second" } },
///             ],
///         },
///     },
/// });
///
/// let query = RepositoryQuery::new(&data);
/// let repository = query.repository().object().unwrap();
/// assert_eq!(repository.name_with_owner().as_str(), Some("github/graphql-client"));
///
/// let titles: Vec<_> =
///     repository.issues()
///         .object()
///         .unwrap()
///         .nodes()
///         .filter_map(|issue| issue.object())
///         .filter_map(|issue| issue.title().as_str())
///         .collect();
/// assert_eq!(titles, vec!["First", "Second"]);
/// ```
#[proc_macro]
pub fn graphql_view(
    input: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as GraphQLViewInput);
    let source = input.source.value();

    // Parse and build the schema at compile time
    let document = match ast::parse(&source) {
        Ok(document) => document,
        Err(err) => {
            let error_msg = format!("Failed to parse GraphQL document: {err}");
            return quote! {
                compile_error!(#error_msg);
            }.into();
        }
    };

    let schema = match FieldSchemaBuilder::from_document(&document, None)
        .and_then(|builder| builder.set_name(input.ident.to_string()).build())
    {
        Ok(schema) => schema,
        Err(err) => {
            let error_msg = format!("Failed to build FieldSchema: {err}");
            return quote! {
                compile_error!(#error_msg);
            }.into();
        }
    };

    match EmittableView::new(input, schema).emit() {
        Ok(output) => output.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
