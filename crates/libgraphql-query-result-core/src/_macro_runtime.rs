use crate::ast;
use crate::schema::FieldSchema;
use crate::schema::FieldSchemaBuilder;

/// Parse a GraphQL document embedded by `graphql_view!`. The macro has
/// already parsed the same text at compile time.
pub fn parse_macro_document(source: &str) -> ast::Document {
    ast::parse(source).expect("Failed to parse precompiled GraphQL document")
}

/// Build the schema for the first definition of a document embedded by
/// `graphql_view!`, named after the generated struct.
pub fn build_from_macro_document(
    document: &'static ast::Document,
    name: &str,
) -> FieldSchema<'static> {
    FieldSchemaBuilder::from_document(document, None)
        .and_then(|builder| builder.set_name(name).build())
        .expect("Failed to build precompiled FieldSchema")
}
