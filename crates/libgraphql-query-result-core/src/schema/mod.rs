mod field_def;
mod field_schema;
mod field_schema_builder;
mod source_node;

pub use field_def::FieldDef;
pub use field_schema::FieldSchema;
pub use field_schema_builder::FieldSchemaBuilder;
pub use field_schema_builder::SchemaBuildError;
pub use source_node::SourceNode;

#[cfg(test)]
mod tests;
