use crate::ast;
use crate::schema::field_schema::merge_field_into;
use crate::schema::FieldDef;
use crate::schema::FieldSchema;
use crate::schema::SourceNode;
use indexmap::IndexMap;
use std::sync::Arc;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Collapses the selections beneath one AST node into a [`FieldSchema`].
///
/// Field selections contribute one field per response key; a response key
/// selected more than once contributes a single field whose nested schema is
/// the union of every occurrence's sub-selections. Inline fragments are
/// transparent: their fields merge into the enclosing schema as if written
/// there directly. Named fragment spreads are opaque and contribute nothing.
/// A spread's fields are only observable through a schema built from the
/// fragment's own definition.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSchemaBuilder<'ast> {
    name: Option<String>,
    selections: Vec<&'ast ast::Selection>,
    source_node: SourceNode<'ast>,
}
impl<'ast> FieldSchemaBuilder<'ast> {
    /// Add a [`Selection`](ast::Selection) after any previously added
    /// selections.
    pub fn add_selection(mut self, selection: &'ast ast::Selection) -> Self {
        self.selections.push(selection);
        self
    }

    /// Consume this [`FieldSchemaBuilder`] to produce a [`FieldSchema`].
    pub fn build(self) -> Result<FieldSchema<'ast>> {
        let name = self.name.unwrap_or_else(|| self.source_node.type_name());

        let mut fields = IndexMap::<String, FieldDef<'ast>>::new();
        for selection in self.selections {
            match selection {
                ast::Selection::Field(field) => {
                    let raw_key = field.alias.as_deref().unwrap_or(field.name.as_str());

                    let nested_schema =
                        if field.selection_set.items.is_empty() {
                            None
                        } else {
                            let nested_schema =
                                FieldSchemaBuilder::from_ast(field)
                                    .set_name(format!("{name}.{raw_key}"))
                                    .build()?;
                            Some(Arc::new(nested_schema))
                        };

                    merge_field_into(
                        &mut fields,
                        name.as_str(),
                        FieldDef::new(raw_key, nested_schema),
                    )?;
                },

                ast::Selection::InlineFragment(inline_fragment) => {
                    let fragment_schema =
                        FieldSchemaBuilder::from_ast(inline_fragment)
                            .set_name(name.to_owned())
                            .build()?;

                    for field_def in fragment_schema.fields.into_values() {
                        merge_field_into(&mut fields, name.as_str(), field_def)?;
                    }
                },

                ast::Selection::FragmentSpread(fragment_spread) => {
                    log::trace!(
                        "Skipping spread of `{}` in `{name}`: fields of a named \
                        fragment are only visible through that fragment's own \
                        schema.",
                        fragment_spread.fragment_name,
                    );
                },
            }
        }

        log::debug!("Built `{name}` with {} fields.", fields.len());

        Ok(FieldSchema {
            fields,
            name,
            source_node: self.source_node,
        })
    }

    /// Produce a [`FieldSchemaBuilder`] for one definition in `document`:
    /// the operation or fragment named `definition_name`, or the first
    /// definition when `definition_name` is `None`.
    pub fn from_document(
        document: &'ast ast::Document,
        definition_name: Option<&str>,
    ) -> Result<Self> {
        let Some(definition_name) = definition_name else {
            return match document.definitions.first() {
                Some(definition) => Ok(Self::from_definition(definition)),
                None => Err(SchemaBuildError::EmptyDocument),
            };
        };

        document.definitions
            .iter()
            .find(|definition| definition_has_name(definition, definition_name))
            .map(Self::from_definition)
            .ok_or_else(|| SchemaBuildError::DefinitionNotFound {
                definition_name: definition_name.to_string(),
            })
    }

    /// Produce a [`FieldSchemaBuilder`] over the selections directly beneath
    /// `node`.
    pub fn from_ast(node: impl Into<SourceNode<'ast>>) -> Self {
        let source_node = node.into();
        Self {
            name: None,
            selections: source_node.selection_set().items.iter().collect(),
            source_node,
        }
    }

    fn from_definition(definition: &'ast ast::Definition) -> Self {
        match definition {
            ast::Definition::Fragment(fragment) => Self::from_ast(fragment),
            ast::Definition::Operation(operation) => Self::from_ast(operation),
        }
    }

    /// Override the logical type name reported in diagnostics. Defaults to a
    /// name synthesized from the source node (see
    /// [`SourceNode::type_name()`]).
    pub fn set_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

fn definition_has_name(definition: &ast::Definition, name: &str) -> bool {
    let definition_name = match definition {
        ast::Definition::Fragment(fragment) => Some(&fragment.name),
        ast::Definition::Operation(ast::OperationDefinition::Query(query)) =>
            query.name.as_ref(),
        ast::Definition::Operation(ast::OperationDefinition::Mutation(mutation)) =>
            mutation.name.as_ref(),
        ast::Definition::Operation(ast::OperationDefinition::Subscription(subscription)) =>
            subscription.name.as_ref(),
        ast::Definition::Operation(ast::OperationDefinition::SelectionSet(_)) =>
            None,
    };

    definition_name.is_some_and(|definition_name| definition_name == name)
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error(
        "The response keys `{existing_raw_key}` and `{new_raw_key}` selected \
        on `{schema_name}` would both be read through an accessor named \
        `{accessor_name}`. Alias one of them to disambiguate."
    )]
    ConflictingAccessorName {
        accessor_name: String,
        existing_raw_key: String,
        new_raw_key: String,
        schema_name: String,
    },

    #[error("No operation or fragment named `{definition_name}` is defined in this document")]
    DefinitionNotFound {
        definition_name: String,
    },

    #[error("The document contains no definitions")]
    EmptyDocument,
}
