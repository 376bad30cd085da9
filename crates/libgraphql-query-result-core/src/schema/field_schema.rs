use crate::JsonValue;
use crate::schema::FieldDef;
use crate::schema::SchemaBuildError;
use crate::schema::SourceNode;
use crate::view::View;
use indexmap::IndexMap;
use indexmap::map::Entry;
use std::sync::Arc;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// An ordered, immutable table of the fields observable through one
/// selection, keyed by accessor name.
///
/// A `FieldSchema` is independent of any particular response: build it once
/// (see [`FieldSchemaBuilder`](crate::schema::FieldSchemaBuilder)) and
/// [`wrap()`](FieldSchema::wrap) each response value that matches it.
///
/// Two schemas compare equal when their fields (accessor names, raw keys and
/// nested schemas) are equal and in the same order. The schema's name and
/// source node do not take part in equality.
#[derive(Clone, Debug)]
pub struct FieldSchema<'ast> {
    pub(super) fields: IndexMap<String, FieldDef<'ast>>,
    pub(super) name: String,
    pub(super) source_node: SourceNode<'ast>,
}
impl<'ast> FieldSchema<'ast> {
    pub fn accessor_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn field(&self, accessor_name: &str) -> Option<&FieldDef<'ast>> {
        self.fields.get(accessor_name)
    }

    pub fn field_by_raw_key(&self, raw_key: &str) -> Option<&FieldDef<'ast>> {
        self.fields.values().find(|field_def| field_def.raw_key() == raw_key)
    }

    /// All fields in the order they were first encountered, keyed by
    /// accessor name.
    pub fn fields(&self) -> &IndexMap<String, FieldDef<'ast>> {
        &self.fields
    }

    /// Whether this schema has the shape of a Relay connection: an `edges`
    /// field whose sub-selection includes a `node` field.
    pub fn is_connection(&self) -> bool {
        self.field("edges")
            .and_then(FieldDef::nested_schema)
            .is_some_and(|edges_schema| edges_schema.supports("node"))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Produce the union of `self` and `other` without modifying either.
    ///
    /// All of `self`'s fields come first and in `self`'s order, followed by
    /// any of `other`'s fields that `self` lacks, in `other`'s order. Fields
    /// present in both have their nested schemas merged recursively. The
    /// result keeps `self`'s name and source node.
    pub fn merge(&self, other: &FieldSchema<'ast>) -> Result<FieldSchema<'ast>> {
        let mut fields = self.fields.clone();
        for field_def in other.fields.values() {
            merge_field_into(&mut fields, self.name.as_str(), field_def.to_owned())?;
        }

        log::trace!(
            "Merged `{}` ({} fields) with `{}` ({} fields) into {} fields.",
            self.name,
            self.fields.len(),
            other.name,
            other.fields.len(),
            fields.len(),
        );

        Ok(FieldSchema {
            fields,
            name: self.name.to_owned(),
            source_node: self.source_node,
        })
    }

    /// The logical type name used in diagnostics (e.g. `PersonFragment` or
    /// `FooQuery.users.issues`).
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn source_node(&self) -> &SourceNode<'ast> {
        &self.source_node
    }

    /// Whether this schema has a field readable through `accessor_name`.
    ///
    /// Fields that are only reachable through a named fragment spread never
    /// satisfy this check.
    pub fn supports(&self, accessor_name: &str) -> bool {
        self.fields.contains_key(accessor_name)
    }

    /// Pair this schema with one raw response value. No validation of `data`
    /// happens here: keys missing from `data` surface as
    /// [`FieldValue::Absent`](crate::view::FieldValue::Absent) when read.
    pub fn wrap<'schema, 'data>(
        &'schema self,
        data: &'data JsonValue,
    ) -> View<'schema, 'data> {
        View::new(self, data)
    }
}

impl PartialEq for FieldSchema<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.fields.len() == other.fields.len()
            && self.fields.iter().eq(other.fields.iter())
    }
}

impl serde::Serialize for FieldSchema<'_> {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("FieldSchema", 2)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field(
            "fields",
            &self.fields.values().collect::<Vec<_>>(),
        )?;
        state.end()
    }
}

/// Insert `field_def` at the end of `fields`, or, if a field with the same
/// raw key is already present, merge their nested schemas in place.
pub(super) fn merge_field_into<'ast>(
    fields: &mut IndexMap<String, FieldDef<'ast>>,
    schema_name: &str,
    field_def: FieldDef<'ast>,
) -> Result<()> {
    match fields.entry(field_def.accessor_name.to_owned()) {
        Entry::Vacant(entry) => {
            entry.insert(field_def);
        },

        Entry::Occupied(mut entry) => {
            let existing = entry.get_mut();
            if existing.raw_key != field_def.raw_key {
                return Err(SchemaBuildError::ConflictingAccessorName {
                    accessor_name: field_def.accessor_name,
                    existing_raw_key: existing.raw_key.to_owned(),
                    new_raw_key: field_def.raw_key,
                    schema_name: schema_name.to_string(),
                });
            }

            log::trace!(
                "Merging repeated selection of `{}` into `{schema_name}`.",
                existing.raw_key,
            );
            existing.nested_schema = merge_nested_schemas(
                existing.nested_schema.take(),
                field_def.nested_schema,
            )?;
        },
    }

    Ok(())
}

fn merge_nested_schemas<'ast>(
    existing: Option<Arc<FieldSchema<'ast>>>,
    incoming: Option<Arc<FieldSchema<'ast>>>,
) -> Result<Option<Arc<FieldSchema<'ast>>>> {
    Ok(match (existing, incoming) {
        (Some(existing), Some(incoming)) =>
            Some(Arc::new(existing.merge(&incoming)?)),
        (existing @ Some(_), None) => existing,
        (None, incoming) => incoming,
    })
}
