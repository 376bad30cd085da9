use crate::JsonValue;
use crate::schema::FieldSchema;
use crate::schema::SourceNode;
use crate::view::FieldValue;
use crate::view::NestedView;
use crate::view::Nodes;
use crate::view::ResultView;
use crate::view::ViewError;
use inherent::inherent;
use std::sync::OnceLock;

type Result<T> = std::result::Result<T, ViewError>;

/// One raw response value read through a [`FieldSchema`].
///
/// Constructing a `View` never inspects `data`. Fields with sub-selections are
/// materialized into child views the first time they are read and the result
/// is cached, so repeated reads return the same child view. The cache is
/// filled at most once per field even when a view is shared across threads.
#[derive(Clone)]
pub struct View<'schema, 'data> {
    data: &'data JsonValue,
    nested_views: Box<[OnceLock<NestedView<'schema, 'data>>]>,
    schema: &'schema FieldSchema<'schema>,
}
impl<'schema, 'data> View<'schema, 'data> {
    /// Read the field at `index` in the schema's field order. Indices past
    /// the end of the schema read as [`FieldValue::Absent`].
    pub fn field_at(&self, index: usize) -> FieldValue<'_, 'schema, 'data> {
        let schema: &'schema FieldSchema<'schema> = self.schema;
        let Some((_, field_def)) = schema.fields().get_index(index) else {
            return FieldValue::Absent;
        };

        let Some(raw_value) = self.data.get(field_def.raw_key()) else {
            return FieldValue::Absent;
        };

        let Some(nested_schema) = field_def.nested_schema() else {
            return FieldValue::Raw(raw_value);
        };

        match raw_value {
            JsonValue::Array(_) | JsonValue::Object(_) => {
                let nested_view = self.nested_views[index].get_or_init(|| {
                    log::trace!(
                        "Materializing `{}` for `{}`.",
                        field_def.raw_key(),
                        schema.name(),
                    );
                    NestedView::materialize(nested_schema, raw_value)
                });
                FieldValue::Nested(nested_view)
            },

            _ => FieldValue::Raw(raw_value),
        }
    }

    /// Whether the field at `index` is present in the response and is neither
    /// `null` nor `false`.
    pub fn has_at(&self, index: usize) -> bool {
        self.schema.fields()
            .get_index(index)
            .and_then(|(_, field_def)| self.data.get(field_def.raw_key()))
            .is_some_and(|raw_value| !matches!(
                raw_value,
                JsonValue::Null | JsonValue::Bool(false),
            ))
    }

    pub fn new(
        schema: &'schema FieldSchema<'schema>,
        data: &'data JsonValue,
    ) -> Self {
        Self {
            data,
            nested_views: schema.fields().iter().map(|_| OnceLock::new()).collect(),
            schema,
        }
    }

    /// The `node` of every edge, when this view's schema has the shape of a
    /// Relay connection (see [`FieldSchema::is_connection()`]). `None`
    /// otherwise.
    ///
    /// A missing or `null` `edges` value yields no nodes.
    pub fn nodes(&self) -> Option<Nodes<'_, 'schema, 'data>> {
        let (edges_index, _, edges_def) = self.schema.fields().get_full("edges")?;
        let node_index =
            edges_def.nested_schema()?
                .fields()
                .get_index_of("node")?;

        let edges = match self.field_at(edges_index) {
            FieldValue::Nested(nested) => match nested {
                NestedView::List { items, .. } => items.as_slice(),
                NestedView::Object(_) => std::slice::from_ref(nested),
                NestedView::Raw(_) => &[],
            },
            FieldValue::Absent | FieldValue::Raw(_) => &[],
        };

        Some(Nodes::new(edges, node_index))
    }

    pub fn schema(&self) -> &'schema FieldSchema<'schema> {
        self.schema
    }

    pub fn source_node(&self) -> &'schema SourceNode<'schema> {
        self.schema.source_node()
    }

    fn unknown_field(&self, accessor_name: &str) -> ViewError {
        ViewError::UnknownField {
            accessor_name: accessor_name.to_string(),
            rendered_view: self.to_string(),
            type_name: self.schema.name().to_string(),
        }
    }
}

#[inherent]
impl<'schema, 'data> ResultView<'schema, 'data> for View<'schema, 'data> {
    pub fn as_view(&self) -> &View<'schema, 'data> {
        self
    }

    pub fn data(&self) -> &'data JsonValue {
        self.data
    }

    pub fn get(&self, accessor_name: &str) -> Result<FieldValue<'_, 'schema, 'data>> {
        self.schema.fields()
            .get_index_of(accessor_name)
            .map(|index| self.field_at(index))
            .ok_or_else(|| self.unknown_field(accessor_name))
    }

    pub fn has(&self, accessor_name: &str) -> Result<bool> {
        self.schema.fields()
            .get_index_of(accessor_name)
            .map(|index| self.has_at(index))
            .ok_or_else(|| self.unknown_field(accessor_name))
    }

    pub fn supports(&self, accessor_name: &str) -> bool {
        self.schema.supports(accessor_name)
    }

    pub fn type_name(&self) -> &str {
        self.schema.name()
    }
}

impl std::fmt::Debug for View<'_, '_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("View")
            .field("schema", &self.schema.name())
            .field("data", self.data)
            .finish()
    }
}

/// Renders as `TypeName { rawKey: value, .. }` over every key/value pair in
/// the raw data, whether selected or not.
impl std::fmt::Display for View<'_, '_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let type_name = self.schema.name();
        let JsonValue::Object(entries) = self.data else {
            return write!(f, "{type_name}({})", self.data);
        };

        if entries.is_empty() {
            return write!(f, "{type_name} {{}}");
        }

        write!(f, "{type_name} {{ ")?;
        for (idx, (raw_key, raw_value)) in entries.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{raw_key}: {raw_value}")?;
        }
        write!(f, " }}")
    }
}
