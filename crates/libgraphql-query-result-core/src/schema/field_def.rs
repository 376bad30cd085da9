use crate::accessor_name::to_accessor_name;
use crate::schema::FieldSchema;
use std::sync::Arc;

/// One observable field of a [`FieldSchema`].
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDef<'ast> {
    pub(super) accessor_name: String,
    pub(super) nested_schema: Option<Arc<FieldSchema<'ast>>>,
    pub(super) raw_key: String,
}
impl<'ast> FieldDef<'ast> {
    /// The snake_case name callers use to read this field.
    pub fn accessor_name(&self) -> &str {
        self.accessor_name.as_str()
    }

    /// The schema of this field's sub-selections, if it had any.
    pub fn nested_schema(&self) -> Option<&FieldSchema<'ast>> {
        self.nested_schema.as_deref()
    }

    pub(super) fn new(
        raw_key: impl Into<String>,
        nested_schema: Option<Arc<FieldSchema<'ast>>>,
    ) -> Self {
        let raw_key = raw_key.into();
        Self {
            accessor_name: to_accessor_name(raw_key.as_str()),
            nested_schema,
            raw_key,
        }
    }

    /// The key this field's value is stored under in raw response data (the
    /// selection's alias if it had one, otherwise the field name).
    pub fn raw_key(&self) -> &str {
        self.raw_key.as_str()
    }
}

impl serde::Serialize for FieldDef<'_> {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("FieldDef", 3)?;
        state.serialize_field("accessor_name", &self.accessor_name)?;
        state.serialize_field("raw_key", &self.raw_key)?;
        state.serialize_field("nested_schema", &self.nested_schema())?;
        state.end()
    }
}
