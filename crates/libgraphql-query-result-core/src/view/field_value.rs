use crate::JsonValue;
use crate::view::View;

/// The result of reading one field through a [`View`].
#[derive(Clone, Copy, Debug)]
pub enum FieldValue<'view, 'schema, 'data> {
    /// The field's raw key is missing from the response data.
    Absent,

    /// A field with sub-selections whose raw value is a mapping or a
    /// sequence, materialized into child views.
    Nested(&'view NestedView<'schema, 'data>),

    /// The raw value, unchanged. Leaf fields always read this way, as do
    /// fields with sub-selections whose raw value is `null` (or any other
    /// non-container value).
    Raw(&'data JsonValue),
}
impl<'view, 'schema, 'data> FieldValue<'view, 'schema, 'data> {
    pub fn as_bool(&self) -> Option<bool> {
        self.raw().and_then(JsonValue::as_bool)
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.raw().and_then(JsonValue::as_f64)
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.raw().and_then(JsonValue::as_i64)
    }

    /// The child views of a field whose raw value was a sequence.
    pub fn as_list(&self) -> Option<&'view [NestedView<'schema, 'data>]> {
        if let Self::Nested(NestedView::List { items, .. }) = *self {
            Some(items.as_slice())
        } else {
            None
        }
    }

    pub fn as_str(&self) -> Option<&'data str> {
        self.raw().and_then(JsonValue::as_str)
    }

    pub fn as_u64(&self) -> Option<u64> {
        self.raw().and_then(JsonValue::as_u64)
    }

    /// The child view of a field whose raw value was a single mapping.
    pub fn as_view(&self) -> Option<&'view View<'schema, 'data>> {
        if let Self::Nested(NestedView::Object(view)) = *self {
            Some(view)
        } else {
            None
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Whether the field was present in the response with a `null` value.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Raw(JsonValue::Null))
    }

    /// The raw response value this field was read from, if it was present.
    pub fn raw(&self) -> Option<&'data JsonValue> {
        match *self {
            Self::Absent => None,
            Self::Nested(nested) => Some(nested.raw()),
            Self::Raw(raw) => Some(raw),
        }
    }

    /// Every child view beneath this value in response order, descending
    /// through nested sequences and skipping non-mapping elements.
    pub fn views(&self) -> std::vec::IntoIter<&'view View<'schema, 'data>> {
        let mut views = vec![];
        if let Self::Nested(nested) = *self {
            nested.collect_views(&mut views);
        }
        views.into_iter()
    }
}

/// A raw mapping or sequence materialized against a nested
/// [`FieldSchema`](crate::schema::FieldSchema).
#[derive(Clone, Debug)]
pub enum NestedView<'schema, 'data> {
    List {
        items: Vec<NestedView<'schema, 'data>>,
        raw: &'data JsonValue,
    },
    Object(View<'schema, 'data>),
    /// A sequence element that is not itself a mapping or sequence (e.g. a
    /// `null` entry in a list of nullable objects).
    Raw(&'data JsonValue),
}
impl<'schema, 'data> NestedView<'schema, 'data> {
    pub fn as_view(&self) -> Option<&View<'schema, 'data>> {
        if let Self::Object(view) = self {
            Some(view)
        } else {
            None
        }
    }

    fn collect_views<'view>(&'view self, views: &mut Vec<&'view View<'schema, 'data>>) {
        match self {
            Self::List { items, .. } => for item in items {
                item.collect_views(views);
            },
            Self::Object(view) => views.push(view),
            Self::Raw(_) => (),
        }
    }

    pub(super) fn materialize(
        schema: &'schema crate::schema::FieldSchema<'schema>,
        raw: &'data JsonValue,
    ) -> Self {
        match raw {
            JsonValue::Array(items) => Self::List {
                items: items.iter()
                    .map(|item| Self::materialize(schema, item))
                    .collect(),
                raw,
            },
            JsonValue::Object(_) => Self::Object(View::new(schema, raw)),
            _ => Self::Raw(raw),
        }
    }

    pub fn raw(&self) -> &'data JsonValue {
        match self {
            Self::List { raw, .. } => *raw,
            Self::Object(view) => view.data(),
            Self::Raw(raw) => *raw,
        }
    }
}
