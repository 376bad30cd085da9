use crate::JsonValue;
use crate::view::FieldValue;
use crate::view::View;
use crate::view::ViewError;

type Result<T> = std::result::Result<T, ViewError>;

/// Runtime-checked access to response data through a
/// [`FieldSchema`](crate::schema::FieldSchema).
///
/// Implemented by [`View`] itself and by every struct generated with
/// `graphql_view!`, so code that only knows accessor names at runtime can
/// read either.
pub trait ResultView<'schema, 'data> {
    fn as_view(&self) -> &View<'schema, 'data>;

    /// The raw response value this view wraps.
    fn data(&self) -> &'data JsonValue;

    /// Read the field selected under `accessor_name`.
    ///
    /// Fails with [`ViewError::UnknownField`] if the schema has no such
    /// field.
    fn get(&self, accessor_name: &str) -> Result<FieldValue<'_, 'schema, 'data>>;

    /// Whether the field selected under `accessor_name` is present in the
    /// response and is neither `null` nor `false`.
    ///
    /// Fails with [`ViewError::UnknownField`] if the schema has no such
    /// field.
    fn has(&self, accessor_name: &str) -> Result<bool>;

    fn supports(&self, accessor_name: &str) -> bool;

    fn type_name(&self) -> &str;
}
