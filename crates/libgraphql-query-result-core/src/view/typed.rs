use crate::view::FieldValue;
use crate::view::FromView;
use std::marker::PhantomData;

/// A [`FieldValue`] for a field with sub-selections, projected onto the
/// wrapper type `T` generated for that sub-selection.
pub struct Typed<'view, 'schema, 'data, T> {
    marker: PhantomData<fn() -> T>,
    value: FieldValue<'view, 'schema, 'data>,
}
impl<'view, 'schema, 'data, T> Typed<'view, 'schema, 'data, T> {
    pub fn is_absent(&self) -> bool {
        self.value.is_absent()
    }

    pub fn is_null(&self) -> bool {
        self.value.is_null()
    }

    pub fn new(value: FieldValue<'view, 'schema, 'data>) -> Self {
        Self {
            marker: PhantomData,
            value,
        }
    }

    pub fn value(&self) -> FieldValue<'view, 'schema, 'data> {
        self.value
    }
}
impl<'view, 'schema, 'data, T: FromView<'view, 'schema, 'data>> Typed<'view, 'schema, 'data, T> {
    /// The wrapped child view, if the raw value was a single mapping.
    pub fn object(&self) -> Option<T> {
        self.value.as_view().map(T::from_view)
    }

    /// Every wrapped child view in response order (see
    /// [`FieldValue::views()`]).
    pub fn objects(&self) -> impl Iterator<Item = T> + use<'view, 'schema, 'data, T> {
        self.value.views().map(T::from_view)
    }
}

impl<T> Clone for Typed<'_, '_, '_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for Typed<'_, '_, '_, T> {}

impl<T> std::fmt::Debug for Typed<'_, '_, '_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Typed").field(&self.value).finish()
    }
}
