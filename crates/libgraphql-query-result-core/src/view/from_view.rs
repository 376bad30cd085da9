use crate::view::View;

/// Conversion from a borrowed [`View`] into a typed wrapper around it.
pub trait FromView<'view, 'schema, 'data>: Sized {
    fn from_view(view: &'view View<'schema, 'data>) -> Self;
}

impl<'view, 'schema, 'data> FromView<'view, 'schema, 'data> for &'view View<'schema, 'data> {
    fn from_view(view: &'view View<'schema, 'data>) -> Self {
        view
    }
}
