use crate::view::FieldValue;
use crate::view::NestedView;

/// The `node` of every edge of a Relay connection, in edge order.
///
/// Derived on demand from the connection view's cached `edges`; cloning a
/// `Nodes` restarts iteration from its current position without touching the
/// response data again.
#[derive(Clone, Debug)]
pub struct Nodes<'view, 'schema, 'data> {
    edges: std::slice::Iter<'view, NestedView<'schema, 'data>>,
    node_index: usize,
}
impl<'view, 'schema, 'data> Nodes<'view, 'schema, 'data> {
    pub(super) fn new(
        edges: &'view [NestedView<'schema, 'data>],
        node_index: usize,
    ) -> Self {
        Self {
            edges: edges.iter(),
            node_index,
        }
    }
}

impl<'view, 'schema, 'data> Iterator for Nodes<'view, 'schema, 'data> {
    type Item = FieldValue<'view, 'schema, 'data>;

    fn next(&mut self) -> Option<Self::Item> {
        let edge = self.edges.next()?;
        Some(match edge {
            NestedView::Object(edge_view) => edge_view.field_at(self.node_index),
            NestedView::List { .. } => FieldValue::Nested(edge),
            NestedView::Raw(raw) => FieldValue::Raw(*raw),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.edges.size_hint()
    }
}

impl ExactSizeIterator for Nodes<'_, '_, '_> {}
