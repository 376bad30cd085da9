use crate::ast;

/// The AST node a [`FieldSchema`](crate::schema::FieldSchema) was built from.
///
/// Held for introspection only: it never takes part in schema equality and
/// nothing in this crate mutates it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SourceNode<'ast> {
    Field(&'ast ast::Field),
    FragmentDefinition(&'ast ast::FragmentDefinition),
    InlineFragment(&'ast ast::InlineFragment),
    OperationDefinition(&'ast ast::OperationDefinition),
    SelectionSet(&'ast ast::SelectionSet),
}
impl<'ast> SourceNode<'ast> {
    pub fn as_field(&self) -> Option<&'ast ast::Field> {
        if let Self::Field(field) = *self {
            Some(field)
        } else {
            None
        }
    }

    pub fn as_fragment_definition(&self) -> Option<&'ast ast::FragmentDefinition> {
        if let Self::FragmentDefinition(fragment) = *self {
            Some(fragment)
        } else {
            None
        }
    }

    pub fn as_inline_fragment(&self) -> Option<&'ast ast::InlineFragment> {
        if let Self::InlineFragment(inline_fragment) = *self {
            Some(inline_fragment)
        } else {
            None
        }
    }

    pub fn as_operation_definition(&self) -> Option<&'ast ast::OperationDefinition> {
        if let Self::OperationDefinition(operation) = *self {
            Some(operation)
        } else {
            None
        }
    }

    pub fn position(&self) -> ast::AstPos {
        match *self {
            Self::Field(field) => field.position,
            Self::FragmentDefinition(fragment) => fragment.position,
            Self::InlineFragment(inline_fragment) => inline_fragment.position,
            Self::OperationDefinition(operation) => match operation {
                ast::OperationDefinition::SelectionSet(selection_set) =>
                    selection_set.span.0,
                ast::OperationDefinition::Query(query) => query.position,
                ast::OperationDefinition::Mutation(mutation) => mutation.position,
                ast::OperationDefinition::Subscription(subscription) =>
                    subscription.position,
            },
            Self::SelectionSet(selection_set) => selection_set.span.0,
        }
    }

    /// The selections directly beneath this node.
    pub fn selection_set(&self) -> &'ast ast::SelectionSet {
        match *self {
            Self::Field(field) => &field.selection_set,
            Self::FragmentDefinition(fragment) => &fragment.selection_set,
            Self::InlineFragment(inline_fragment) => &inline_fragment.selection_set,
            Self::OperationDefinition(operation) => match operation {
                ast::OperationDefinition::SelectionSet(selection_set) => selection_set,
                ast::OperationDefinition::Query(query) => &query.selection_set,
                ast::OperationDefinition::Mutation(mutation) => &mutation.selection_set,
                ast::OperationDefinition::Subscription(subscription) =>
                    &subscription.selection_set,
            },
            Self::SelectionSet(selection_set) => selection_set,
        }
    }

    /**
     * A logical type name synthesized from this node: the operation's name
     * (or its kind when anonymous), the fragment's name, the field's response
     * key, or the inline fragment's type condition.
     */
    pub fn type_name(&self) -> String {
        match *self {
            Self::Field(field) =>
                field.alias.as_deref().unwrap_or(field.name.as_str()).to_string(),

            Self::FragmentDefinition(fragment) => fragment.name.to_string(),

            Self::InlineFragment(inline_fragment) =>
                match &inline_fragment.type_condition {
                    Some(ast::TypeCondition::On(type_name)) => type_name.to_string(),
                    None => "InlineFragment".to_string(),
                },

            Self::OperationDefinition(operation) => match operation {
                ast::OperationDefinition::SelectionSet(_) => "Query".to_string(),
                ast::OperationDefinition::Query(query) =>
                    query.name.as_deref().unwrap_or("Query").to_string(),
                ast::OperationDefinition::Mutation(mutation) =>
                    mutation.name.as_deref().unwrap_or("Mutation").to_string(),
                ast::OperationDefinition::Subscription(subscription) =>
                    subscription.name.as_deref().unwrap_or("Subscription").to_string(),
            },

            Self::SelectionSet(_) => "SelectionSet".to_string(),
        }
    }
}

impl<'ast> std::convert::From<&'ast ast::Field> for SourceNode<'ast> {
    fn from(value: &'ast ast::Field) -> Self {
        Self::Field(value)
    }
}
impl<'ast> std::convert::From<&'ast ast::FragmentDefinition> for SourceNode<'ast> {
    fn from(value: &'ast ast::FragmentDefinition) -> Self {
        Self::FragmentDefinition(value)
    }
}
impl<'ast> std::convert::From<&'ast ast::InlineFragment> for SourceNode<'ast> {
    fn from(value: &'ast ast::InlineFragment) -> Self {
        Self::InlineFragment(value)
    }
}
impl<'ast> std::convert::From<&'ast ast::OperationDefinition> for SourceNode<'ast> {
    fn from(value: &'ast ast::OperationDefinition) -> Self {
        Self::OperationDefinition(value)
    }
}
impl<'ast> std::convert::From<&'ast ast::SelectionSet> for SourceNode<'ast> {
    fn from(value: &'ast ast::SelectionSet) -> Self {
        Self::SelectionSet(value)
    }
}
