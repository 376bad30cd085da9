pub use graphql_parser::query::ParseError;
pub use graphql_parser::Pos as AstPos;

pub type Definition = graphql_parser::query::Definition<'static, String>;
pub type Document = graphql_parser::query::Document<'static, String>;
pub type Field = graphql_parser::query::Field<'static, String>;
pub type FragmentDefinition = graphql_parser::query::FragmentDefinition<'static, String>;
pub type FragmentSpread = graphql_parser::query::FragmentSpread<'static, String>;
pub type InlineFragment = graphql_parser::query::InlineFragment<'static, String>;
pub type Mutation = graphql_parser::query::Mutation<'static, String>;
pub type OperationDefinition = graphql_parser::query::OperationDefinition<'static, String>;
pub type Query = graphql_parser::query::Query<'static, String>;
pub type Selection = graphql_parser::query::Selection<'static, String>;
pub type SelectionSet = graphql_parser::query::SelectionSet<'static, String>;
pub type Subscription = graphql_parser::query::Subscription<'static, String>;
pub type TypeCondition = graphql_parser::query::TypeCondition<'static, String>;

/// Parse an executable GraphQL document (operations and fragments) into an
/// owned AST.
pub fn parse(source: &str) -> Result<Document, ParseError> {
    Ok(graphql_parser::parse_query::<String>(source)?.into_static())
}
