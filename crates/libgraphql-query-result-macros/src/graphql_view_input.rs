use syn::Attribute;
use syn::Ident;
use syn::LitStr;
use syn::Token;
use syn::Visibility;
use syn::parse::Parse;
use syn::parse::ParseStream;

/// `#[attrs] vis struct Name = "<graphql document>";`
pub(crate) struct GraphQLViewInput {
    pub attrs: Vec<Attribute>,
    pub ident: Ident,
    pub source: LitStr,
    pub vis: Visibility,
}

impl Parse for GraphQLViewInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let vis: Visibility = input.parse()?;
        input.parse::<Token![struct]>()?;
        let ident: Ident = input.parse()?;
        input.parse::<Token![=]>()?;
        let source: LitStr = input.parse()?;
        let _: Option<Token![;]> = input.parse()?;

        Ok(Self {
            attrs,
            ident,
            source,
            vis,
        })
    }
}
