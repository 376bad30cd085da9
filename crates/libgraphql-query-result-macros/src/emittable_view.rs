use crate::graphql_view_input::GraphQLViewInput;
use crate::rust_ident;
use libgraphql_query_result_core::FieldSchema;
use proc_macro2::Ident;
use proc_macro2::Span;
use proc_macro2::TokenStream;
use quote::quote;
use std::collections::HashMap;
use std::collections::HashSet;

/// The structs generated for one `graphql_view!` invocation: the root struct
/// named by the invocation plus one struct per nested sub-selection.
pub(crate) struct EmittableView<'ast> {
    input: GraphQLViewInput,
    schema: FieldSchema<'ast>,
}
impl<'ast> EmittableView<'ast> {
    pub fn new(input: GraphQLViewInput, schema: FieldSchema<'ast>) -> Self {
        Self {
            input,
            schema,
        }
    }

    pub fn emit(&self) -> syn::Result<TokenStream> {
        let mut structs = vec![self.emit_root()?];
        let mut struct_paths = HashMap::from([
            (self.input.ident.to_string(), self.schema.name().to_string()),
        ]);
        self.emit_nested_structs(
            &self.input.ident,
            &self.schema,
            &mut structs,
            &mut struct_paths,
        )?;
        Ok(quote! { #(#structs)* })
    }

    fn emit_root(&self) -> syn::Result<TokenStream> {
        let GraphQLViewInput {
            attrs,
            ident,
            source,
            vis,
        } = &self.input;
        let name = ident.to_string();

        let methods = emit_methods(
            ident,
            &self.schema,
            MethodShape {
                generics: quote! { <'v> },
                receiver: quote! { &'v self },
                reserved: &["new", "schema"],
            },
        )?;
        let result_view_impl = emit_result_view_impl(
            quote! { <'data> },
            quote! { #ident<'data> },
            quote! { &self.view },
        );

        Ok(quote! {
            #(#attrs)*
            #[derive(Clone, Debug)]
            #vis struct #ident<'data> {
                view: libgraphql_query_result::View<'static, 'data>,
            }
            #[allow(dead_code)]
            impl<'data> #ident<'data> {
                pub fn new(data: &'data libgraphql_query_result::JsonValue) -> Self {
                    Self {
                        view: libgraphql_query_result::View::new(Self::schema(), data),
                    }
                }

                pub fn schema() -> &'static libgraphql_query_result::FieldSchema<'static> {
                    static DOCUMENT: ::std::sync::OnceLock<
                        libgraphql_query_result::ast::Document,
                    > = ::std::sync::OnceLock::new();
                    static SCHEMA: ::std::sync::OnceLock<
                        libgraphql_query_result::FieldSchema<'static>,
                    > = ::std::sync::OnceLock::new();

                    SCHEMA.get_or_init(|| {
                        let document = DOCUMENT.get_or_init(|| {
                            libgraphql_query_result::_macro_runtime::parse_macro_document(#source)
                        });
                        libgraphql_query_result::_macro_runtime::build_from_macro_document(
                            document,
                            #name,
                        )
                    })
                }

                #methods
            }
            #result_view_impl
        })
    }

    fn emit_nested_structs(
        &self,
        parent: &Ident,
        schema: &FieldSchema<'ast>,
        structs: &mut Vec<TokenStream>,
        struct_paths: &mut HashMap<String, String>,
    ) -> syn::Result<()> {
        let vis = &self.input.vis;
        for (accessor_name, field_def) in schema.fields() {
            let Some(nested_schema) = field_def.nested_schema() else {
                continue;
            };

            let ident = rust_ident::nested_struct_ident(parent, accessor_name);
            let struct_name = rust_ident::unraw(&ident);
            if let Some(existing_path) =
                struct_paths.insert(struct_name.clone(), nested_schema.name().to_string())
            {
                return Err(syn::Error::new(
                    Span::call_site(),
                    format!(
                        "The selections `{existing_path}` and `{}` would both \
                        generate the struct `{struct_name}`. Alias one of them \
                        to disambiguate.",
                        nested_schema.name(),
                    ),
                ));
            }

            let methods = emit_methods(
                &ident,
                nested_schema,
                MethodShape {
                    generics: quote! {},
                    receiver: quote! { &self },
                    reserved: &[],
                },
            )?;
            let result_view_impl = emit_result_view_impl(
                quote! { <'v, 'data> },
                quote! { #ident<'v, 'data> },
                quote! { self.view },
            );

            structs.push(quote! {
                #[derive(Clone, Copy, Debug)]
                #vis struct #ident<'v, 'data> {
                    view: &'v libgraphql_query_result::View<'static, 'data>,
                }
                #[allow(dead_code)]
                impl<'v, 'data> #ident<'v, 'data> {
                    #methods
                }
                impl<'v, 'data> libgraphql_query_result::FromView<'v, 'static, 'data>
                    for #ident<'v, 'data>
                {
                    fn from_view(view: &'v libgraphql_query_result::View<'static, 'data>) -> Self {
                        Self { view }
                    }
                }
                #result_view_impl
            });

            self.emit_nested_structs(&ident, nested_schema, structs, struct_paths)?;
        }

        Ok(())
    }
}

/// How the accessor methods of one generated struct borrow their view. Root
/// structs own their view and tie results to `&'v self`; nested structs
/// already hold a `&'v View`.
struct MethodShape<'a> {
    generics: TokenStream,
    receiver: TokenStream,
    reserved: &'a [&'a str],
}

fn emit_methods(
    ident: &Ident,
    schema: &FieldSchema<'_>,
    shape: MethodShape<'_>,
) -> syn::Result<TokenStream> {
    let MethodShape {
        generics,
        receiver,
        reserved,
    } = shape;

    let mut method_names: HashSet<String> =
        reserved.iter().map(|name| name.to_string()).collect();
    let mut claim = |method: &Ident| -> syn::Result<()> {
        let method_name = rust_ident::unraw(method);
        if method_names.insert(method_name.clone()) {
            return Ok(());
        }
        Err(syn::Error::new(
            Span::call_site(),
            format!(
                "The selections of `{ident}` would generate the method \
                `{method_name}` more than once",
            ),
        ))
    };

    let mut methods = vec![];
    for (index, (accessor_name, field_def)) in schema.fields().iter().enumerate() {
        let accessor = rust_ident::method_ident(accessor_name);
        let predicate = rust_ident::predicate_ident(accessor_name);
        claim(&accessor)?;
        claim(&predicate)?;

        let accessor_method = match field_def.nested_schema() {
            Some(_) => {
                let child = rust_ident::nested_struct_ident(ident, accessor_name);
                quote! {
                    pub fn #accessor #generics(#receiver) -> libgraphql_query_result::Typed<
                        'v,
                        'static,
                        'data,
                        #child<'v, 'data>,
                    > {
                        libgraphql_query_result::Typed::new(self.view.field_at(#index))
                    }
                }
            },

            None => quote! {
                pub fn #accessor #generics(
                    #receiver,
                ) -> libgraphql_query_result::FieldValue<'v, 'static, 'data> {
                    self.view.field_at(#index)
                }
            },
        };

        methods.push(quote! {
            #accessor_method

            pub fn #predicate #generics(#receiver) -> bool {
                self.view.has_at(#index)
            }
        });
    }

    if let Some(nodes_method) = emit_nodes_method(ident, schema, &generics, &receiver) {
        claim(&Ident::new("nodes", Span::call_site()))?;
        methods.push(nodes_method);
    }

    Ok(quote! { #(#methods)* })
}

/// A typed `nodes()` for schemas shaped like a Relay connection.
fn emit_nodes_method(
    ident: &Ident,
    schema: &FieldSchema<'_>,
    generics: &TokenStream,
    receiver: &TokenStream,
) -> Option<TokenStream> {
    if !schema.is_connection() {
        return None;
    }

    let node_def =
        schema.field("edges")?
            .nested_schema()?
            .field("node")?;

    Some(match node_def.nested_schema() {
        Some(_) => {
            let edges_ident = rust_ident::nested_struct_ident(ident, "edges");
            let node_ident = rust_ident::nested_struct_ident(&edges_ident, "node");
            quote! {
                /// The `node` of every edge, in edge order.
                pub fn nodes #generics(#receiver) -> impl ::std::iter::Iterator<
                    Item = libgraphql_query_result::Typed<
                        'v,
                        'static,
                        'data,
                        #node_ident<'v, 'data>,
                    >,
                > + use<'v, 'data> {
                    self.view.nodes()
                        .into_iter()
                        .flatten()
                        .map(libgraphql_query_result::Typed::new)
                }
            }
        },

        None => quote! {
            /// The `node` of every edge, in edge order.
            pub fn nodes #generics(#receiver) -> impl ::std::iter::Iterator<
                Item = libgraphql_query_result::FieldValue<'v, 'static, 'data>,
            > + use<'v, 'data> {
                self.view.nodes()
                    .into_iter()
                    .flatten()
            }
        },
    })
}

fn emit_result_view_impl(
    impl_generics: TokenStream,
    self_ty: TokenStream,
    view_ref: TokenStream,
) -> TokenStream {
    quote! {
        impl #impl_generics libgraphql_query_result::ResultView<'static, 'data> for #self_ty {
            fn as_view(&self) -> &libgraphql_query_result::View<'static, 'data> {
                #view_ref
            }

            fn data(&self) -> &'data libgraphql_query_result::JsonValue {
                self.view.data()
            }

            fn get(
                &self,
                accessor_name: &str,
            ) -> ::std::result::Result<
                libgraphql_query_result::FieldValue<'_, 'static, 'data>,
                libgraphql_query_result::ViewError,
            > {
                self.view.get(accessor_name)
            }

            fn has(
                &self,
                accessor_name: &str,
            ) -> ::std::result::Result<bool, libgraphql_query_result::ViewError> {
                self.view.has(accessor_name)
            }

            fn supports(&self, accessor_name: &str) -> bool {
                self.view.supports(accessor_name)
            }

            fn type_name(&self) -> &str {
                self.view.type_name()
            }
        }

        impl #impl_generics ::std::fmt::Display for #self_ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(#view_ref, f)
            }
        }
    }
}
