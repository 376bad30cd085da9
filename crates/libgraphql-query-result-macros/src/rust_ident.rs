use heck::ToUpperCamelCase;
use proc_macro2::Ident;
use proc_macro2::Span;

/// Keywords that may still be used as identifiers when written raw
/// (`r#type`).
const RAW_ELIGIBLE_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const",
    "continue", "do", "dyn", "else", "enum", "extern", "false", "final", "fn",
    "for", "gen", "if", "impl", "in", "let", "loop", "macro", "match", "mod",
    "move", "mut", "override", "priv", "pub", "ref", "return", "static",
    "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized",
    "use", "virtual", "where", "while", "yield",
];

/// Keywords that cannot be written raw.
const NON_RAW_KEYWORDS: &[&str] = &["_", "crate", "self", "Self", "super"];

/// The method name generated for an accessor. Keywords become raw
/// identifiers, or gain a trailing `_` where Rust forbids the raw form.
pub(crate) fn method_ident(name: &str) -> Ident {
    if NON_RAW_KEYWORDS.contains(&name) {
        Ident::new(&format!("{name}_"), Span::call_site())
    } else if RAW_ELIGIBLE_KEYWORDS.contains(&name) {
        Ident::new_raw(name, Span::call_site())
    } else {
        Ident::new(name, Span::call_site())
    }
}

/// The presence predicate generated for an accessor.
pub(crate) fn predicate_ident(accessor_name: &str) -> Ident {
    Ident::new(&format!("has_{accessor_name}"), Span::call_site())
}

/// The struct generated for the sub-selection of `accessor_name` beneath
/// the struct `parent`: `RepositoryQuery` + `pull_requests` ->
/// `RepositoryQueryPullRequests`.
pub(crate) fn nested_struct_ident(parent: &Ident, accessor_name: &str) -> Ident {
    let parent = parent.to_string();
    let parent = parent.trim_start_matches("r#");

    let mut suffix = accessor_name.to_upper_camel_case();
    if suffix.is_empty() {
        suffix.push_str("Field");
    }

    Ident::new(&format!("{parent}{suffix}"), Span::call_site())
}

/// The name a generated identifier is declared under, without any `r#`
/// prefix.
pub(crate) fn unraw(ident: &Ident) -> String {
    ident.to_string().trim_start_matches("r#").to_string()
}
