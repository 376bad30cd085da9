use heck::ToSnakeCase;

/// Maps a response key (a selection's alias or field name, usually written in
/// lowerCamelCase) to the snake_case name of the accessor that reads it.
///
/// Acronym runs stay together as one word, and any leading underscores (as
/// in `__typename`) are kept:
///
/// ```
/// use libgraphql_query_result_core::to_accessor_name;
///
/// assert_eq!(to_accessor_name("firstName"), "first_name");
/// assert_eq!(to_accessor_name("relayID"), "relay_id");
/// assert_eq!(to_accessor_name("HTTPServer"), "http_server");
/// assert_eq!(to_accessor_name("__typename"), "__typename");
/// ```
pub fn to_accessor_name(raw_key: &str) -> String {
    let words = raw_key.trim_start_matches('_');
    let underscores = &raw_key[..raw_key.len() - words.len()];

    format!("{underscores}{}", words.to_snake_case())
}
