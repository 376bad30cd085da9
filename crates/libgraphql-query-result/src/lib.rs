pub use libgraphql_query_result_core::*;

/// Helpful macros for reading GraphQL response data with Rust compile-time
/// checking (e.g. Generate typed accessors for the fields of a GraphQL
/// operation or fragment).
#[cfg(feature = "macros")]
pub mod macros {
    pub use libgraphql_query_result_macros::*;
}

#[cfg(test)]
mod tests;
