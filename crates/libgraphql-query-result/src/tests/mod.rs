#[cfg(feature = "macros")]
mod macros;
