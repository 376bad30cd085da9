use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ViewError {
    /// An accessor was read that the view's schema does not select. This is
    /// always a programming error: either the caller or the selection it
    /// reads through has drifted.
    #[error("Undefined field `{accessor_name}` for {rendered_view}")]
    UnknownField {
        accessor_name: String,
        /// The view rendered with its type name and every raw key/value pair
        /// it currently holds.
        rendered_view: String,
        type_name: String,
    },
}
