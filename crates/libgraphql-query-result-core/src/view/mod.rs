mod field_value;
mod from_view;
mod nodes;
mod result_view;
mod typed;
#[allow(clippy::module_inception)]
mod view;
mod view_error;

pub use field_value::FieldValue;
pub use field_value::NestedView;
pub use from_view::FromView;
pub use nodes::Nodes;
pub use result_view::ResultView;
pub use typed::Typed;
pub use view::View;
pub use view_error::ViewError;
