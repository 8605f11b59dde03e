//! Shared building blocks for list-backed resources.

pub mod fields;
pub mod presentation;
pub mod resource;

pub(crate) use fields::editable_record;
pub use fields::{lenient_string, value_text};
pub use presentation::{format_date, Column, ColumnKind, FilterSpec};
pub use resource::Resource;
