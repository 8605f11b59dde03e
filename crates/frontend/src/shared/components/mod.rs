pub mod filter_panel;
pub mod list_table;
pub mod page_header;
pub mod pagination_controls;
pub mod record_form;
pub mod ui;

pub use filter_panel::{FilterPanel, FilterTag};
pub use list_table::ListTable;
pub use page_header::PageHeader;
pub use pagination_controls::PaginationControls;
pub use record_form::RecordForm;
