//! Page category constants.
//!
//! Every page rendered in the content area declares:
//!   - HTML `id` in the format `{resource}--{category}` (e.g. `"customers--list"`)
//!   - `data-page-category` with one of the constants below

/// List of records: table with filters and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Master data maintained locally in the browser.
pub const PAGE_CAT_MASTER_DATA: &str = "master-data";

/// Validate that a page id matches the `{resource}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_ids_need_both_halves() {
        assert!(is_valid_page_id("customers--list"));
        assert!(!is_valid_page_id("customers"));
        assert!(!is_valid_page_id("--list"));
    }
}
