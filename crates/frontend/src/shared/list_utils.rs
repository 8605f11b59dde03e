//! Small helpers shared by list pages: sort indicators and filter chips.

use contracts::domain::common::FilterSpec;
use contracts::shared::list::{ListQuery, SortField, SortOrder};

/// Sort indicator for a column header
pub fn get_sort_indicator<F: SortField>(current: F, column: F, order: SortOrder) -> &'static str {
    if current == column {
        match order {
            SortOrder::Ascending => " ▲",
            SortOrder::Descending => " ▼",
        }
    } else {
        " ⇅"
    }
}

/// CSS class for the sort indicator
pub fn get_sort_class<F: SortField>(current: F, column: F) -> &'static str {
    if current == column {
        "table__sort-icon table__sort-icon--active"
    } else {
        "table__sort-icon"
    }
}

/// One removable chip per active criterion: `(key, label)`.
/// The search text uses the key `"search"`.
pub fn criteria_chips<F: SortField>(
    query: &ListQuery<F>,
    filters: &[FilterSpec],
) -> Vec<(String, String)> {
    let mut chips = Vec::new();
    let search = query.search_text.trim();
    if !search.is_empty() {
        chips.push(("search".to_string(), format!("Search: {}", search)));
    }
    for (key, value) in query.active_filters() {
        let label = filters
            .iter()
            .find(|spec| spec.key == key)
            .map(|spec| spec.label)
            .unwrap_or(key);
        chips.push((key.to_string(), format!("{}: {}", label, value)));
    }
    chips
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::vendor::{Vendor, VendorSortField};
    use contracts::domain::common::Resource;

    #[test]
    fn indicator_marks_only_the_active_column() {
        let active = get_sort_indicator(VendorSortField::Name, VendorSortField::Name, SortOrder::Descending);
        let idle = get_sort_indicator(VendorSortField::Name, VendorSortField::Country, SortOrder::Descending);
        assert_eq!(active, " ▼");
        assert_eq!(idle, " ⇅");
    }

    #[test]
    fn chips_use_filter_labels() {
        let mut query = ListQuery::<VendorSortField>::new(50, SortOrder::Ascending);
        query.search_text = "maersk".into();
        query.filters.insert("vendor_type".into(), "Shipping Line".into());
        query.filters.insert("country".into(), "".into());

        let chips = criteria_chips(&query, Vendor::FILTERS);
        assert_eq!(
            chips,
            vec![
                ("search".to_string(), "Search: maersk".to_string()),
                ("vendor_type".to_string(), "Type: Shipping Line".to_string()),
            ]
        );
    }
}
