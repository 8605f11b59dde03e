//! Client-side sort and page-window derivation over a full result set.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use super::query::{ListQuery, PageSize, SortField, SortOrder};
use super::result::ListResult;
use crate::domain::common::Resource;

/// Comparable projection of one record field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortValue {
    Text(String),
    Date(Option<NaiveDateTime>),
}

impl SortValue {
    pub fn date(raw: &str) -> Self {
        Self::Date(parse_datetime(raw))
    }

    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => compare_text(a, b),
            // unparsable dates (None) sort before any real date
            (Self::Date(a), Self::Date(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

/// Case-insensitive comparison; on a case-only difference the lowercase
/// form comes first.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| b.cmp(a))
}

/// Accepts RFC 3339 timestamps, naive ISO date-times and plain dates.
pub fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }
    for format in ["%Y-%m-%d", "%d/%m/%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }
    None
}

/// Stable sort of references; equal keys keep their incoming order in
/// both directions.
pub fn sort_records<R: Resource>(
    records: &[R],
    field: R::SortField,
    order: SortOrder,
) -> Vec<&R> {
    let keys: Vec<SortValue> = records.iter().map(|r| r.sort_value(field)).collect();
    let mut indices: Vec<usize> = (0..records.len()).collect();
    indices.sort_by(|&a, &b| {
        let ordering = keys[a].compare(&keys[b]);
        match order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
    indices.into_iter().map(|i| &records[i]).collect()
}

/// Sorts the full set by the query's sort and cuts out the requested page.
/// Pages past the end come back empty with the true totals.
pub fn derive_page<R: Resource>(
    records: &[R],
    query: &ListQuery<R::SortField>,
) -> ListResult<R, R::SortField> {
    let sorted = sort_records(records, query.sort_field, query.sort_order);
    let total = sorted.len() as u64;

    let (page, items) = match query.page_size {
        PageSize::All => (1, sorted.into_iter().cloned().collect()),
        PageSize::Count(size) => {
            let page = query.page.max(1);
            let size = size.max(1) as usize;
            let start = (page as usize - 1).saturating_mul(size);
            let items = sorted.into_iter().skip(start).take(size).cloned().collect();
            (page, items)
        }
    };

    let page_size = match query.page_size {
        PageSize::Count(size) => PageSize::Count(size.max(1)),
        PageSize::All => PageSize::All,
    };
    log::debug!(
        "derived page {} of {} local {} records sorted by {} {}",
        page,
        total,
        R::PATH,
        query.sort_field.as_str(),
        query.sort_order.as_str()
    );
    ListResult::from_window(items, total, page, page_size, query.sort_field, query.sort_order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::supplier::{Supplier, SupplierSortField};

    fn supplier(id: usize, name: &str, created_at: &str) -> Supplier {
        Supplier {
            id: id.to_string(),
            name: name.to_string(),
            created_at: created_at.to_string(),
            ..Supplier::default()
        }
    }

    fn numbered(count: usize) -> Vec<Supplier> {
        // inserted in reverse so sorting has work to do
        (1..=count)
            .rev()
            .map(|i| supplier(i, &format!("Supplier {i:02}"), ""))
            .collect()
    }

    fn query(page: u32, size: PageSize, order: SortOrder) -> ListQuery<SupplierSortField> {
        ListQuery {
            page,
            page_size: size,
            sort_order: order,
            ..ListQuery::new(80, SortOrder::Ascending)
        }
    }

    #[test]
    fn second_page_of_twenty_five_by_name() {
        let records = numbered(25);
        let result = derive_page(&records, &query(2, PageSize::Count(10), SortOrder::Ascending));

        let names: Vec<&str> = result.items.iter().map(|s| s.name.as_str()).collect();
        let expected: Vec<String> = (11..=20).map(|i| format!("Supplier {i:02}")).collect();
        assert_eq!(names, expected);
        assert_eq!(result.total_count, 25);
        assert_eq!(result.total_pages, 3);
        assert!(result.has_next);
        assert!(result.has_previous);
    }

    #[test]
    fn page_length_matches_remaining_records() {
        for total in [0usize, 1, 7, 10, 23] {
            let records = numbered(total);
            for size in 1..=12u32 {
                for page in 1..=8u32 {
                    let result =
                        derive_page(&records, &query(page, PageSize::Count(size), SortOrder::Ascending));
                    let skipped = (page as usize - 1) * size as usize;
                    let expected = (size as usize).min(total.saturating_sub(skipped));
                    assert_eq!(result.items.len(), expected, "total={total} size={size} page={page}");
                    assert_eq!(result.has_next, page < result.total_pages);
                    assert_eq!(result.has_previous, page > 1);
                }
            }
        }
    }

    #[test]
    fn reversing_twice_restores_the_original_order() {
        let mut records = numbered(6);
        // ties on name must keep their relative order
        records.push(supplier(99, "Supplier 03", ""));
        let all = |order| query(1, PageSize::All, order);

        let first = derive_page(&records, &all(SortOrder::Ascending));
        let flipped = derive_page(&first.items, &all(SortOrder::Descending));
        let again = derive_page(&flipped.items, &all(SortOrder::Ascending));
        assert_eq!(first.items, again.items);
        assert_ne!(first.items, flipped.items);
    }

    #[test]
    fn text_comparison_ignores_case() {
        let records = vec![
            supplier(1, "bravo", ""),
            supplier(2, "Alpha", ""),
            supplier(3, "charlie", ""),
        ];
        let result = derive_page(&records, &query(1, PageSize::All, SortOrder::Ascending));
        let ids: Vec<&str> = result.items.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["2", "1", "3"]);
        assert_eq!(compare_text("a", "A"), Ordering::Less);
    }

    #[test]
    fn date_fields_sort_chronologically() {
        let records = vec![
            supplier(1, "a", "2024-03-15T09:00:00Z"),
            supplier(2, "b", "2023-12-01"),
            supplier(3, "c", "not a date"),
            supplier(4, "d", "2024-03-15 08:00:00"),
        ];
        let mut q = query(1, PageSize::All, SortOrder::Ascending);
        q.sort_field = SupplierSortField::CreatedAt;
        let ids: Vec<String> = derive_page(&records, &q)
            .items
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, ["3", "2", "4", "1"]);
    }

    #[test]
    fn page_past_the_end_is_empty_but_keeps_totals() {
        let records = numbered(5);
        let result = derive_page(&records, &query(4, PageSize::Count(2), SortOrder::Ascending));
        assert!(result.items.is_empty());
        assert_eq!(result.total_count, 5);
        assert_eq!(result.total_pages, 3);
        assert!(!result.has_next);
    }

    #[test]
    fn parses_common_date_shapes() {
        assert!(parse_datetime("2024-03-15T14:02:26.123Z").is_some());
        assert!(parse_datetime("2024-03-15T14:02:26").is_some());
        assert!(parse_datetime("15/03/2024").is_some());
        assert!(parse_datetime("").is_none());
        assert!(parse_datetime("soon").is_none());
    }
}
