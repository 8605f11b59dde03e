use std::collections::BTreeMap;
use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::presentation::{Column, FilterSpec};
use crate::shared::list::{PagingMode, SortField, SortOrder, SortValue};
use crate::shared::record::EditableRecord;

/// A business entity listed, searched and edited through the dashboard.
pub trait Resource:
    EditableRecord
    + Clone
    + Debug
    + Default
    + PartialEq
    + Serialize
    + DeserializeOwned
    + Send
    + Sync
    + 'static
{
    type SortField: SortField;

    /// Singular API path segment: `/api/{PATH}`
    const PATH: &'static str;
    const LABEL: &'static str;
    const PLURAL_LABEL: &'static str;
    const DEFAULT_PAGE_SIZE: u32;
    const DEFAULT_SORT_ORDER: SortOrder = SortOrder::Ascending;
    const PAGING: PagingMode;
    const COLUMNS: &'static [Column<Self::SortField>];
    const FILTERS: &'static [FilterSpec] = &[];
    /// Fields matched by free-text search on local data
    const SEARCH_FIELDS: &'static [&'static str];

    /// Envelope key of the item array, also the local storage suffix.
    fn collection_key() -> String {
        format!("{}s", Self::PATH)
    }

    fn sort_value(&self, field: Self::SortField) -> SortValue {
        let raw = self.field(field.as_str());
        if field.is_date() {
            SortValue::date(&raw)
        } else {
            SortValue::Text(raw)
        }
    }

    /// Case-insensitive substring match over [`Self::SEARCH_FIELDS`].
    fn matches_search(&self, text: &str) -> bool {
        let needle = text.trim().to_lowercase();
        needle.is_empty()
            || Self::SEARCH_FIELDS
                .iter()
                .any(|key| self.field(key).to_lowercase().contains(&needle))
    }

    /// Every non-empty filter must equal the field value, ignoring case.
    fn matches_filters(&self, filters: &BTreeMap<String, String>) -> bool {
        filters
            .iter()
            .map(|(key, value)| (key, value.trim()))
            .filter(|(_, value)| !value.is_empty())
            .all(|(key, value)| self.field(key).trim().to_lowercase() == value.to_lowercase())
    }
}
