use std::collections::BTreeMap;
use std::fmt;
use std::fmt::Debug;

use serde::{Deserialize, Serialize};

/// Query parameter names owned by the list protocol. Filters may not use them.
const RESERVED_PARAMS: [&str; 5] = ["page", "page_size", "search", "sort_by", "sort_order"];

/// Sortable column of a resource.
pub trait SortField: Copy + Eq + Debug + Default + Send + Sync + 'static {
    /// Wire name, also the record field key the value is read from
    fn as_str(&self) -> &'static str;

    fn parse(value: &str) -> Option<Self>;

    /// Date-like fields compare chronologically instead of as text
    fn is_date(&self) -> bool {
        false
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Some(Self::Ascending),
            "desc" | "descending" => Some(Self::Descending),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageSize {
    Count(u32),
    All,
}

impl PageSize {
    /// Replaces a zero count with the resource default.
    pub fn normalized(self, default: u32) -> Self {
        match self {
            Self::Count(0) => Self::Count(default.max(1)),
            other => other,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("all") {
            return Some(Self::All);
        }
        match value.parse::<i64>() {
            Ok(n) if n > 0 => Some(Self::Count(u32::try_from(n).unwrap_or(u32::MAX))),
            _ => None,
        }
    }

    pub fn limit(&self) -> Option<u32> {
        match self {
            Self::Count(n) => Some(*n),
            Self::All => None,
        }
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{n}"),
            Self::All => f.write_str("all"),
        }
    }
}

/// User-controlled description of which slice and order of a list to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery<F> {
    pub search_text: String,
    pub filters: BTreeMap<String, String>,
    pub sort_field: F,
    pub sort_order: SortOrder,
    pub page: u32,
    pub page_size: PageSize,
}

/// The part of a query that decides which records match.
/// Two queries with equal keys select the same full set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchKey {
    pub search: String,
    pub filters: BTreeMap<String, String>,
}

impl<F: SortField> ListQuery<F> {
    pub fn new(page_size: u32, sort_order: SortOrder) -> Self {
        Self {
            search_text: String::new(),
            filters: BTreeMap::new(),
            sort_field: F::default(),
            sort_order,
            page: 1,
            page_size: PageSize::Count(page_size.max(1)),
        }
    }

    /// Filters with a non-empty value, trimmed.
    pub fn active_filters(&self) -> impl Iterator<Item = (&str, &str)> {
        self.filters
            .iter()
            .map(|(k, v)| (k.as_str(), v.trim()))
            .filter(|(_, v)| !v.is_empty())
    }

    /// Number of active criteria; search text counts as one.
    pub fn active_criteria(&self) -> usize {
        let search = usize::from(!self.search_text.trim().is_empty());
        search + self.active_filters().count()
    }

    pub fn match_key(&self) -> MatchKey {
        MatchKey {
            search: self.search_text.trim().to_string(),
            filters: self
                .active_filters()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Flat string form used to persist the query between visits.
    pub fn to_params(&self) -> BTreeMap<String, String> {
        let mut params = BTreeMap::new();
        for (key, value) in self.active_filters() {
            if !RESERVED_PARAMS.contains(&key) {
                params.insert(key.to_string(), value.to_string());
            }
        }
        params.insert("page".into(), self.page.to_string());
        params.insert("page_size".into(), self.page_size.to_string());
        params.insert("sort_by".into(), self.sort_field.as_str().to_string());
        params.insert("sort_order".into(), self.sort_order.as_str().to_string());
        let search = self.search_text.trim();
        if !search.is_empty() {
            params.insert("search".into(), search.to_string());
        }
        params
    }

    /// Parses a raw intent map, falling back to defaults for anything
    /// missing or out of range.
    pub fn from_params(
        params: &BTreeMap<String, String>,
        default_page_size: u32,
        default_order: SortOrder,
    ) -> Self {
        let mut query = Self::new(default_page_size, default_order);

        if let Some(page) = params.get("page").and_then(|p| p.trim().parse::<i64>().ok()) {
            query.page = u32::try_from(page.max(1)).unwrap_or(u32::MAX);
        }
        if let Some(size) = params.get("page_size").and_then(|s| PageSize::parse(s)) {
            query.page_size = size;
        }
        if let Some(field) = params.get("sort_by").and_then(|s| F::parse(s)) {
            query.sort_field = field;
        }
        if let Some(order) = params.get("sort_order").and_then(|s| SortOrder::parse(s)) {
            query.sort_order = order;
        }
        if let Some(search) = params.get("search") {
            query.search_text = search.trim().to_string();
        }
        query.filters = params
            .iter()
            .filter(|(k, v)| !RESERVED_PARAMS.contains(&k.as_str()) && !v.trim().is_empty())
            .map(|(k, v)| (k.clone(), v.trim().to_string()))
            .collect();
        query
    }
}

/// Normalized outgoing request for `GET /api/{resource}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest<F> {
    pub page: u32,
    pub page_size: PageSize,
    pub search: Option<String>,
    pub sort_by: F,
    pub sort_order: SortOrder,
    pub filters: BTreeMap<String, String>,
}

impl<F: SortField> ListRequest<F> {
    pub fn from_query(query: &ListQuery<F>, default_page_size: u32) -> Self {
        let search = query.search_text.trim();
        Self {
            page: query.page.max(1),
            page_size: query.page_size.normalized(default_page_size),
            search: (!search.is_empty()).then(|| search.to_string()),
            sort_by: query.sort_field,
            sort_order: query.sort_order,
            filters: query
                .active_filters()
                .filter(|(k, _)| !RESERVED_PARAMS.contains(k))
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Request for the entire matching set, used by client-side paging.
    pub fn full_set(query: &ListQuery<F>) -> Self {
        Self {
            page: 1,
            page_size: PageSize::All,
            ..Self::from_query(query, 1)
        }
    }

    /// Query equivalent of this request (local sources derive pages from it).
    pub fn to_query(&self) -> ListQuery<F> {
        ListQuery {
            search_text: self.search.clone().unwrap_or_default(),
            filters: self.filters.clone(),
            sort_field: self.sort_by,
            sort_order: self.sort_order,
            page: self.page,
            page_size: self.page_size,
        }
    }

    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("page".to_string(), self.page.to_string()),
            ("page_size".to_string(), self.page_size.to_string()),
        ];
        if let Some(search) = &self.search {
            pairs.push(("search".to_string(), search.clone()));
        }
        pairs.push(("sort_by".to_string(), self.sort_by.as_str().to_string()));
        pairs.push(("sort_order".to_string(), self.sort_order.as_str().to_string()));
        pairs.extend(self.filters.iter().map(|(k, v)| (k.clone(), v.clone())));
        pairs
    }

    pub fn to_query_string(&self) -> String {
        self.to_query_pairs()
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    enum Field {
        #[default]
        Name,
        Port,
    }

    impl SortField for Field {
        fn as_str(&self) -> &'static str {
            match self {
                Self::Name => "name",
                Self::Port => "port",
            }
        }

        fn parse(value: &str) -> Option<Self> {
            match value {
                "name" => Some(Self::Name),
                "port" => Some(Self::Port),
                _ => None,
            }
        }
    }

    #[test]
    fn request_drops_blank_search_and_filters() {
        let mut query = ListQuery::<Field>::new(80, SortOrder::Ascending);
        query.search_text = "   ".into();
        query.filters.insert("country".into(), " ".into());
        query.filters.insert("city".into(), " Rotterdam ".into());

        let request = ListRequest::from_query(&query, 80);
        assert_eq!(request.search, None);
        assert_eq!(request.filters.len(), 1);
        assert_eq!(request.filters["city"], "Rotterdam");
    }

    #[test]
    fn zero_page_and_size_fall_back_to_defaults() {
        let mut query = ListQuery::<Field>::new(80, SortOrder::Ascending);
        query.page = 0;
        query.page_size = PageSize::Count(0);

        let request = ListRequest::from_query(&query, 80);
        assert_eq!(request.page, 1);
        assert_eq!(request.page_size, PageSize::Count(80));
    }

    #[test]
    fn query_string_is_encoded_in_protocol_order() {
        let mut query = ListQuery::<Field>::new(50, SortOrder::Descending);
        query.search_text = "acme & sons".into();
        query.sort_field = Field::Port;
        query.filters.insert("country".into(), "SG".into());

        let qs = ListRequest::from_query(&query, 50).to_query_string();
        assert_eq!(
            qs,
            "page=1&page_size=50&search=acme%20%26%20sons&sort_by=port&sort_order=desc&country=SG"
        );
    }

    #[test]
    fn full_set_request_asks_for_everything() {
        let mut query = ListQuery::<Field>::new(10, SortOrder::Ascending);
        query.page = 4;
        let request = ListRequest::full_set(&query);
        assert_eq!(request.page, 1);
        assert_eq!(request.page_size, PageSize::All);
        assert!(request.to_query_string().contains("page_size=all"));
    }

    #[test]
    fn filters_cannot_shadow_protocol_parameters() {
        let mut query = ListQuery::<Field>::new(10, SortOrder::Ascending);
        query.filters.insert("page".into(), "99".into());
        let request = ListRequest::from_query(&query, 10);
        assert!(request.filters.is_empty());
    }

    #[test]
    fn raw_params_are_normalized() {
        let params: BTreeMap<String, String> = [
            ("page", "-3"),
            ("page_size", "0"),
            ("sort_by", "unknown"),
            ("sort_order", "DESC"),
            ("search", "  tanker "),
            ("country", "NL"),
            ("city", "  "),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let query = ListQuery::<Field>::from_params(&params, 80, SortOrder::Ascending);
        assert_eq!(query.page, 1);
        assert_eq!(query.page_size, PageSize::Count(80));
        assert_eq!(query.sort_field, Field::Name);
        assert_eq!(query.sort_order, SortOrder::Descending);
        assert_eq!(query.search_text, "tanker");
        assert_eq!(query.filters.len(), 1);
        assert_eq!(query.filters["country"], "NL");
    }

    #[test]
    fn persisted_params_restore_the_same_query() {
        let mut query = ListQuery::<Field>::new(50, SortOrder::Ascending);
        query.page = 3;
        query.page_size = PageSize::All;
        query.sort_field = Field::Port;
        query.search_text = "reefer".into();
        query.filters.insert("country".into(), "SG".into());

        let restored = ListQuery::<Field>::from_params(&query.to_params(), 50, SortOrder::Ascending);
        assert_eq!(restored, query);
    }

    #[test]
    fn page_size_parsing() {
        assert_eq!(PageSize::parse("ALL"), Some(PageSize::All));
        assert_eq!(PageSize::parse("25"), Some(PageSize::Count(25)));
        assert_eq!(PageSize::parse("-1"), None);
        assert_eq!(PageSize::parse("lots"), None);
    }
}
