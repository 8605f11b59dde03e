use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::{editable_record, lenient_string, Column, Resource};
use crate::shared::list::{PagingMode, SortField};
use crate::shared::record::FieldSpec;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Currency {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    /// ISO 4217 code
    #[serde(deserialize_with = "lenient_string")]
    pub code: String,
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub symbol: String,
    #[serde(deserialize_with = "lenient_string")]
    pub exchange_rate: String,
    #[serde(deserialize_with = "lenient_string")]
    pub created_at: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CurrencySortField {
    #[default]
    Code,
    Name,
    CreatedAt,
}

impl SortField for CurrencySortField {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Name => "name",
            Self::CreatedAt => "created_at",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "code" => Some(Self::Code),
            "name" => Some(Self::Name),
            "created_at" => Some(Self::CreatedAt),
            _ => None,
        }
    }

    fn is_date(&self) -> bool {
        matches!(self, Self::CreatedAt)
    }
}

editable_record!(
    Currency,
    fields = [
        FieldSpec::required("code", "Code"),
        FieldSpec::required("name", "Name"),
        FieldSpec::optional("symbol", "Symbol"),
        FieldSpec::optional("exchange_rate", "Exchange rate"),
    ],
    keys = [id, code, name, symbol, exchange_rate, created_at]
);

impl Resource for Currency {
    type SortField = CurrencySortField;

    const PATH: &'static str = "currency";
    const LABEL: &'static str = "Currency";
    const PLURAL_LABEL: &'static str = "Currencies";
    const DEFAULT_PAGE_SIZE: u32 = 80;
    const PAGING: PagingMode = PagingMode::Client;
    const COLUMNS: &'static [Column<CurrencySortField>] = &[
        Column::sortable("code", "Code", CurrencySortField::Code),
        Column::sortable("name", "Name", CurrencySortField::Name),
        Column::text("symbol", "Symbol"),
        Column::text("exchange_rate", "Rate"),
        Column::date("created_at", "Created", CurrencySortField::CreatedAt),
    ];
    const SEARCH_FIELDS: &'static [&'static str] = &["code", "name"];

    fn collection_key() -> String {
        "currencies".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_uses_the_irregular_plural() {
        assert_eq!(Currency::collection_key(), "currencies");
    }

    #[test]
    fn search_matches_code_or_name() {
        let usd = Currency {
            code: "USD".into(),
            name: "US Dollar".into(),
            ..Currency::default()
        };
        assert!(usd.matches_search("usd"));
        assert!(usd.matches_search("dollar"));
        assert!(!usd.matches_search("euro"));
    }
}
