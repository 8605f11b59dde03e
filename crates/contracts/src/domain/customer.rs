use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::{editable_record, lenient_string, Column, FilterSpec, Resource};
use crate::shared::list::{PagingMode, SortField, SortOrder};
use crate::shared::record::FieldSpec;

// ============================================================================
// Entity
// ============================================================================

/// Shipper or consignee billed by the forwarding office.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Customer {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(deserialize_with = "lenient_string")]
    pub phone: String,
    #[serde(deserialize_with = "lenient_string")]
    pub company: String,
    #[serde(deserialize_with = "lenient_string")]
    pub country: String,
    #[serde(deserialize_with = "lenient_string")]
    pub address: String,
    #[serde(deserialize_with = "lenient_string")]
    pub created_at: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ============================================================================
// Sorting
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CustomerSortField {
    Name,
    Email,
    Company,
    Country,
    #[default]
    CreatedAt,
}

impl SortField for CustomerSortField {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Company => "company",
            Self::Country => "country",
            Self::CreatedAt => "created_at",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "company" => Some(Self::Company),
            "country" => Some(Self::Country),
            "created_at" => Some(Self::CreatedAt),
            _ => None,
        }
    }

    fn is_date(&self) -> bool {
        matches!(self, Self::CreatedAt)
    }
}

// ============================================================================
// Resource
// ============================================================================

editable_record!(
    Customer,
    fields = [
        FieldSpec::required("name", "Name"),
        FieldSpec::required("email", "Email"),
        FieldSpec::optional("phone", "Phone"),
        FieldSpec::optional("company", "Company"),
        FieldSpec::optional("country", "Country"),
        FieldSpec::optional("address", "Address"),
    ],
    keys = [id, name, email, phone, company, country, address, created_at]
);

impl Resource for Customer {
    type SortField = CustomerSortField;

    const PATH: &'static str = "customer";
    const LABEL: &'static str = "Customer";
    const PLURAL_LABEL: &'static str = "Customers";
    const DEFAULT_PAGE_SIZE: u32 = 50;
    const DEFAULT_SORT_ORDER: SortOrder = SortOrder::Descending;
    const PAGING: PagingMode = PagingMode::Server;
    const COLUMNS: &'static [Column<CustomerSortField>] = &[
        Column::sortable("name", "Name", CustomerSortField::Name),
        Column::sortable("email", "Email", CustomerSortField::Email),
        Column::text("phone", "Phone"),
        Column::sortable("company", "Company", CustomerSortField::Company),
        Column::sortable("country", "Country", CustomerSortField::Country),
        Column::date("created_at", "Created", CustomerSortField::CreatedAt),
    ];
    const FILTERS: &'static [FilterSpec] = &[
        FilterSpec::text("country", "Country"),
        FilterSpec::text("company", "Company"),
    ];
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "email", "company", "phone"];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::record::EditableRecord;

    #[test]
    fn unknown_server_fields_survive_an_edit() {
        let raw = r#"{"id":"c1","name":"Acme","email":"a@acme.test","credit_limit":5000}"#;
        let mut customer: Customer = serde_json::from_str(raw).unwrap();
        assert_eq!(customer.field("credit_limit"), "5000");

        customer.set_field("phone", "+65 6123 4567".into());
        let back = serde_json::to_value(&customer).unwrap();
        assert_eq!(back["credit_limit"], 5000);
        assert_eq!(back["phone"], "+65 6123 4567");
    }

    #[test]
    fn every_sortable_column_round_trips_its_field_name() {
        for column in Customer::COLUMNS {
            if let Some(field) = column.sort {
                assert_eq!(CustomerSortField::parse(field.as_str()), Some(field));
                assert_eq!(field.as_str(), column.key);
            }
        }
    }
}
