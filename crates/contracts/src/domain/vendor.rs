use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::{editable_record, lenient_string, Column, FilterSpec, Resource};
use crate::shared::list::{PagingMode, SortField};
use crate::shared::record::FieldSpec;

pub const VENDOR_TYPES: &[&str] = &[
    "Shipping Line",
    "Freight Forwarder",
    "Customs Broker",
    "Trucking",
    "Warehouse",
];

// ============================================================================
// Entity
// ============================================================================

/// Agent or carrier the office buys services from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vendor {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub vendor_type: String,
    #[serde(deserialize_with = "lenient_string")]
    pub contact_person: String,
    #[serde(deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(deserialize_with = "lenient_string")]
    pub phone: String,
    #[serde(deserialize_with = "lenient_string")]
    pub country: String,
    #[serde(deserialize_with = "lenient_string")]
    pub created_at: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ============================================================================
// Sorting
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VendorSortField {
    #[default]
    Name,
    VendorType,
    Country,
    CreatedAt,
}

impl SortField for VendorSortField {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::VendorType => "vendor_type",
            Self::Country => "country",
            Self::CreatedAt => "created_at",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "name" => Some(Self::Name),
            "vendor_type" => Some(Self::VendorType),
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
    Vendor,
    fields = [
        FieldSpec::required("name", "Name"),
        FieldSpec::choice("vendor_type", "Type", VENDOR_TYPES),
        FieldSpec::optional("contact_person", "Contact person"),
        FieldSpec::optional("email", "Email"),
        FieldSpec::optional("phone", "Phone"),
        FieldSpec::optional("country", "Country"),
    ],
    keys = [id, name, vendor_type, contact_person, email, phone, country, created_at]
);

impl Resource for Vendor {
    type SortField = VendorSortField;

    const PATH: &'static str = "vendor";
    const LABEL: &'static str = "Vendor";
    const PLURAL_LABEL: &'static str = "Vendors";
    const DEFAULT_PAGE_SIZE: u32 = 50;
    const PAGING: PagingMode = PagingMode::Server;
    const COLUMNS: &'static [Column<VendorSortField>] = &[
        Column::sortable("name", "Name", VendorSortField::Name),
        Column::sortable("vendor_type", "Type", VendorSortField::VendorType),
        Column::text("contact_person", "Contact"),
        Column::text("email", "Email"),
        Column::sortable("country", "Country", VendorSortField::Country),
        Column::date("created_at", "Created", VendorSortField::CreatedAt),
    ];
    const FILTERS: &'static [FilterSpec] = &[
        FilterSpec::choice("vendor_type", "Type", VENDOR_TYPES),
        FilterSpec::text("country", "Country"),
    ];
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "contact_person", "email"];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::{ListQuery, ListRequest, SortOrder};

    #[test]
    fn type_filter_goes_out_as_its_own_parameter() {
        let mut query = ListQuery::<VendorSortField>::new(Vendor::DEFAULT_PAGE_SIZE, SortOrder::Ascending);
        query.filters.insert("vendor_type".into(), "Customs Broker".into());
        let qs = ListRequest::from_query(&query, Vendor::DEFAULT_PAGE_SIZE).to_query_string();
        assert!(qs.ends_with("vendor_type=Customs%20Broker"));
    }
}
