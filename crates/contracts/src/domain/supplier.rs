use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::{editable_record, lenient_string, Column, FilterSpec, Resource};
use crate::shared::list::{PagingMode, SortField};
use crate::shared::record::FieldSpec;

// ============================================================================
// Entity
// ============================================================================

/// Provider of goods or packing materials for consolidated shipments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Supplier {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
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
pub enum SupplierSortField {
    #[default]
    Name,
    ContactPerson,
    Country,
    CreatedAt,
}

impl SortField for SupplierSortField {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::ContactPerson => "contact_person",
            Self::Country => "country",
            Self::CreatedAt => "created_at",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "name" => Some(Self::Name),
            "contact_person" => Some(Self::ContactPerson),
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
    Supplier,
    fields = [
        FieldSpec::required("name", "Name"),
        FieldSpec::required("contact_person", "Contact person"),
        FieldSpec::optional("email", "Email"),
        FieldSpec::optional("phone", "Phone"),
        FieldSpec::optional("country", "Country"),
    ],
    keys = [id, name, contact_person, email, phone, country, created_at]
);

impl Resource for Supplier {
    type SortField = SupplierSortField;

    const PATH: &'static str = "supplier";
    const LABEL: &'static str = "Supplier";
    const PLURAL_LABEL: &'static str = "Suppliers";
    const DEFAULT_PAGE_SIZE: u32 = 80;
    const PAGING: PagingMode = PagingMode::Client;
    const COLUMNS: &'static [Column<SupplierSortField>] = &[
        Column::sortable("name", "Name", SupplierSortField::Name),
        Column::sortable("contact_person", "Contact", SupplierSortField::ContactPerson),
        Column::text("email", "Email"),
        Column::text("phone", "Phone"),
        Column::sortable("country", "Country", SupplierSortField::Country),
        Column::date("created_at", "Created", SupplierSortField::CreatedAt),
    ];
    const FILTERS: &'static [FilterSpec] = &[FilterSpec::text("country", "Country")];
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "contact_person", "email"];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::record::EditableRecord;
    use std::collections::BTreeMap;

    #[test]
    fn filters_compare_whole_values_ignoring_case() {
        let mut supplier = Supplier::default();
        supplier.set_field("country", "Netherlands".into());

        let mut filters = BTreeMap::new();
        filters.insert("country".to_string(), "netherlands".to_string());
        assert!(supplier.matches_filters(&filters));

        filters.insert("country".to_string(), "nether".to_string());
        assert!(!supplier.matches_filters(&filters));

        filters.insert("country".to_string(), "  ".to_string());
        assert!(supplier.matches_filters(&filters));
    }

    #[test]
    fn contact_person_is_required() {
        let mut supplier = Supplier::default();
        supplier.set_field("name", "Delta Packaging".into());
        let err = supplier.validate().unwrap_err();
        assert_eq!(err.to_string(), "Contact person is required");
    }
}
