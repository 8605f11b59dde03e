use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::{editable_record, lenient_string, Column, FilterSpec, Resource};
use crate::shared::list::{PagingMode, SortField};
use crate::shared::record::FieldSpec;

pub const VESSEL_TYPES: &[&str] = &[
    "Container",
    "Bulk Carrier",
    "Tanker",
    "Ro-Ro",
    "General Cargo",
];

// ============================================================================
// Entity
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vessel {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub imo_number: String,
    #[serde(deserialize_with = "lenient_string")]
    pub flag: String,
    #[serde(deserialize_with = "lenient_string")]
    pub vessel_type: String,
    #[serde(deserialize_with = "lenient_string")]
    pub capacity_teu: String,
    #[serde(deserialize_with = "lenient_string")]
    pub created_at: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ============================================================================
// Sorting
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VesselSortField {
    #[default]
    Name,
    ImoNumber,
    Flag,
    VesselType,
    CreatedAt,
}

impl SortField for VesselSortField {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::ImoNumber => "imo_number",
            Self::Flag => "flag",
            Self::VesselType => "vessel_type",
            Self::CreatedAt => "created_at",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "name" => Some(Self::Name),
            "imo_number" => Some(Self::ImoNumber),
            "flag" => Some(Self::Flag),
            "vessel_type" => Some(Self::VesselType),
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
    Vessel,
    fields = [
        FieldSpec::required("name", "Name"),
        FieldSpec::required("imo_number", "IMO number"),
        FieldSpec::required("flag", "Flag"),
        FieldSpec::choice("vessel_type", "Type", VESSEL_TYPES),
        FieldSpec::optional("capacity_teu", "Capacity (TEU)"),
    ],
    keys = [id, name, imo_number, flag, vessel_type, capacity_teu, created_at]
);

impl Resource for Vessel {
    type SortField = VesselSortField;

    const PATH: &'static str = "vessel";
    const LABEL: &'static str = "Vessel";
    const PLURAL_LABEL: &'static str = "Vessels";
    const DEFAULT_PAGE_SIZE: u32 = 80;
    const PAGING: PagingMode = PagingMode::Client;
    const COLUMNS: &'static [Column<VesselSortField>] = &[
        Column::sortable("name", "Name", VesselSortField::Name),
        Column::sortable("imo_number", "IMO", VesselSortField::ImoNumber),
        Column::sortable("flag", "Flag", VesselSortField::Flag),
        Column::sortable("vessel_type", "Type", VesselSortField::VesselType),
        Column::text("capacity_teu", "TEU"),
        Column::date("created_at", "Created", VesselSortField::CreatedAt),
    ];
    const FILTERS: &'static [FilterSpec] = &[
        FilterSpec::choice("vessel_type", "Type", VESSEL_TYPES),
        FilterSpec::text("flag", "Flag"),
    ];
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "imo_number", "flag"];
}
