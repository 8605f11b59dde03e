//! Field-level access to editable records.
//!
//! Forms, the presentation table and the local datastore all work through
//! string-keyed field access, so a single generic form can edit any entity.

use super::error::ValidationError;

/// Description of one editable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub required: bool,
    /// Fixed choices; empty means free text
    pub options: &'static [&'static str],
}

impl FieldSpec {
    pub const fn required(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            required: true,
            options: &[],
        }
    }

    pub const fn optional(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            required: false,
            options: &[],
        }
    }

    pub const fn choice(
        key: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self {
            key,
            label,
            required: true,
            options,
        }
    }
}

pub trait EditableRecord {
    /// Fields shown on the create/edit form, in display order
    const FIELDS: &'static [FieldSpec];

    fn record_id(&self) -> &str;

    fn set_record_id(&mut self, id: String);

    /// Value of a field as text. Unknown keys yield an empty string.
    fn field(&self, key: &str) -> String;

    fn set_field(&mut self, key: &str, value: String);

    fn validate(&self) -> Result<(), ValidationError> {
        validate_required(self)
    }
}

/// Checks every required field is non-empty after trimming.
/// Reports the first missing field in form order.
pub fn validate_required<R: EditableRecord + ?Sized>(record: &R) -> Result<(), ValidationError> {
    match R::FIELDS
        .iter()
        .find(|spec| spec.required && record.field(spec.key).trim().is_empty())
    {
        Some(spec) => Err(ValidationError {
            field: spec.key,
            label: spec.label,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Port {
        id: String,
        name: String,
        unlocode: String,
    }

    impl EditableRecord for Port {
        const FIELDS: &'static [FieldSpec] = &[
            FieldSpec::required("name", "Name"),
            FieldSpec::optional("unlocode", "UN/LOCODE"),
        ];

        fn record_id(&self) -> &str {
            &self.id
        }

        fn set_record_id(&mut self, id: String) {
            self.id = id;
        }

        fn field(&self, key: &str) -> String {
            match key {
                "name" => self.name.clone(),
                "unlocode" => self.unlocode.clone(),
                _ => String::new(),
            }
        }

        fn set_field(&mut self, key: &str, value: String) {
            match key {
                "name" => self.name = value,
                "unlocode" => self.unlocode = value,
                _ => {}
            }
        }
    }

    #[test]
    fn whitespace_only_required_field_is_rejected() {
        let mut port = Port::default();
        port.set_field("name", "   ".into());
        let err = port.validate().unwrap_err();
        assert_eq!(err.field, "name");
    }

    #[test]
    fn optional_fields_may_stay_empty() {
        let mut port = Port::default();
        port.set_field("name", "Singapore".into());
        assert!(port.validate().is_ok());
    }
}
