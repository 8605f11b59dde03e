use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accepts strings, numbers and booleans; `null` becomes an empty string.
/// Servers are inconsistent about numeric ids and codes.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        other => value_text(&other),
    })
}

/// Display text of a loose JSON value.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Implements `EditableRecord` for an entity with `id: String`, the listed
/// `String` fields and an `extra` map catching everything else.
macro_rules! editable_record {
    ($ty:ty, fields = [$($spec:expr),* $(,)?], keys = [$($key:ident),+ $(,)?]) => {
        impl $crate::shared::record::EditableRecord for $ty {
            const FIELDS: &'static [$crate::shared::record::FieldSpec] = &[$($spec),*];

            fn record_id(&self) -> &str {
                &self.id
            }

            fn set_record_id(&mut self, id: String) {
                self.id = id;
            }

            fn field(&self, key: &str) -> String {
                $(
                    if key == stringify!($key) {
                        return self.$key.clone();
                    }
                )+
                self.extra
                    .get(key)
                    .map($crate::domain::common::value_text)
                    .unwrap_or_default()
            }

            fn set_field(&mut self, key: &str, value: String) {
                $(
                    if key == stringify!($key) {
                        self.$key = value;
                        return;
                    }
                )+
                self.extra
                    .insert(key.to_string(), ::serde_json::Value::String(value));
            }
        }
    };
}

pub(crate) use editable_record;

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "lenient_string")]
        id: String,
    }

    #[test]
    fn numeric_and_null_ids_become_text() {
        let row: Row = serde_json::from_str(r#"{"id": 42}"#).unwrap();
        assert_eq!(row.id, "42");
        let row: Row = serde_json::from_str(r#"{"id": null}"#).unwrap();
        assert_eq!(row.id, "");
        let row: Row = serde_json::from_str("{}").unwrap();
        assert_eq!(row.id, "");
    }
}
