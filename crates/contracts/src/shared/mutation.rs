//! Create, update and delete of single records.

use std::rc::Rc;

use async_trait::async_trait;
use serde_json::{json, Map, Value};

use super::error::{AppError, ValidationError};
use crate::domain::common::Resource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationKind {
    Register,
    Update,
    Delete,
}

impl MutationKind {
    /// Last path segment of `POST /api/{resource}/{endpoint}`
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Register => "register",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }

    pub fn action_label(&self) -> &'static str {
        match self {
            Self::Register => "Create",
            Self::Update => "Update",
            Self::Delete => "Delete",
        }
    }

    pub fn success_title(&self) -> &'static str {
        match self {
            Self::Register => "Created",
            Self::Update => "Saved",
            Self::Delete => "Deleted",
        }
    }

    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::Register => "Record created",
            Self::Update => "Changes saved",
            Self::Delete => "Record deleted",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationOutcome {
    pub kind: MutationKind,
    pub message: String,
}

impl MutationOutcome {
    pub fn fallback(kind: MutationKind) -> Self {
        Self {
            kind,
            message: kind.fallback_message().to_string(),
        }
    }
}

/// Backend that persists single-record changes.
#[async_trait(?Send)]
pub trait RecordGateway<R: Resource> {
    async fn send(&self, kind: MutationKind, record: &R) -> Result<MutationOutcome, AppError>;
}

#[async_trait(?Send)]
impl<R: Resource, G: RecordGateway<R> + ?Sized> RecordGateway<R> for Rc<G> {
    async fn send(&self, kind: MutationKind, record: &R) -> Result<MutationOutcome, AppError> {
        (**self).send(kind, record).await
    }
}

/// Local checks that must pass before anything is sent.
pub fn check_before_send<R: Resource>(kind: MutationKind, record: &R) -> Result<(), AppError> {
    if kind != MutationKind::Register && record.record_id().trim().is_empty() {
        return Err(ValidationError {
            field: "id",
            label: "Record id",
        }
        .into());
    }
    if kind != MutationKind::Delete {
        record.validate()?;
    }
    Ok(())
}

/// Validates, then hands the record to the gateway.
pub async fn submit<R, G>(
    gateway: &G,
    kind: MutationKind,
    record: &R,
) -> Result<MutationOutcome, AppError>
where
    R: Resource,
    G: RecordGateway<R> + ?Sized,
{
    check_before_send(kind, record)?;
    log::debug!(
        "{} {} {}",
        kind.endpoint(),
        R::PATH,
        record.record_id()
    );
    gateway.send(kind, record).await
}

/// JSON body for a mutation: the full record, or `{id}` for delete.
pub fn mutation_body<R: Resource>(kind: MutationKind, record: &R) -> Result<Value, AppError> {
    match kind {
        MutationKind::Delete => Ok(json!({ "id": record.record_id() })),
        _ => serde_json::to_value(record)
            .map_err(|e| AppError::server(format!("Could not encode {}: {}", R::LABEL, e))),
    }
}

fn non_empty(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

/// `result.message`, then `message`, then `error`.
fn mutation_message(map: &Map<String, Value>) -> Option<String> {
    let nested = map
        .get("result")
        .and_then(Value::as_object)
        .and_then(|r| r.get("message"));
    non_empty(nested)
        .or_else(|| non_empty(map.get("message")))
        .or_else(|| non_empty(map.get("error")))
}

pub fn decode_mutation_response(
    kind: MutationKind,
    http_status: u16,
    body: &str,
) -> Result<MutationOutcome, AppError> {
    let map = match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    };
    let message = mutation_message(&map);

    if !(200..300).contains(&http_status) {
        return Err(AppError::server(message.unwrap_or_else(|| {
            format!("{} failed with status {}", kind.action_label(), http_status)
        })));
    }
    let failed = map
        .get("status")
        .and_then(Value::as_str)
        .is_some_and(|s| s.eq_ignore_ascii_case("error"));
    if failed {
        return Err(AppError::server(
            message.unwrap_or_else(|| format!("{} failed", kind.action_label())),
        ));
    }

    Ok(MutationOutcome {
        kind,
        message: message.unwrap_or_else(|| kind.fallback_message().to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::vendor::Vendor;
    use crate::shared::record::EditableRecord;
    use std::cell::Cell;

    #[derive(Default)]
    struct CountingGateway {
        calls: Cell<usize>,
    }

    #[async_trait(?Send)]
    impl RecordGateway<Vendor> for CountingGateway {
        async fn send(
            &self,
            kind: MutationKind,
            _record: &Vendor,
        ) -> Result<MutationOutcome, AppError> {
            self.calls.set(self.calls.get() + 1);
            Ok(MutationOutcome::fallback(kind))
        }
    }

    fn complete_vendor() -> Vendor {
        let mut vendor = Vendor::default();
        for spec in Vendor::FIELDS {
            let value = spec.options.first().copied().unwrap_or("x");
            vendor.set_field(spec.key, value.to_string());
        }
        vendor
    }

    #[tokio::test]
    async fn empty_required_field_never_reaches_the_gateway() {
        let gateway = CountingGateway::default();
        let mut vendor = complete_vendor();
        vendor.set_field("name", "  ".into());

        let err = submit(&gateway, MutationKind::Register, &vendor).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(ValidationError { field: "name", .. })));
        assert_eq!(gateway.calls.get(), 0);
    }

    #[tokio::test]
    async fn update_and_delete_need_an_id() {
        let gateway = CountingGateway::default();
        let vendor = complete_vendor();

        for kind in [MutationKind::Update, MutationKind::Delete] {
            let err = submit(&gateway, kind, &vendor).await.unwrap_err();
            assert_eq!(err.to_string(), "Record id is required");
        }
        assert_eq!(gateway.calls.get(), 0);

        let outcome = submit(&gateway, MutationKind::Register, &vendor).await.unwrap();
        assert_eq!(outcome.message, "Record created");
        assert_eq!(gateway.calls.get(), 1);
    }

    #[test]
    fn delete_body_carries_only_the_id() {
        let mut vendor = complete_vendor();
        vendor.set_record_id("v-9".into());
        let body = mutation_body(MutationKind::Delete, &vendor).unwrap();
        assert_eq!(body, json!({ "id": "v-9" }));
    }

    #[test]
    fn nested_result_message_wins() {
        let body = r#"{"status":"success","message":"ok","result":{"message":"Vendor saved"}}"#;
        let outcome = decode_mutation_response(MutationKind::Update, 200, body).unwrap();
        assert_eq!(outcome.message, "Vendor saved");

        let outcome = decode_mutation_response(MutationKind::Update, 200, "{}").unwrap();
        assert_eq!(outcome.message, "Changes saved");
    }

    #[test]
    fn failures_surface_the_server_message() {
        let body = r#"{"status":"error","message":"Vendor code taken"}"#;
        let err = decode_mutation_response(MutationKind::Register, 200, body).unwrap_err();
        assert_eq!(err, AppError::server("Vendor code taken"));

        let err = decode_mutation_response(MutationKind::Delete, 500, "oops").unwrap_err();
        assert_eq!(err.to_string(), "Delete failed with status 500");
    }
}
