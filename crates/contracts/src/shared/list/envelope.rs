//! Decoding of the `GET /api/{resource}` response envelope.

use serde_json::{Map, Value};

use super::query::{ListRequest, PageSize, SortField, SortOrder};
use super::result::ListResult;
use crate::domain::common::Resource;
use crate::shared::error::AppError;

/// Coarse shape of a list response body.
#[derive(Debug, Clone, PartialEq)]
pub enum ListEnvelope {
    Success(Map<String, Value>),
    Error(Option<String>),
    /// Not JSON, or JSON without a recognizable `status`
    Unrecognized,
}

pub fn parse_list_envelope(body: &str) -> ListEnvelope {
    let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) else {
        return ListEnvelope::Unrecognized;
    };
    match map.get("status").and_then(Value::as_str) {
        Some(status) if status.eq_ignore_ascii_case("success") => ListEnvelope::Success(map),
        Some(status) if status.eq_ignore_ascii_case("error") => {
            ListEnvelope::Error(envelope_message(&map))
        }
        _ => ListEnvelope::Unrecognized,
    }
}

/// First non-empty of `message`, `result.message` and `error`.
pub fn envelope_message(map: &Map<String, Value>) -> Option<String> {
    let nested = map
        .get("result")
        .and_then(Value::as_object)
        .and_then(|r| r.get("message"));
    [map.get("message"), nested, map.get("error")]
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
        .map(str::trim)
        .find(|m| !m.is_empty())
        .map(str::to_string)
}

/// Reads a non-negative integer sent either as a number or a numeric string.
pub fn u64_field(map: &Map<String, Value>, key: &str) -> Option<u64> {
    match map.get(key)? {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn bool_field(map: &Map<String, Value>, key: &str) -> Option<bool> {
    match map.get(key)? {
        Value::Bool(b) => Some(*b),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn text_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    match map.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Turns an HTTP status and body into a normalized list result.
pub fn decode_list_response<R: Resource>(
    http_status: u16,
    body: &str,
    request: &ListRequest<R::SortField>,
) -> Result<ListResult<R, R::SortField>, AppError> {
    let envelope = parse_list_envelope(body);

    if !(200..300).contains(&http_status) {
        let message = match &envelope {
            ListEnvelope::Success(map) => envelope_message(map),
            ListEnvelope::Error(message) => message.clone(),
            ListEnvelope::Unrecognized => None,
        };
        return Err(AppError::server(message.unwrap_or_else(|| {
            format!("{} request failed with status {}", R::LABEL, http_status)
        })));
    }

    match envelope {
        ListEnvelope::Error(message) => Err(AppError::server(message.unwrap_or_else(|| {
            format!("Failed to load {}", R::PLURAL_LABEL.to_lowercase())
        }))),
        ListEnvelope::Unrecognized => {
            log::warn!(
                "unrecognized {} list response, showing an empty list",
                R::PATH
            );
            Ok(ListResult::empty(
                PageSize::Count(R::DEFAULT_PAGE_SIZE),
                request.sort_by,
                request.sort_order,
            ))
        }
        ListEnvelope::Success(map) => decode_success::<R>(&map, request),
    }
}

fn decode_success<R: Resource>(
    map: &Map<String, Value>,
    request: &ListRequest<R::SortField>,
) -> Result<ListResult<R, R::SortField>, AppError> {
    let items = match map.get(&R::collection_key()) {
        Some(Value::Array(raw)) => raw
            .iter()
            .map(|value| {
                serde_json::from_value::<R>(value.clone()).map_err(|e| {
                    AppError::server(format!("Invalid {} record: {}", R::LABEL.to_lowercase(), e))
                })
            })
            .collect::<Result<Vec<R>, AppError>>()?,
        _ => Vec::new(),
    };

    let total_count = u64_field(map, "total_count")
        .or_else(|| u64_field(map, "count"))
        .unwrap_or(items.len() as u64);
    let page = u64_field(map, "page")
        .and_then(|p| u32::try_from(p).ok())
        .unwrap_or(1);
    let page_size = text_field(map, "page_size")
        .and_then(|s| PageSize::parse(&s))
        .unwrap_or(request.page_size);
    let sort_field = text_field(map, "sort_by")
        .and_then(|s| R::SortField::parse(&s))
        .unwrap_or(request.sort_by);
    let sort_order = text_field(map, "sort_order")
        .and_then(|s| SortOrder::parse(&s))
        .unwrap_or(request.sort_order);

    let mut result =
        ListResult::from_window(items, total_count, page, page_size, sort_field, sort_order);
    if let Some(pages) = u64_field(map, "total_pages") {
        result.total_pages = u32::try_from(pages).unwrap_or(u32::MAX);
        result.has_next = result.page < result.total_pages;
    }
    if let Some(has_next) = bool_field(map, "has_next") {
        result.has_next = has_next;
    }
    if let Some(has_previous) = bool_field(map, "has_previous") {
        result.has_previous = has_previous;
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::customer::{Customer, CustomerSortField};
    use crate::shared::list::query::ListQuery;

    fn request() -> ListRequest<CustomerSortField> {
        let mut query = ListQuery::new(50, SortOrder::Descending);
        query.page = 2;
        query.sort_field = CustomerSortField::CreatedAt;
        ListRequest::from_query(&query, 50)
    }

    #[test]
    fn error_status_carries_server_message() {
        let body = r#"{"status":"error","message":"Customer table is locked"}"#;
        let err = decode_list_response::<Customer>(200, body, &request()).unwrap_err();
        assert_eq!(err, AppError::server("Customer table is locked"));
    }

    #[test]
    fn error_status_without_message_uses_named_fallback() {
        let err = decode_list_response::<Customer>(200, r#"{"status":"error"}"#, &request())
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to load customers");
    }

    #[test]
    fn non_success_http_status_is_a_server_error() {
        let err = decode_list_response::<Customer>(502, "Bad Gateway", &request()).unwrap_err();
        assert_eq!(err.to_string(), "Customer request failed with status 502");

        let body = r#"{"status":"error","error":"token expired"}"#;
        let err = decode_list_response::<Customer>(401, body, &request()).unwrap_err();
        assert_eq!(err.to_string(), "token expired");
    }

    #[test]
    fn unrecognized_body_yields_empty_result_with_requested_sort() {
        for body in ["", "<html></html>", "[]", r#"{"customers":[]}"#, r#"{"status":"pending"}"#] {
            let result = decode_list_response::<Customer>(200, body, &request()).unwrap();
            assert!(result.items.is_empty());
            assert_eq!(result.total_count, 0);
            assert_eq!(result.page, 1);
            assert_eq!(result.page_size, PageSize::Count(50));
            assert_eq!(result.sort_field, CustomerSortField::CreatedAt);
            assert_eq!(result.sort_order, SortOrder::Descending);
        }
    }

    #[test]
    fn success_fields_come_from_the_response() {
        let body = r#"{
            "status": "success",
            "customers": [
                {"id": 7, "name": "Acme Shipping", "email": "ops@acme.test", "country": "SG"},
                {"id": "8", "name": "Baltic Lines"}
            ],
            "total_count": "42",
            "page": 2,
            "page_size": 20,
            "total_pages": 3,
            "sort_by": "name",
            "sort_order": "asc"
        }"#;
        let result = decode_list_response::<Customer>(200, body, &request()).unwrap();
        assert_eq!(result.items.len(), 2);
        assert_eq!(result.items[0].id, "7");
        assert_eq!(result.total_count, 42);
        assert_eq!(result.page, 2);
        assert_eq!(result.page_size, PageSize::Count(20));
        assert_eq!(result.total_pages, 3);
        assert!(result.has_next);
        assert!(result.has_previous);
        assert_eq!(result.sort_field, CustomerSortField::Name);
        assert_eq!(result.sort_order, SortOrder::Ascending);
    }

    #[test]
    fn missing_metadata_is_derived() {
        let body = r#"{"status":"success","customers":[{"id":"1","name":"Acme"}],"count":1}"#;
        let result = decode_list_response::<Customer>(200, body, &request()).unwrap();
        assert_eq!(result.total_count, 1);
        assert_eq!(result.page, 1);
        assert_eq!(result.page_size, PageSize::Count(50));
        assert_eq!(result.total_pages, 1);
        assert!(!result.has_next);
        assert!(!result.has_previous);
        assert_eq!(result.sort_field, CustomerSortField::CreatedAt);
    }

    #[test]
    fn undecodable_record_fails_the_whole_response() {
        let body = r#"{"status":"success","customers":[{"id":"1","name":"Acme"}, 17]}"#;
        let err = decode_list_response::<Customer>(200, body, &request()).unwrap_err();
        assert!(matches!(err, AppError::Server(_)));
    }

    #[test]
    fn message_prefers_top_level_then_nested() {
        let map: Map<String, Value> =
            serde_json::from_str(r#"{"message":" ","result":{"message":"nested"}}"#).unwrap();
        assert_eq!(envelope_message(&map).as_deref(), Some("nested"));
    }
}
