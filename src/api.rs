//! Request/response contract of the `/api/extract` endpoint, without any
//! transport attached.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{json, Map, Value};
use thiserror::Error;
use tracing::{error, info};

use crate::extract::extract_all;
use crate::options::{ExtractionOptions, PartialExtractionOptions};
use crate::stats::ExtractionResult;

pub const EXAMPLE_TEXT: &str = "Visit https://example.com and www.google.com for more info";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Text input is required")]
    MissingText,

    #[error("Malformed request body: {0}")]
    Internal(#[from] serde_json::Error),

    #[error("Options must not be null")]
    NullOptions,
}

impl ApiError {
    pub fn status(&self) -> u16 {
        match self {
            ApiError::MissingText => 400,
            ApiError::Internal(_) | ApiError::NullOptions => 500,
        }
    }

    /// Message safe to hand back to the caller.
    pub fn public_message(&self) -> &'static str {
        match self {
            ApiError::MissingText => "Text input is required",
            ApiError::Internal(_) | ApiError::NullOptions => "Failed to extract domains",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    fn from_error(err: &ApiError) -> Self {
        Self {
            status: err.status(),
            body: json!({ "error": err.public_message() }),
        }
    }
}

#[derive(Serialize)]
struct SuccessBody<'a> {
    success: bool,
    data: &'a ExtractionResult,
    timestamp: String,
}

/// Handle a POST body of the form `{ "text": ..., "options": {...} }`.
pub fn handle_post(body: &str) -> ApiResponse {
    handle_post_at(body, Utc::now())
}

pub fn handle_post_at(body: &str, now: DateTime<Utc>) -> ApiResponse {
    match respond(body, now) {
        Ok(response) => response,
        Err(err) => {
            if err.status() >= 500 {
                error!(action = "respond", component = "api", error = %err, "Domain extraction error");
            } else {
                info!(action = "respond", component = "api", error = %err, "Rejected request");
            }
            ApiResponse::from_error(&err)
        }
    }
}

fn respond(body: &str, now: DateTime<Utc>) -> Result<ApiResponse, ApiError> {
    let request: Value = serde_json::from_str(body)?;

    let text = match request.get("text").and_then(Value::as_str) {
        Some(text) if !text.is_empty() => text,
        _ => return Err(ApiError::MissingText),
    };
    let options = match request.get("options") {
        Some(Value::Null) => return Err(ApiError::NullOptions),
        raw => request_options(raw),
    };

    let result = extract_all(text, &options);
    let body = serde_json::to_value(SuccessBody {
        success: true,
        data: &result,
        timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
    })?;

    Ok(ApiResponse { status: 200, body })
}

/// Read options the way a loosely typed client sends them: booleans as-is,
/// anything else by truthiness (`null` is false). Only absent keys take
/// their defaults.
fn request_options(raw: Option<&Value>) -> ExtractionOptions {
    let Some(Value::Object(map)) = raw else {
        return ExtractionOptions::default();
    };

    PartialExtractionOptions {
        include_subdomains: flag(map, "includeSubdomains"),
        remove_duplicates: flag(map, "removeDuplicates"),
        include_www: flag(map, "includeWww"),
        sort_results: flag(map, "sortResults"),
    }
    .resolve()
}

fn flag(map: &Map<String, Value>, key: &str) -> Option<bool> {
    match map.get(key)? {
        Value::Null => Some(false),
        Value::Bool(b) => Some(*b),
        Value::Number(n) => Some(n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan())),
        Value::String(s) => Some(!s.is_empty()),
        Value::Array(_) | Value::Object(_) => Some(true),
    }
}

/// Static description of the endpoint; no extraction happens.
pub fn handle_get() -> ApiResponse {
    ApiResponse {
        status: 200,
        body: json!({
            "message": "Domain Extractor API",
            "endpoints": {
                "POST": "/api/extract - Extract domains from text"
            },
            "example": {
                "text": EXAMPLE_TEXT,
                "options": ExtractionOptions::default(),
            }
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 17, 12, 30, 0).unwrap()
    }

    #[test]
    fn success_wraps_result_with_timestamp() {
        let body = json!({ "text": EXAMPLE_TEXT }).to_string();
        let response = handle_post_at(&body, fixed_now());
        assert_eq!(response.status, 200);
        assert_eq!(response.body["success"], true);
        assert_eq!(response.body["timestamp"], "2026-10-17T12:30:00.000Z");
        assert_eq!(response.body["data"]["domains"], json!(["example.com", "google.com"]));
        assert_eq!(response.body["data"]["statistics"]["totalUrls"], 1);
    }

    #[test]
    fn missing_or_non_string_text_is_400() {
        for body in [r#"{}"#, r#"{"text": 42}"#, r#"{"text": ""}"#, r#"[]"#] {
            let response = handle_post(body);
            assert_eq!(response.status, 400, "body {body}");
            assert_eq!(response.body, json!({ "error": "Text input is required" }));
        }
    }

    #[test]
    fn malformed_json_is_500() {
        let response = handle_post("{not json");
        assert_eq!(response.status, 500);
        assert_eq!(response.body, json!({ "error": "Failed to extract domains" }));
    }

    #[test]
    fn partial_options_merge_over_defaults() {
        let body = json!({
            "text": "www.blog.example.com",
            "options": { "includeSubdomains": false }
        })
        .to_string();
        let response = handle_post(&body);
        assert_eq!(response.body["data"]["domains"], json!(["example.com"]));
    }

    #[test]
    fn non_boolean_options_use_truthiness() {
        let map = json!({
            "includeSubdomains": 0,
            "removeDuplicates": "",
            "includeWww": "yes",
            "sortResults": null
        });
        let opts = request_options(Some(&map));
        assert!(!opts.include_subdomains);
        assert!(!opts.remove_duplicates);
        assert!(opts.include_www);
        assert!(!opts.sort_results);
        assert_eq!(request_options(Some(&json!("junk"))), ExtractionOptions::default());
    }

    #[test]
    fn explicit_null_option_is_false_not_default() {
        let body = json!({
            "text": "b.com blog.example.com a.com b.com",
            "options": {
                "includeSubdomains": null,
                "removeDuplicates": null,
                "sortResults": null
            }
        })
        .to_string();
        let response = handle_post(&body);
        assert_eq!(response.status, 200);
        assert_eq!(
            response.body["data"]["domains"],
            json!(["b.com", "example.com", "a.com", "b.com"])
        );
    }

    #[test]
    fn null_options_object_is_500() {
        let body = json!({ "text": "a.com", "options": null }).to_string();
        let response = handle_post(&body);
        assert_eq!(response.status, 500);
        assert_eq!(response.body, json!({ "error": "Failed to extract domains" }));
    }

    #[test]
    fn get_returns_docs() {
        let response = handle_get();
        assert_eq!(response.status, 200);
        assert_eq!(response.body["message"], "Domain Extractor API");
        assert_eq!(response.body["example"]["text"], EXAMPLE_TEXT);
        assert_eq!(response.body["example"]["options"]["includeWww"], false);
    }
}
