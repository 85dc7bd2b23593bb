#![allow(non_snake_case)]

use super::*;

#[test]
fn ApiError___display___includes_status_and_message() {
    let err = ApiError::Status {
        status: 429,
        message: "too many requests".to_string(),
    };

    assert_eq!(err.to_string(), "unexpected status 429: too many requests");
}

#[test]
fn HubgenError___remote___carries_source_error() {
    let err = HubgenError::Remote {
        attempts: 5,
        source: ApiError::RateLimited,
    };

    let text = err.to_string();
    assert!(text.contains("after 5 attempts"));

    let source = std::error::Error::source(&err);
    assert!(source.is_some());
}

#[test]
fn HubgenError___missing_capability___names_the_key() {
    let err = HubgenError::MissingCapability {
        id: "switchLevel".to_string(),
        version: 1,
    };

    assert!(err.to_string().contains("switchLevel v1"));
}

#[test]
fn HubgenError___from_serde_json_error___maps_to_invalid_entity() {
    let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();

    let err: HubgenError = json_err.into();

    assert!(matches!(err, HubgenError::InvalidEntity(_)));
}
