//! Reload-after-write store tests.
//!
//! # Invariants
//! - Every successful mutation is followed by exactly one full configuration
//!   fetch, and the store snapshot equals that fetch result
//! - A failed mutation issues no reload and leaves the snapshot untouched
//! - The snapshot is replaced wholesale, never merged

mod common;

use std::collections::BTreeMap;

use collector_client::{Configuration, Input, Output, ValidationError, validate_input};
use common::*;

fn configuration_before() -> serde_json::Value {
    serde_json::json!({
        "collector_id": "collector-1",
        "inputs": [
            {"input_id": "abc", "type": "nxlog", "name": "file-log", "forward_to": "gelf-udp"}
        ],
        "outputs": [],
        "snippets": []
    })
}

fn configuration_after_output_create() -> serde_json::Value {
    serde_json::json!({
        "collector_id": "collector-1",
        "inputs": [
            {"input_id": "abc", "type": "nxlog", "name": "file-log", "forward_to": "gelf-udp"}
        ],
        "outputs": [
            {
                "output_id": "o-new",
                "type": "nxlog",
                "name": "gelf-udp",
                "properties": {"Host": "10.0.0.1", "Port": "12201"}
            }
        ],
        "snippets": []
    })
}

#[tokio::test]
async fn test_create_output_reloads_and_contains_name_once() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ns("/collector-1/outputs")))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(ns("/collector-1")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(configuration_after_output_create()),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut store = ConfigurationStore::new(test_client(&mock_server.uri()), "collector-1");

    let output = Output {
        name: "gelf-udp".to_string(),
        properties: BTreeMap::from([
            ("Host".to_string(), "10.0.0.1".to_string()),
            ("Port".to_string(), "12201".to_string()),
        ]),
        ..Output::default()
    };
    store.save_output(&output).await.unwrap();

    let current = store.current().unwrap();
    let matching: Vec<_> = current
        .outputs
        .iter()
        .filter(|o| o.name == "gelf-udp")
        .collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].id, "o-new");
}

#[tokio::test]
async fn test_snapshot_equals_fresh_fetch_after_write() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ns("/collector-1/outputs")))
        .respond_with(ResponseTemplate::new(202))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(ns("/collector-1")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(configuration_after_output_create()),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let expected: Configuration = client.configuration("collector-1").await.unwrap();

    let mut store = ConfigurationStore::new(test_client(&mock_server.uri()), "collector-1");
    store.save_output(&Output::default()).await.unwrap();

    // The snapshot must be exactly one fresh fetch result, no merge artifacts.
    assert_eq!(store.current(), Some(&expected));
}

#[tokio::test]
async fn test_delete_input_issues_delete_then_reload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path(ns("/collector-1/inputs/abc")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(ns("/collector-1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "collector_id": "collector-1",
            "inputs": [],
            "outputs": [],
            "snippets": []
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut store = ConfigurationStore::new(test_client(&mock_server.uri()), "collector-1");
    store.delete_input("abc").await.unwrap();

    assert!(store.current().unwrap().inputs.is_empty());
}

#[tokio::test]
async fn test_failed_save_leaves_snapshot_untouched() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ns("/collector-1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(configuration_before()))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path(ns("/collector-1/inputs")))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "message": "boom"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut store = ConfigurationStore::new(test_client(&mock_server.uri()), "collector-1");
    let before = store.refresh().await.unwrap().clone();

    let input = Input {
        name: "syslog-udp".to_string(),
        forward_to: "gelf-udp".to_string(),
        ..Input::default()
    };
    let err = store.save_input(&input).await.unwrap_err();
    assert!(!err.is_transport_error());

    // One input, unchanged; the failed write triggered no reload (the GET
    // mock expects exactly one call).
    assert_eq!(store.current(), Some(&before));
}

#[tokio::test]
async fn test_rejected_duplicate_name_issues_no_save_request() {
    let mock_server = MockServer::start().await;

    // The loaded configuration already contains a "windows-eventlog" input.
    Mock::given(method("GET"))
        .and(path(ns("/collector-1")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("configuration/configuration.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path(ns("/collector-1/inputs")))
        .respond_with(ResponseTemplate::new(202))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut store = ConfigurationStore::new(test_client(&mock_server.uri()), "collector-1");
    assert_eq!(store.collector_id(), "collector-1");
    let current = store.refresh().await.unwrap();

    let input = Input {
        name: "windows-eventlog".to_string(),
        forward_to: "gelf-udp".to_string(),
        ..Input::default()
    };

    // Save only when validation passes, the way the editor does.
    let verdict = validate_input(current, &input);
    assert!(matches!(
        verdict,
        Err(ValidationError::DuplicateName { .. })
    ));
    if verdict.is_ok() {
        store.save_input(&input).await.unwrap();
    }

    // The POST mock expects zero calls; mock verification on drop proves
    // the blocked save produced no network traffic.
}

#[tokio::test]
async fn test_snapshot_is_replaced_wholesale() {
    let mock_server = MockServer::start().await;

    // First fetch sees the old state, later fetches the new one.
    Mock::given(method("GET"))
        .and(path(ns("/collector-1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(configuration_before()))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(ns("/collector-1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "collector_id": "collector-1",
            "inputs": [],
            "outputs": [
                {"output_id": "o9", "type": "nxlog", "name": "gelf-tcp", "properties": {}}
            ],
            "snippets": []
        })))
        .mount(&mock_server)
        .await;

    let mut store = ConfigurationStore::new(test_client(&mock_server.uri()), "collector-1");

    store.refresh().await.unwrap();
    assert_eq!(store.current().unwrap().inputs.len(), 1);

    store.refresh().await.unwrap();
    let current = store.current().unwrap();
    // The old input is gone entirely; nothing was merged.
    assert!(current.inputs.is_empty());
    assert_eq!(current.outputs[0].name, "gelf-tcp");
}
