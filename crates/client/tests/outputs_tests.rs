//! Output sub-resource endpoint tests.

mod common;

use std::collections::BTreeMap;

use collector_client::Output;
use common::*;

#[tokio::test]
async fn test_list_outputs() {
    let mock_server = MockServer::start().await;

    let fixture = load_fixture("outputs/list_outputs.json");

    Mock::given(method("GET"))
        .and(path(ns("/collector-1/outputs")))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let outputs = client.list_outputs("collector-1").await.unwrap();

    assert_eq!(outputs.len(), 1);
    assert_eq!(outputs[0].name, "gelf-udp");
    assert_eq!(
        outputs[0].properties.get("Host").map(String::as_str),
        Some("10.0.0.1")
    );
}

#[tokio::test]
async fn test_save_output_with_empty_id_creates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ns("/collector-1/outputs")))
        .and(body_json(serde_json::json!({
            "type": "nxlog",
            "name": "gelf-udp",
            "properties": {"Host": "10.0.0.1", "Port": "12201"}
        })))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&mock_server)
        .await;

    let output = Output {
        name: "gelf-udp".to_string(),
        properties: BTreeMap::from([
            ("Host".to_string(), "10.0.0.1".to_string()),
            ("Port".to_string(), "12201".to_string()),
        ]),
        ..Output::default()
    };

    let client = test_client(&mock_server.uri());
    client.save_output("collector-1", &output).await.unwrap();
}

#[tokio::test]
async fn test_save_output_with_id_updates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path(ns("/collector-1/outputs/o1")))
        .and(body_partial_json(serde_json::json!({"output_id": "o1"})))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&mock_server)
        .await;

    let output = Output {
        id: "o1".to_string(),
        name: "gelf-udp".to_string(),
        ..Output::default()
    };

    let client = test_client(&mock_server.uri());
    client.save_output("collector-1", &output).await.unwrap();
}

#[tokio::test]
async fn test_delete_output_addresses_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path(ns("/collector-1/outputs/o1")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    client.delete_output("collector-1", "o1").await.unwrap();
}
