//! Client tests against a local mock backend.

use httpmock::prelude::*;
use serde_json::json;

use unitconv_client::{ClientConfig, ClientError, HttpUnitClient, UnitSource};

fn client_for(server: &MockServer) -> HttpUnitClient {
    let config = ClientConfig::default().with_base_url(server.base_url());
    HttpUnitClient::new(&config).unwrap()
}

#[test]
fn test_units_lists_collection() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/units")
            .header("accept", "application/json");
        then.status(200)
            .json_body(json!([{"name": "length"}, {"name": "volume"}]));
    });

    let units = client_for(&server).units().unwrap();

    mock.assert();
    assert_eq!(units, json!([{"name": "length"}, {"name": "volume"}]));
}

#[test]
fn test_unit_fetches_detail() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/units/length")
            .header("content-type", "application/json");
        then.status(200)
            .json_body(json!({"name": "length", "base": "metre"}));
    });

    let detail = client_for(&server).unit("length").unwrap();

    mock.assert();
    assert_eq!(detail["base"], "metre");
}

#[test]
fn test_trailing_slash_in_base_url() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/units");
        then.status(200).json_body(json!([]));
    });

    let config = ClientConfig::default().with_base_url(format!("{}/", server.base_url()));
    let units = HttpUnitClient::new(&config).unwrap().units().unwrap();

    mock.assert();
    assert_eq!(units, json!([]));
}

#[test]
fn test_not_found_maps_to_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/units/furlong");
        then.status(404);
    });

    let err = client_for(&server).unit("furlong").unwrap_err();

    match err {
        ClientError::NotFound { path } => assert_eq!(path, "/units/furlong"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn test_server_error_carries_body() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/units");
        then.status(500).body("database offline");
    });

    let err = client_for(&server).units().unwrap_err();

    assert!(err.is_retryable());
    match err {
        ClientError::Status { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "database offline");
        }
        other => panic!("expected Status, got {other:?}"),
    }
}

#[test]
fn test_invalid_json_maps_to_parse_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/units");
        then.status(200).body("<html>not json</html>");
    });

    let err = client_for(&server).units().unwrap_err();
    assert!(matches!(err, ClientError::JsonParse(_)));
}

#[test]
fn test_connection_refused_is_network_error() {
    // Bind then drop a listener to get a port nobody is serving.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let config = ClientConfig::default().with_base_url(format!("http://127.0.0.1:{port}"));

    let err = HttpUnitClient::new(&config).unwrap().units().unwrap_err();
    assert!(matches!(err, ClientError::Network(_)));
    assert!(err.is_retryable());
}

#[test]
fn test_dot_unit_names_never_leave_units_path() {
    let server = MockServer::start();
    let root = server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200).json_body(json!({"root": true}));
    });
    let collection = server.mock(|when, then| {
        when.method(GET).path("/units/");
        then.status(200).json_body(json!(["length"]));
    });
    let client = client_for(&server);

    for name in [".", ".."] {
        match client.unit(name) {
            Err(ClientError::InvalidUnitName(rejected)) => assert_eq!(rejected, name),
            other => panic!("expected InvalidUnitName for {name:?}, got {other:?}"),
        }
    }

    root.assert_hits(0);
    collection.assert_hits(0);
}

#[test]
fn test_dotted_unit_name_sent_as_one_segment() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/units/...");
        then.status(200).json_body(json!({"name": "..."}));
    });

    let detail = client_for(&server).unit("...").unwrap();

    mock.assert();
    assert_eq!(detail["name"], "...");
}
