use customer_bridge::{
    BatchEngine, BridgeError, CliConfig, LocalStorage, LookupAdapter, LookupPipeline,
    SampleTarget, XmlServiceClient,
};
use httpmock::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn test_config(base_url: String) -> CliConfig {
    CliConfig {
        base_url,
        input_file: "input_data.txt".to_string(),
        output_path: "out".to_string(),
        requests_file: "json_requests.txt".to_string(),
        responses_file: "json_responses.txt".to_string(),
        timeout_seconds: 5,
        config: None,
        dry_run: false,
        verbose: false,
    }
}

fn read_lines(dir: &TempDir, name: &str) -> Vec<String> {
    let path = dir.path().join("out").join(name);
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[tokio::test]
async fn test_end_to_end_batch_with_mock_service() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("input_data.txt"),
        "0000001\n404\n\nbroken\n2878037\n",
    )
    .unwrap();

    let server = MockServer::start();
    let found = server.mock(|when, then| {
        when.method(GET).path("/customer/0000001");
        then.status(200)
            .header("Content-Type", "application/xml")
            .body("<customer><accounts><a>11111111</a><a>22222222</a></accounts></customer>");
    });
    let missing = server.mock(|when, then| {
        when.method(GET).path("/customer/404");
        then.status(404);
    });
    let broken = server.mock(|when, then| {
        when.method(GET).path("/customer/broken");
        then.status(200).body("<customer><accounts>");
    });
    let second = server.mock(|when, then| {
        when.method(GET).path("/customer/2878037");
        then.status(200).body(
            "<customer><accounts><account>92374593074</account><account>12429840547</account></accounts></customer>",
        );
    });

    let config = test_config(server.url("/customer/"));
    let client = XmlServiceClient::new(config.base_url.clone(), std::time::Duration::from_secs(5))
        .unwrap();
    let storage = LocalStorage::new(temp_dir.path().to_string_lossy().into_owned());
    let pipeline = LookupPipeline::new(storage, config, LookupAdapter::new(client));

    let summary = BatchEngine::new(pipeline).run().await.unwrap();

    found.assert();
    missing.assert();
    broken.assert();
    second.assert();

    assert_eq!(summary.processed, 4);
    assert_eq!(summary.succeeded, 3);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.skipped, 1);
    assert!(Path::new(&summary.requests_path).ends_with("out/json_requests.txt"));

    let requests = read_lines(&temp_dir, "json_requests.txt");
    let responses = read_lines(&temp_dir, "json_responses.txt");
    assert_eq!(requests.len(), 4);
    assert_eq!(responses.len(), 4);

    assert_eq!(
        requests[0],
        r#"{"customer_request":{"customer":{"cunbr":"0000001"}}}"#
    );
    assert_eq!(
        responses[0],
        r#"{"customer_response":{"customer":{"cunbr":"0000001","accounts":["11111111","22222222"]}}}"#
    );
    assert_eq!(
        responses[1],
        r#"{"customer_response":{"customer":{"cunbr":"404","accounts":[]}}}"#
    );

    let error: serde_json::Value = serde_json::from_str(&responses[2]).unwrap();
    assert_eq!(error["error"]["line"], 4);
    assert_eq!(error["error"]["cunbr"], "broken");
    assert_eq!(error["error"]["kind"], "malformed_xml");

    assert_eq!(
        responses[3],
        r#"{"customer_response":{"customer":{"cunbr":"2878037","accounts":["92374593074","12429840547"]}}}"#
    );
}

#[tokio::test]
async fn test_unreachable_service_records_transport_errors() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("input_data.txt"), "1\n2\n").unwrap();

    let config = test_config("http://127.0.0.1:1/customer/".to_string());
    let client = XmlServiceClient::new(config.base_url.clone(), std::time::Duration::from_secs(2))
        .unwrap();
    let storage = LocalStorage::new(temp_dir.path().to_string_lossy().into_owned());
    let pipeline = LookupPipeline::new(storage, config, LookupAdapter::new(client));

    let summary = BatchEngine::new(pipeline).run().await.unwrap();
    assert_eq!(summary.failed, 2);

    let responses = read_lines(&temp_dir, "json_responses.txt");
    for (index, line) in responses.iter().enumerate() {
        let error: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(error["error"]["kind"], "transport_error");
        assert_eq!(error["error"]["line"], index + 1);
    }
}

#[tokio::test]
async fn test_dry_run_uses_sample_target() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("input_data.txt"), "2878037\n").unwrap();

    let storage = LocalStorage::new(temp_dir.path().to_string_lossy().into_owned());
    let pipeline = LookupPipeline::new(
        storage,
        test_config("http://127.0.0.1:1/customer/".to_string()),
        SampleTarget::default(),
    );

    let summary = BatchEngine::new(pipeline).run().await.unwrap();
    assert_eq!(summary.succeeded, 1);

    let responses = read_lines(&temp_dir, "json_responses.txt");
    assert_eq!(
        responses[0],
        r#"{"customer_response":{"customer":{"cunbr":"2878037","accounts":["11111111","22222222"]}}}"#
    );
}

#[tokio::test]
async fn test_missing_input_file_aborts_run() {
    let temp_dir = TempDir::new().unwrap();
    let storage = LocalStorage::new(temp_dir.path().to_string_lossy().into_owned());
    let pipeline = LookupPipeline::new(
        storage,
        test_config("http://127.0.0.1:1/customer/".to_string()),
        SampleTarget::default(),
    );

    let err = BatchEngine::new(pipeline).run().await.unwrap_err();
    assert!(matches!(err, BridgeError::IoError(_)));
    assert!(!temp_dir.path().join("out").exists());
}
