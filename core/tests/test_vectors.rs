//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and expected parse results. Request bodies are compared as parsed JSON so
//! field order does not matter.

use todo_sync_core::config::DEFAULT_BASE_URL;
use todo_sync_core::{ApiError, ClientConfig, HttpMethod, HttpRequest, HttpResponse, Task, TodoClient};

fn client() -> TodoClient {
    TodoClient::from_config(&ClientConfig::default())
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn parse_headers(value: &serde_json::Value) -> Vec<(String, String)> {
    value
        .as_array()
        .map(|headers| {
            headers
                .iter()
                .map(|h| {
                    let pair = h.as_array().unwrap();
                    (pair[0].as_str().unwrap().to_string(), pair[1].as_str().unwrap().to_string())
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Compare a built request with its vector description.
fn assert_request(name: &str, req: &HttpRequest, expected: &serde_json::Value) {
    assert_eq!(req.method, parse_method(expected["method"].as_str().unwrap()), "{name}: method");
    assert_eq!(
        req.path,
        format!("{DEFAULT_BASE_URL}{}", expected["path"].as_str().unwrap()),
        "{name}: path"
    );
    assert_eq!(req.headers, parse_headers(&expected["headers"]), "{name}: headers");
    match expected.get("body") {
        Some(body) => {
            let actual: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
            assert_eq!(&actual, body, "{name}: body");
        }
        None => assert!(req.body.is_none(), "{name}: body should be None"),
    }
}

fn simulated(case: &serde_json::Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        headers: Vec::new(),
        body: sim["body"].as_str().unwrap().to_string(),
    }
}

fn assert_error(name: &str, err: ApiError, expected: &str) {
    let matched = match expected {
        "NotFound" => matches!(err, ApiError::NotFound),
        "HttpError" => matches!(err, ApiError::HttpError { .. }),
        "DeserializationError" => matches!(err, ApiError::DeserializationError(_)),
        other => panic!("{name}: unknown expected_error: {other}"),
    };
    assert!(matched, "{name}: expected {expected}, got {err:?}");
}

fn load(raw: &str) -> serde_json::Value {
    serde_json::from_str(raw).unwrap()
}

// ---------------------------------------------------------------------------
// User bootstrap
// ---------------------------------------------------------------------------

#[test]
fn user_test_vectors() {
    let vectors = load(include_str!("../../test-vectors/user.json"));
    let c = client();

    assert_request("check", &c.build_check_user(), &vectors["check_request"]);
    assert_request("create", &c.build_create_user(), &vectors["create_request"]);

    for case in vectors["check_cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let response = HttpResponse {
            status: case["status"].as_u64().unwrap() as u16,
            headers: Vec::new(),
            body: String::new(),
        };
        assert_eq!(
            c.parse_check_user(&response),
            case["expected_exists"].as_bool().unwrap(),
            "{name}"
        );
    }

    for case in vectors["create_cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let response = HttpResponse {
            status: case["status"].as_u64().unwrap() as u16,
            headers: Vec::new(),
            body: String::new(),
        };
        let result = c.parse_create_user(response);
        match case.get("expected_error") {
            Some(expected) => assert_error(name, result.unwrap_err(), expected.as_str().unwrap()),
            None => assert!(result.is_ok(), "{name}: expected success"),
        }
    }
}

// ---------------------------------------------------------------------------
// Load
// ---------------------------------------------------------------------------

#[test]
fn load_test_vectors() {
    let vectors = load(include_str!("../../test-vectors/load.json"));
    let c = client();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        assert_request(name, &c.build_load_tasks(), &case["expected_request"]);

        let result = c.parse_load_tasks(simulated(case));
        match case.get("expected_error") {
            Some(expected) => assert_error(name, result.unwrap_err(), expected.as_str().unwrap()),
            None => {
                let expected: Vec<Task> = serde_json::from_value(case["expected_result"].clone()).unwrap();
                assert_eq!(result.unwrap(), expected, "{name}: parsed result");
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[test]
fn create_test_vectors() {
    let vectors = load(include_str!("../../test-vectors/create.json"));
    let c = client();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let label = case["input_label"].as_str().unwrap();
        let req = c.build_create_task(label).unwrap();
        assert_request(name, &req, &case["expected_request"]);

        let result = c.parse_create_task(simulated(case));
        match case.get("expected_error") {
            Some(expected) => assert_error(name, result.unwrap_err(), expected.as_str().unwrap()),
            None => assert_eq!(result.unwrap(), case["expected_id"].as_u64().unwrap(), "{name}: id"),
        }
    }
}

// ---------------------------------------------------------------------------
// Complete
// ---------------------------------------------------------------------------

#[test]
fn complete_test_vectors() {
    let vectors = load(include_str!("../../test-vectors/complete.json"));
    let c = client();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let id = case["input_id"].as_u64().unwrap();
        let req = c.build_complete_task(id).unwrap();
        assert_request(name, &req, &case["expected_request"]);

        let result = c.parse_complete_task(simulated(case));
        match case.get("expected_error") {
            Some(expected) => assert_error(name, result.unwrap_err(), expected.as_str().unwrap()),
            None => assert!(result.is_ok(), "{name}: expected success"),
        }
    }
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[test]
fn delete_test_vectors() {
    let vectors = load(include_str!("../../test-vectors/delete.json"));
    let c = client();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let id = case["input_id"].as_u64().unwrap();
        assert_request(name, &c.build_delete_task(id), &case["expected_request"]);

        let result = c.parse_delete_task(simulated(case));
        match case.get("expected_error") {
            Some(expected) => assert_error(name, result.unwrap_err(), expected.as_str().unwrap()),
            None => assert!(result.is_ok(), "{name}: expected success"),
        }
    }
}
