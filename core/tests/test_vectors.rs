//! Verify build/parse against the JSON test vectors in `test-vectors/`.
//!
//! Each case describes the expected request, a simulated response, and the
//! expected parse outcome plus the `UiState` it maps to. Parsed values are
//! compared as data, not raw strings, to avoid field-ordering noise.

use notas_core::{ApiError, FailurePolicy, HttpMethod, HttpResponse, NotaTarea, NotasClient, UiState};

const BASE_URL: &str = "http://localhost:3000";

fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        other => panic!("unknown method: {other}"),
    }
}

#[test]
fn list_test_vectors() {
    let raw = include_str!("../../test-vectors/list.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let client = NotasClient::new(BASE_URL);
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let expected_req = &case["expected_request"];

        // Verify build
        let req = client.build_list_notas();
        assert_eq!(req.method, parse_method(expected_req["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(req.path, format!("{BASE_URL}{}", expected_req["path"].as_str().unwrap()), "{name}: path");
        assert!(req.headers.is_empty(), "{name}: headers");
        assert!(expected_req["body"].is_null() && req.body.is_none(), "{name}: body");

        // Verify parse
        let sim = &case["simulated_response"];
        let response = HttpResponse {
            status: sim["status"].as_u64().unwrap() as u16,
            headers: Vec::new(),
            body: sim["body"].as_str().unwrap().as_bytes().to_vec(),
        };
        let result = client.parse_list_notas(response);
        let expected = &case["expected_result"];

        match expected["error"].as_str() {
            None => {
                let want: Vec<NotaTarea> = serde_json::from_value(expected["ok"].clone()).unwrap();
                let got = result.as_ref().unwrap();
                assert_eq!(got, &want, "{name}: parsed result");
            }
            Some("http") => {
                let status = expected["status"].as_u64().unwrap() as u16;
                assert!(
                    matches!(&result, Err(ApiError::HttpError { status: s, .. }) if *s == status),
                    "{name}: expected HTTP {status}, got {result:?}"
                );
            }
            Some("deserialization") => {
                assert!(
                    matches!(&result, Err(ApiError::DeserializationError(_))),
                    "{name}: expected deserialization error, got {result:?}"
                );
            }
            Some(other) => panic!("{name}: unknown error kind {other}"),
        }

        // Verify state mapping under the default policy
        let state = UiState::from_fetch(result, FailurePolicy::RecoverAll).unwrap();
        let want_state = expected["ui_state"].as_str().unwrap();
        match (want_state, &state) {
            ("Success", UiState::Success(_)) | ("Error", UiState::Error) => {}
            _ => panic!("{name}: expected {want_state}, got {state:?}"),
        }
    }
}
