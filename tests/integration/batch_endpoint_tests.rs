//! Batch endpoint integration tests
//!
//! Exercises the fan-out/partial-failure aggregation over stub generators.

#[cfg(test)]
mod tests {
    use crate::common::{generators::*, test_state, working_generators};
    use actix_web::{test, App};
    use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
    use polycraft_gateway::core::generators::Generators;
    use polycraft_gateway::server::routes;
    use serde_json::{json, Value};
    use std::sync::Arc;

    async fn call_batch(
        generators: Generators,
        body: Value,
    ) -> (actix_web::http::StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(test_state(generators))
                .configure(routes::configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/batch")
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    /// Outcome list matches input length and order for a mixed batch
    #[tokio::test]
    async fn test_outcomes_match_input_length_and_order() {
        let body = json!({
            "requests": [
                {"type": "image", "prompt": "sunset"},
                {"type": "bogus", "prompt": "x"},
                {"type": "text", "prompt": "explain gravity"}
            ]
        });

        let (status, response) = call_batch(working_generators(), body).await;

        assert!(status.is_success());
        assert_eq!(response["processed"], 3);
        let results = response["results"].as_array().unwrap();
        assert_eq!(results.len(), 3);

        assert_eq!(results[0]["status"], "success");
        assert_eq!(results[0]["result"]["type"], "image");
        assert_eq!(results[1]["status"], "error");
        assert_eq!(results[1]["error"], "Unsupported type: bogus");
        assert_eq!(results[2]["status"], "success");
        assert_eq!(results[2]["result"]["type"], "text");
    }

    /// Non-array `requests` fails the whole call with no results field
    #[tokio::test]
    async fn test_requests_must_be_an_array() {
        let body = json!({ "requests": 42 });
        let (status, response) = call_batch(working_generators(), body).await;

        assert_eq!(status.as_u16(), 400);
        assert_eq!(response["error"], "requests must be an array");
        assert!(response.get("results").is_none());
    }

    /// Missing `requests` key is a structural error
    #[tokio::test]
    async fn test_missing_requests_key() {
        let body = json!({ "items": [] });
        let (status, response) = call_batch(working_generators(), body).await;

        assert_eq!(status.as_u16(), 400);
        assert_eq!(response["error"], "requests must be an array");
    }

    /// Malformed JSON body is a structural error
    #[tokio::test]
    async fn test_malformed_json_body() {
        let app = test::init_service(
            App::new()
                .app_data(test_state(working_generators()))
                .configure(routes::configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/batch")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 400);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().contains("invalid JSON body"));
    }

    /// A simulated network failure yields a per-item error while a following
    /// item still succeeds
    #[tokio::test]
    async fn test_failure_isolation() {
        let generators = Generators::new(
            Arc::new(StubNetworkFailure),
            Arc::new(StubBinary::audio()),
            Arc::new(StubText),
        );
        let body = json!({
            "requests": [
                {"type": "image", "prompt": "will fail"},
                {"type": "text", "prompt": "still fine"}
            ]
        });

        let (status, response) = call_batch(generators, body).await;

        assert!(status.is_success());
        let results = response["results"].as_array().unwrap();
        assert_eq!(results[0]["status"], "error");
        assert!(results[0]["error"].as_str().unwrap().contains("503"));
        assert_eq!(results[1]["status"], "success");
    }

    /// Image outcomes carry a base64 payload plus content type; text outcomes
    /// carry plain text; both sit at their original positions
    #[tokio::test]
    async fn test_mixed_binary_and_text_normalization() {
        let body = json!({
            "requests": [
                {"type": "image", "prompt": "a lighthouse"},
                {"type": "text", "prompt": "explain tides"}
            ]
        });

        let (_, response) = call_batch(working_generators(), body).await;
        let results = response["results"].as_array().unwrap();

        let image = &results[0]["result"];
        assert_eq!(image["type"], "image");
        assert_eq!(image["image_base64"], BASE64.encode(b"fake-png-bytes"));
        assert_eq!(image["content_type"], "image/png");
        assert!(image.get("text").is_none());

        let text = &results[1]["result"];
        assert_eq!(text["type"], "text");
        assert_eq!(text["text"], "stub response about explain tides");
        assert!(text.get("image_base64").is_none());
    }

    /// Audio outcomes use the audio_base64 key
    #[tokio::test]
    async fn test_audio_normalization() {
        let body = json!({
            "requests": [{"type": "audio", "prompt": "say hello"}]
        });

        let (_, response) = call_batch(working_generators(), body).await;
        let audio = &response["results"][0]["result"];

        assert_eq!(audio["type"], "audio");
        assert_eq!(audio["audio_base64"], BASE64.encode(b"fake-wav-bytes"));
        assert_eq!(audio["content_type"], "audio/wav");
    }

    /// A deferred TTS upstream becomes a per-item error, not a crash
    #[tokio::test]
    async fn test_deferred_audio_is_item_error() {
        let generators = Generators::new(
            Arc::new(StubBinary::image()),
            Arc::new(StubDeferredAudio),
            Arc::new(StubText),
        );
        let body = json!({
            "requests": [
                {"type": "audio", "prompt": "speak"},
                {"type": "text", "prompt": "hello"}
            ]
        });

        let (status, response) = call_batch(generators, body).await;

        assert!(status.is_success());
        let results = response["results"].as_array().unwrap();
        assert_eq!(results[0]["status"], "error");
        assert!(results[0]["error"]
            .as_str()
            .unwrap()
            .contains("Audio generation temporarily unavailable"));
        assert_eq!(results[1]["status"], "success");
    }

    /// The call succeeds with a full-length report even when every item fails
    #[tokio::test]
    async fn test_overall_success_when_all_items_fail() {
        let generators = Generators::new(
            Arc::new(StubNetworkFailure),
            Arc::new(StubNetworkFailure),
            Arc::new(StubText),
        );
        let body = json!({
            "requests": [
                {"type": "image", "prompt": "a"},
                {"type": "audio", "prompt": "b"}
            ]
        });

        let (status, response) = call_batch(generators, body).await;

        assert!(status.is_success());
        assert_eq!(response["processed"], 2);
        let results = response["results"].as_array().unwrap();
        assert!(results.iter().all(|r| r["status"] == "error"));
    }

    /// An empty batch produces an empty report with a timestamp
    #[tokio::test]
    async fn test_empty_batch() {
        let body = json!({ "requests": [] });
        let (status, response) = call_batch(working_generators(), body).await;

        assert!(status.is_success());
        assert_eq!(response["processed"], 0);
        assert_eq!(response["results"].as_array().unwrap().len(), 0);
        assert!(response["timestamp"].is_string());
    }

    /// Two identical all-text batches return equal-length, equal-order
    /// outcome lists even though the template pick is randomized
    #[tokio::test]
    async fn test_repeated_batches_have_stable_shape() {
        use polycraft_gateway::core::generators::TextGenerator;

        let make_generators = || {
            Generators::new(
                Arc::new(StubBinary::image()),
                Arc::new(StubBinary::audio()),
                Arc::new(TextGenerator::new()),
            )
        };
        let body = json!({
            "requests": [
                {"type": "text", "prompt": "tell me a story"},
                {"type": "text", "prompt": "explain gravity"}
            ]
        });

        let (_, first) = call_batch(make_generators(), body.clone()).await;
        let (_, second) = call_batch(make_generators(), body).await;

        assert_eq!(first["processed"], second["processed"]);
        let first_results = first["results"].as_array().unwrap();
        let second_results = second["results"].as_array().unwrap();
        assert_eq!(first_results.len(), second_results.len());
        for (a, b) in first_results.iter().zip(second_results.iter()) {
            assert_eq!(a["status"], b["status"]);
            assert_eq!(a["result"]["type"], b["result"]["type"]);
        }
    }
}
