//! Health endpoint tests

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};
    use polycraft_gateway::server::handlers::health_check;
    use serde_json::Value;

    /// Health endpoint reports a healthy status with a timestamp
    #[tokio::test]
    async fn test_health_check() {
        let app = test::init_service(
            App::new().route("/health", web::get().to(health_check)),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
        assert!(body["timestamp"].is_string());
        assert!(body["version"].is_string());
    }
}
