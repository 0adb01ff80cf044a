//! tests/bot_client_tests.rs
//! Pruebas del retry/backoff y del filtrado de canales hacia el bot.

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::models::bot_model::filter_supported_channels;
    use crate::services::bot_client_service::RetryPolicy;

    #[test]
    fn test_backoff_grows_exponentially_with_cap() {
        let policy = RetryPolicy::default();

        // min(3000, 500 * 2^n) + jitter en [0, 100)
        let expected_base = [500u64, 1000, 2000, 3000];
        for (attempt, base) in expected_base.iter().enumerate() {
            let delay = policy.delay_for_attempt(attempt as u32);
            assert!(
                delay >= Duration::from_millis(*base),
                "attempt {}: {:?} por debajo del base",
                attempt,
                delay
            );
            assert!(
                delay < Duration::from_millis(base + 100),
                "attempt {}: {:?} excede base + jitter",
                attempt,
                delay
            );
        }
    }

    #[test]
    fn test_backoff_never_exceeds_cap_plus_jitter() {
        let policy = RetryPolicy::default();
        for attempt in 0..10 {
            let delay = policy.delay_for_attempt(attempt);
            assert!(delay < Duration::from_millis(3100), "attempt {}", attempt);
        }
    }

    #[test]
    fn test_retry_count_is_bounded() {
        assert_eq!(RetryPolicy::default().retries, 3);
    }

    #[test]
    fn test_filter_supported_channels() {
        let input = vec![
            "WhatsApp".to_string(),
            " email ".to_string(),
            "other:LinkedIn".to_string(),
            "fax".to_string(),
            "email".to_string(),
        ];
        assert_eq!(filter_supported_channels(&input), vec!["whatsapp", "email"]);
    }

    #[test]
    fn test_filter_empty_stays_empty() {
        // El default de canales lo aplica el backend, no el proxy
        assert!(filter_supported_channels(&[]).is_empty());
        assert!(filter_supported_channels(&["other:Fax".to_string()]).is_empty());
    }

    mod endpoint {
        use actix_rt::test;
        use actix_web::{
            http::StatusCode,
            test::{call_service, init_service, read_body_json, TestRequest},
            web, App,
        };
        use serde_json::{json, Value};

        use crate::app;
        use crate::services::bot_client_service::BotClientService;

        #[test]
        async fn test_start_task_run_requires_niche() {
            // La validación corta antes de tocar la red
            let app = init_service(
                App::new()
                    .app_data(web::Data::new(BotClientService::new(
                        "http://127.0.0.1:9".to_string(),
                    )))
                    .configure(app::init_app),
            )
            .await;

            let req = TestRequest::post()
                .uri("/api/bot/task-runs")
                .set_json(json!({"channels": ["email"]}))
                .to_request();
            let resp = call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

            let err: Value = read_body_json(resp).await;
            assert_eq!(err["error"], "Missing 'niche'");
        }
    }
}
