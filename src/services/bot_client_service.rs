use anyhow::{anyhow, Context, Result};
use rand::Rng;
use reqwest::Client;
use std::{sync::Arc, time::Duration};

/// Reintentos máximos para las llamadas con retry
const MAX_RETRIES: u32 = 3;
/// Delay base del backoff exponencial
const BASE_DELAY: Duration = Duration::from_millis(500);
/// Tope del delay (sin contar jitter)
const MAX_DELAY: Duration = Duration::from_millis(3000);
/// Jitter uniforme que se suma a cada delay
const JITTER_MS: u64 = 100;

/// Política de reintentos contra el backend del bot: backoff exponencial
/// con jitter, delay acotado y número de intentos acotado.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub retries: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            retries: MAX_RETRIES,
            base_delay: BASE_DELAY,
            max_delay: MAX_DELAY,
        }
    }
}

impl RetryPolicy {
    /// `min(max_delay, base * 2^attempt) + jitter`
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let exp = self
            .base_delay
            .saturating_mul(2u32.saturating_pow(attempt))
            .min(self.max_delay);
        let jitter = rand::thread_rng().gen_range(0..JITTER_MS);
        exp + Duration::from_millis(jitter)
    }
}

/// Cliente HTTP hacia el backend externo del bot (status, start/stop,
/// task-runs). El backend es una dependencia remota opaca: las respuestas
/// se reenvían como JSON crudo.
#[derive(Clone)]
pub struct BotClientService {
    http_client: Client,
    base_url: Arc<String>,
    retry: RetryPolicy,
}

impl BotClientService {
    pub fn new(base_url: String) -> Self {
        Self {
            http_client: Client::new(),
            base_url: Arc::new(base_url.trim_end_matches('/').to_string()),
            retry: RetryPolicy::default(),
        }
    }

    // ----------------------------------------------------------------
    // Superficie proxy
    // ----------------------------------------------------------------

    /// Los polls de status/health van sin retry: el dashboard los repite solo.
    pub async fn bot_status(&self) -> Result<serde_json::Value> {
        self.get_json("/api/bot/status").await
    }

    pub async fn bot_health(&self) -> Result<serde_json::Value> {
        self.get_json("/api/bot/health").await
    }

    pub async fn start_bot(&self) -> Result<serde_json::Value> {
        self.post_json_with_retry("/api/bot/start", &serde_json::json!({}))
            .await
    }

    pub async fn stop_bot(&self) -> Result<serde_json::Value> {
        self.post_json_with_retry("/api/bot/stop", &serde_json::json!({}))
            .await
    }

    pub async fn list_task_runs(&self) -> Result<serde_json::Value> {
        self.get_json("/api/task-runs").await
    }

    pub async fn start_realtime_search(
        &self,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value> {
        self.post_json_with_retry("/api/realtime-leads/start", body)
            .await
    }

    pub async fn realtime_search_status(&self, run_id: &str) -> Result<serde_json::Value> {
        self.get_json(&format!("/api/realtime-leads/status/{}", run_id))
            .await
    }

    // ----------------------------------------------------------------
    // Transporte
    // ----------------------------------------------------------------

    async fn get_json(&self, path: &str) -> Result<serde_json::Value> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self
            .http_client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("No se pudo contactar {}", url))?;

        if !resp.status().is_success() {
            return Err(anyhow!("Backend respondió {} en {}", resp.status(), url));
        }
        resp.json().await.context("Respuesta no es JSON válido")
    }

    async fn post_json_with_retry(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value> {
        let url = format!("{}{}", self.base_url, path);

        let mut attempt = 0;
        loop {
            let result = async {
                let resp = self
                    .http_client
                    .post(&url)
                    .json(body)
                    .send()
                    .await
                    .with_context(|| format!("No se pudo contactar {}", url))?;
                if !resp.status().is_success() {
                    return Err(anyhow!("Backend respondió {} en {}", resp.status(), url));
                }
                resp.json::<serde_json::Value>()
                    .await
                    .context("Respuesta no es JSON válido")
            }
            .await;

            match result {
                Ok(value) => return Ok(value),
                Err(e) if attempt < self.retry.retries => {
                    let delay = self.retry.delay_for_attempt(attempt);
                    log::warn!(
                        "Intento {} contra {} falló: {}. Reintentando en {:?}",
                        attempt + 1,
                        url,
                        e,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
