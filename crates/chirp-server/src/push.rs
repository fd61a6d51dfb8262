use reqwest::Client;
use tracing::{info, warn};

/// Best-effort client for the external push-notification service.
///
/// Outcomes never surface to the original caller: the response status is
/// logged, transport errors are swallowed with a warning, and there are no
/// retries. A dead push service must not change a response already decided
/// by the post/vote outcome.
#[derive(Clone)]
pub struct PushClient {
    client: Client,
    base_url: String,
}

impl PushClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// POST `{base_url}/push` with the chirp id as a JSON body.
    pub async fn notify(&self, chirp_id: i64) {
        let url = format!("{}/push", self.base_url);
        let result = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "chirp_id": chirp_id }))
            .send()
            .await;

        match result {
            Ok(resp) => info!("Push response for chirp {}: {}", chirp_id, resp.status()),
            Err(e) => warn!("Push request for chirp {} failed: {}", chirp_id, e),
        }
    }
}
