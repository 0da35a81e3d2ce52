use async_trait::async_trait;
use vellum_client::Latency;

pub const SUBMIT_LATENCY_MS: u64 = 1500;
pub const CONTACT_LATENCY_MS: u64 = 1500;
pub const TOAST_MS: u64 = 3000;
pub const STATUS_MS: u64 = 5000;

pub async fn sleep_ms(ms: u64) {
    wasm_timer::Delay::new(std::time::Duration::from_millis(ms))
        .await
        .expect("failed sleeping");
}

/// Submission pause that keeps the posting indicator visible long enough to
/// be perceived.
pub struct NetworkLatency;

#[async_trait(?Send)]
impl Latency for NetworkLatency {
    async fn wait(&self) {
        sleep_ms(SUBMIT_LATENCY_MS).await;
    }
}
