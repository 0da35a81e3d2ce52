use anyhow::anyhow;
use async_trait::async_trait;
use parking_lot::Mutex;
use vellum_client::{EmailParams, Emailer};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SentEmail {
    pub service_id: String,
    pub template_id: String,
    pub params: EmailParams,
}

/// In-process stand-in for the browser email widget: records every send and
/// can be told to reject, so tests can exercise both dispatch outcomes
/// without any widget loaded.
#[derive(Debug, Default)]
pub struct MockEmailer {
    sent: Mutex<Vec<SentEmail>>,
    fail_with: Mutex<Option<String>>,
}

impl MockEmailer {
    pub fn new() -> MockEmailer {
        MockEmailer::default()
    }

    /// Makes every subsequent send reject with `message`.
    pub fn fail_with(&self, message: &str) {
        *self.fail_with.lock() = Some(message.to_string());
    }

    pub fn test_num_sent(&self) -> usize {
        self.sent.lock().len()
    }

    pub fn test_sent(&self) -> Vec<SentEmail> {
        self.sent.lock().clone()
    }
}

#[async_trait(?Send)]
impl Emailer for &MockEmailer {
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        params: &EmailParams,
    ) -> anyhow::Result<()> {
        if let Some(message) = self.fail_with.lock().clone() {
            return Err(anyhow!("{}", message));
        }
        self.sent.lock().push(SentEmail {
            service_id: service_id.to_string(),
            template_id: template_id.to_string(),
            params: params.clone(),
        });
        Ok(())
    }
}
