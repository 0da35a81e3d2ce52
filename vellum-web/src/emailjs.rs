use anyhow::anyhow;
use async_trait::async_trait;
use vellum_client::{EmailConfig, EmailParams, Emailer};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    // Browser-global email widget, loaded by the page from its CDN.
    #[wasm_bindgen(catch, js_namespace = emailjs, js_name = init)]
    fn emailjs_init(public_key: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = emailjs, js_name = send)]
    fn emailjs_send(
        service_id: &str,
        template_id: &str,
        params: &JsValue,
    ) -> Result<js_sys::Promise, JsValue>;
}

fn js_error(value: JsValue) -> anyhow::Error {
    // Widget rejections carry a message field
    let message = js_sys::Reflect::get(&value, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .or_else(|| value.as_string())
        .unwrap_or_else(|| String::from("email widget error"));
    anyhow!("{}", message)
}

const INIT_RETRY_MS: u64 = 1000;
const INIT_ATTEMPTS: usize = 10;

/// [`Emailer`] bound to the browser-global widget.
pub struct EmailJs;

impl EmailJs {
    /// Initializes the widget, retrying once a second while its script is
    /// still loading. After the last attempt every send will fail and be
    /// logged by the dispatcher.
    pub fn init(config: &EmailConfig) {
        let public_key = config.public_key.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let mut last_error = None;
            for _ in 0..INIT_ATTEMPTS {
                match emailjs_init(&public_key) {
                    Ok(()) => return,
                    Err(e) => last_error = Some(js_error(e)),
                }
                crate::latency::sleep_ms(INIT_RETRY_MS).await;
            }
            let error = last_error.expect("at least one attempt was made");
            tracing::warn!(%error, "could not initialize email widget");
        });
    }
}

#[async_trait(?Send)]
impl Emailer for EmailJs {
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        params: &EmailParams,
    ) -> anyhow::Result<()> {
        let json = serde_json::to_string(params)?;
        let js_params = js_sys::JSON::parse(&json).map_err(js_error)?;
        let promise = emailjs_send(service_id, template_id, &js_params).map_err(js_error)?;
        wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map_err(js_error)?;
        Ok(())
    }
}
