mod emailjs;
mod latency;
mod posts;
mod storage;
mod ui;

fn main() {
    tracing_wasm::set_as_global_default();
    emailjs::EmailJs::init(&vellum_client::EmailConfig::default());
    yew::Renderer::<ui::App>::new().render();
}
