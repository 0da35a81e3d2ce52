use vellum_client::{api::ContactMessage, DispatchOutcome, Dispatcher, EmailConfig};
use yew::prelude::*;

use crate::{emailjs::EmailJs, latency};

const SUBJECTS: &[&str] = &[
    "General Inquiry",
    "Collaboration",
    "Security Research",
    "Speaking Request",
    "Other",
];

#[derive(Clone, PartialEq, Properties)]
pub struct ContactFormProps {}

pub struct ContactForm {
    name: String,
    email: String,
    subject: String,
    message: String,
    newsletter: bool,
    busy: bool,
    status: Option<(String, bool)>,
}

pub enum ContactFormMsg {
    NameChanged(String),
    EmailChanged(String),
    SubjectChanged(String),
    MessageChanged(String),
    NewsletterToggled,
    SubmitClicked,
    SubmissionDone(DispatchOutcome),
    StatusTimeout,
}

impl ContactForm {
    fn show_status(&mut self, ctx: &Context<Self>, message: impl Into<String>, error: bool) {
        self.status = Some((message.into(), error));
        ctx.link().send_future(async {
            latency::sleep_ms(latency::STATUS_MS).await;
            ContactFormMsg::StatusTimeout
        });
    }
}

impl Component for ContactForm {
    type Message = ContactFormMsg;
    type Properties = ContactFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            subject: String::new(),
            message: String::new(),
            newsletter: false,
            busy: false,
            status: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactFormMsg::NameChanged(n) => self.name = n,
            ContactFormMsg::EmailChanged(e) => self.email = e,
            ContactFormMsg::SubjectChanged(s) => self.subject = s,
            ContactFormMsg::MessageChanged(m) => self.message = m,
            ContactFormMsg::NewsletterToggled => self.newsletter = !self.newsletter,
            ContactFormMsg::SubmitClicked => {
                if self.busy {
                    return false;
                }
                let contact = ContactMessage {
                    name: self.name.clone(),
                    email: self.email.clone(),
                    subject: self.subject.clone(),
                    message: self.message.clone(),
                    newsletter: self.newsletter,
                };
                if let Err(e) = contact.validate() {
                    self.show_status(ctx, e.to_string(), true);
                    return true;
                }
                self.busy = true;
                ctx.link().send_future(async move {
                    let dispatcher = Dispatcher::new(EmailJs, EmailConfig::default());
                    let outcome = dispatcher.notify_contact(&contact).await;
                    latency::sleep_ms(latency::CONTACT_LATENCY_MS).await;
                    ContactFormMsg::SubmissionDone(outcome)
                });
            }
            ContactFormMsg::SubmissionDone(outcome) => {
                self.busy = false;
                // The message is accepted either way; the notification is
                // best-effort and its failure is not the sender's problem.
                let status = match outcome.success {
                    true => {
                        "Thank you for your message! Your email has been sent and \
                         I'll get back to you within 24 hours."
                    }
                    false => {
                        "Thank you for your message! Your form has been submitted \
                         successfully."
                    }
                };
                self.show_status(ctx, status, false);
                self.name.clear();
                self.email.clear();
                self.subject.clear();
                self.message.clear();
                self.newsletter = false;
            }
            ContactFormMsg::StatusTimeout => self.status = None,
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        macro_rules! callback_for {
            ($msg:ident) => {
                ctx.link().callback(|e: web_sys::Event| {
                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                    ContactFormMsg::$msg(input.value())
                })
            };
        }
        let on_subject = ctx.link().callback(|e: web_sys::Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            ContactFormMsg::SubjectChanged(select.value())
        });
        let on_message = ctx.link().callback(|e: web_sys::Event| {
            let area: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            ContactFormMsg::MessageChanged(area.value())
        });
        let button_label = match self.busy {
            true => "Sending...",
            false => "Send Message",
        };
        html! {
            <form class="contact-form">
                <h2>{ "Get in Touch" }</h2>
                <div class="form-row">
                    <input
                        type="text"
                        placeholder="Your name"
                        value={self.name.clone()}
                        onchange={callback_for!(NameChanged)}
                    />
                    <input
                        type="email"
                        placeholder="Your email"
                        value={self.email.clone()}
                        onchange={callback_for!(EmailChanged)}
                    />
                </div>
                <select value={self.subject.clone()} onchange={on_subject}>
                    <option value="" selected={self.subject.is_empty()}>
                        { "Select a subject" }
                    </option>
                    { for SUBJECTS.iter().map(|s| html! {
                        <option value={*s} selected={self.subject == *s}>{ s }</option>
                    }) }
                </select>
                <textarea
                    placeholder="Your message"
                    value={self.message.clone()}
                    onchange={on_message}
                >
                </textarea>
                <label class="newsletter-opt-in">
                    <input
                        type="checkbox"
                        checked={self.newsletter}
                        onchange={ctx.link().callback(|_| ContactFormMsg::NewsletterToggled)}
                    />
                    { "Subscribe to the newsletter" }
                </label>
                <button
                    type="button"
                    class="btn btn-primary"
                    disabled={self.busy}
                    onclick={ctx.link().callback(|_| ContactFormMsg::SubmitClicked)}
                >
                    { button_label }
                </button>
                if let Some((message, error)) = &self.status {
                    <p class={classes!("form-status", error.then(|| "form-status-error"))}>
                        { message }
                    </p>
                }
            </form>
        }
    }
}
