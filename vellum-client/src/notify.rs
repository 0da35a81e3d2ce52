use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;

use crate::api::{Comment, ContactMessage};

/// Parameter record handed to the email widget; serializes to the flat JSON
/// object the widget's `send` operation expects.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Serialize)]
pub struct EmailParams(BTreeMap<String, String>);

impl EmailParams {
    pub fn insert(&mut self, key: &str, value: impl Into<String>) {
        self.0.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(|v| v as &str)
    }
}

/// Contract of the external email-sending widget. The web frontend binds
/// this to the browser-global widget; tests use a recording mock.
#[async_trait(?Send)]
pub trait Emailer {
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        params: &EmailParams,
    ) -> anyhow::Result<()>;
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmailConfig {
    pub service_id: String,
    pub contact_template_id: String,
    pub comment_template_id: String,
    pub public_key: String,
    pub admin_email: String,
}

impl Default for EmailConfig {
    fn default() -> EmailConfig {
        EmailConfig {
            service_id: String::from("service_vellum_blog"),
            contact_template_id: String::from("template_contact"),
            comment_template_id: String::from("template_comment"),
            public_key: String::from("public_key_unset"),
            admin_email: String::from("admin@example.org"),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DispatchOutcome {
    pub success: bool,
    pub error: Option<String>,
}

/// Best-effort bridge to the email widget. A failed send is logged and
/// reported in the outcome; it never propagates, blocks or rolls back the
/// submission that triggered it.
pub struct Dispatcher<E> {
    emailer: E,
    config: EmailConfig,
}

impl<E: Emailer> Dispatcher<E> {
    pub fn new(emailer: E, config: EmailConfig) -> Dispatcher<E> {
        Dispatcher { emailer, config }
    }

    pub async fn notify_comment(
        &self,
        comment: &Comment,
        post_title: &str,
        post_url: &str,
    ) -> DispatchOutcome {
        let mut params = EmailParams::default();
        params.insert("to_email", &self.config.admin_email as &str);
        params.insert("from_name", "Vellum Blog System");
        params.insert("subject", format!("New Comment on: {}", post_title));
        params.insert("post_title", post_title);
        params.insert("post_url", post_url);
        params.insert("commenter_name", &comment.name as &str);
        params.insert("commenter_email", &comment.email as &str);
        params.insert("comment_message", &comment.message as &str);
        params.insert("comment_date", comment.timestamp.to_rfc2822());
        params.insert("notification_type", "New Comment");
        self.dispatch(&self.config.comment_template_id, params).await
    }

    pub async fn notify_contact(&self, contact: &ContactMessage) -> DispatchOutcome {
        let mut params = EmailParams::default();
        params.insert("to_email", &self.config.admin_email as &str);
        params.insert("from_name", "Vellum Blog Contact Form");
        params.insert("subject", format!("New Contact Message: {}", contact.subject));
        params.insert("sender_name", &contact.name as &str);
        params.insert("sender_email", &contact.email as &str);
        params.insert("message_subject", &contact.subject as &str);
        params.insert("message_content", &contact.message as &str);
        params.insert("submission_date", Utc::now().to_rfc2822());
        params.insert("notification_type", "Contact Form");
        params.insert(
            "newsletter_subscribe",
            match contact.newsletter {
                true => "Yes",
                false => "No",
            },
        );
        self.dispatch(&self.config.contact_template_id, params).await
    }

    async fn dispatch(&self, template_id: &str, params: EmailParams) -> DispatchOutcome {
        match self
            .emailer
            .send(&self.config.service_id, template_id, &params)
            .await
        {
            Ok(()) => {
                tracing::debug!(template = template_id, "email notification sent");
                DispatchOutcome {
                    success: true,
                    error: None,
                }
            }
            Err(e) => {
                tracing::warn!(template = template_id, error = %e, "failed to send email notification");
                DispatchOutcome {
                    success: false,
                    error: Some(e.to_string()),
                }
            }
        }
    }
}
