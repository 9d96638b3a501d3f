use std::sync::Arc;

use async_trait::async_trait;
use tokio::{runtime::Handle, sync::mpsc, task::JoinHandle};
use tracing::{info, warn};

use crate::{config::EmailConfig, error::EmailError, model::UiEvent};


pub const SEND_FAILED_NOTICE: &str = "Failed to send message. Try again!";


// Fields of the contact form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

// Transactional email provider addressed by a service/template pair
#[async_trait]
pub trait EmailService: Send + Sync {
    async fn send_form(
        &self,
        service_id: &str,
        template_id: &str,
        form: &ContactForm,
    ) -> Result<(), EmailError>;
}

// Stand-in provider: logs the form, refuses placeholder identifiers
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingEmailService;


impl ContactForm {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}


#[async_trait]
impl EmailService for LoggingEmailService {
    async fn send_form(
        &self,
        service_id: &str,
        template_id: &str,
        form: &ContactForm,
    ) -> Result<(), EmailError> {
        if service_id.starts_with("YOUR_") || template_id.starts_with("YOUR_") {
            return Err(EmailError::NotConfigured {
                service_id: service_id.to_string(),
                template_id: template_id.to_string(),
            });
        }
        info!(service_id, template_id, from = %form.email, "contact form delivered");
        Ok(())
    }
}


pub fn sent_notice(contact_address: &str) -> String {
    format!("Message sent successfully via {}!", contact_address)
}


// Fire-and-forget send; the outcome comes back as a `ContactSent` event.
// Without a runtime to run on, the send fails at once instead.
pub fn submit(
    service: Arc<dyn EmailService>,
    email: &EmailConfig,
    form: ContactForm,
    events: mpsc::UnboundedSender<UiEvent>,
) -> Option<JoinHandle<()>> {
    let Ok(runtime) = Handle::try_current() else {
        warn!("no async runtime, contact form not sent");
        let _ = events.send(UiEvent::ContactSent(Err(EmailError::Transport(
            "no async runtime".to_string(),
        ))));
        return None;
    };

    let service_id = email.service_id.clone();
    let template_id = email.template_id.clone();
    Some(runtime.spawn(async move {
        let result = service.send_form(&service_id, &template_id, &form).await;
        // The loop may already be gone; nothing to report to then.
        let _ = events.send(UiEvent::ContactSent(result));
    }))
}


#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ContactForm {
        ContactForm::new("Ayesha", "ayesha@example.com", "Do you cater events?")
    }

    #[tokio::test]
    async fn placeholder_ids_fail() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        submit(Arc::new(LoggingEmailService), &EmailConfig::default(), form(), tx)
            .unwrap()
            .await
            .unwrap();

        match rx.recv().await {
            Some(UiEvent::ContactSent(Err(EmailError::NotConfigured { service_id, .. }))) => {
                assert_eq!(service_id, "YOUR_SERVICE_ID");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn configured_ids_succeed() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let email = EmailConfig {
            service_id: "service_snacknest".to_string(),
            template_id: "template_contact".to_string(),
        };
        submit(Arc::new(LoggingEmailService), &email, form(), tx)
            .unwrap()
            .await
            .unwrap();
        assert_eq!(rx.recv().await, Some(UiEvent::ContactSent(Ok(()))));
    }

    #[test]
    fn without_runtime_reports_transport_failure() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        assert!(submit(Arc::new(LoggingEmailService), &EmailConfig::default(), form(), tx).is_none());
        assert_eq!(
            rx.try_recv().ok(),
            Some(UiEvent::ContactSent(Err(EmailError::Transport(
                "no async runtime".to_string()
            ))))
        );
    }

    #[test]
    fn clearing_blanks_every_field() {
        let mut f = form();
        assert!(!f.is_blank());
        f.clear();
        assert!(f.is_blank());
    }
}
