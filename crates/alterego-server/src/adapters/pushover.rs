//! Pushover Notifier
//!
//! Delivers notification events to the Pushover messages API using reqwest.
//! Failures are logged and reported as `DeliveryStatus::Failed`, never raised.

use async_trait::async_trait;
use reqwest::Client;

use alterego::{DeliveryStatus, DomainError, NotificationEvent, Notifier};

use crate::config::PushoverSettings;

/// Pushover implementation of Notifier
pub struct PushoverNotifier {
    client: Client,
    settings: PushoverSettings,
}

impl PushoverNotifier {
    pub fn new(settings: PushoverSettings) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .user_agent(concat!("Alterego/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DomainError::Configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client, settings })
    }

    async fn send(&self, event: &NotificationEvent) -> Result<(), DomainError> {
        // Pushover shows the time the event was raised, not when it arrived
        let timestamp = event.created_at.timestamp().to_string();
        let form = [
            ("token", self.settings.token.as_str()),
            ("user", self.settings.user.as_str()),
            ("title", event.title.as_str()),
            ("message", event.message.as_str()),
            ("timestamp", timestamp.as_str()),
        ];

        let response = self
            .client
            .post(&self.settings.url)
            .form(&form)
            .send()
            .await
            .map_err(|e| DomainError::Notification(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "No response body".to_string());
            Err(DomainError::Notification(format!(
                "HTTP {}: {}",
                status.as_u16(),
                body
            )))
        }
    }
}

#[async_trait]
impl Notifier for PushoverNotifier {
    async fn notify(&self, event: &NotificationEvent) -> DeliveryStatus {
        match self.send(event).await {
            Ok(()) => {
                tracing::info!(
                    title = %event.title,
                    raised_at = %event.created_at,
                    "Notification delivered"
                );
                DeliveryStatus::Delivered
            }
            Err(e) => {
                tracing::warn!(title = %event.title, error = %e, "Notification not delivered");
                DeliveryStatus::Failed(e.to_string())
            }
        }
    }

    fn name(&self) -> &str {
        "pushover"
    }
}

/// Notifier used when no push credentials are configured
#[derive(Debug, Default)]
pub struct DisabledNotifier;

#[async_trait]
impl Notifier for DisabledNotifier {
    async fn notify(&self, event: &NotificationEvent) -> DeliveryStatus {
        tracing::debug!(title = %event.title, message = %event.message, "Notifications disabled");
        DeliveryStatus::Skipped
    }

    fn name(&self) -> &str {
        "disabled"
    }
}
