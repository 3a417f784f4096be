//! Critical error alerting layer for tracing.
//!
//! Intercepts ERROR-level events and forwards them to a configured sink.
//! Data-corruption failures in the timeline pipeline are logged at ERROR and
//! therefore always reach an operator.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{Event, Subscriber};
use tracing_subscriber::{Layer, layer::Context};

/// One alert, extracted from a tracing event.
#[derive(Debug, Clone)]
pub struct AlertMessage {
    pub message: String,
    pub target: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub fields: Vec<(String, String)>,
}

/// Alert sink - implement for different backends.
#[async_trait::async_trait]
pub trait AlertSender: Send + Sync {
    async fn send(&self, alert: AlertMessage) -> Result<(), AlertError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AlertError {
    #[error("Failed to send alert: {0}")]
    Send(String),
}

/// Writes alerts to stderr - for development.
pub struct ConsoleAlertSender;

#[async_trait::async_trait]
impl AlertSender for ConsoleAlertSender {
    async fn send(&self, alert: AlertMessage) -> Result<(), AlertError> {
        eprintln!(
            "CRITICAL ALERT [{}] {} ({})",
            alert.target, alert.message, alert.timestamp
        );
        Ok(())
    }
}

/// Posts alerts to a webhook URL (Slack, Discord, etc.).
pub struct WebhookAlertSender {
    url: String,
    client: reqwest::Client,
}

impl WebhookAlertSender {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl AlertSender for WebhookAlertSender {
    async fn send(&self, alert: AlertMessage) -> Result<(), AlertError> {
        let payload = serde_json::json!({
            "text": format!(
                "*CRITICAL ERROR*\n*Target:* {}\n*Message:* {}\n*Time:* {}",
                alert.target, alert.message, alert.timestamp
            )
        });

        self.client
            .post(&self.url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| AlertError::Send(e.to_string()))?;

        Ok(())
    }
}

/// Tracing layer that dispatches ERROR-level events to an `AlertSender`.
pub struct AlertLayer {
    sender: mpsc::Sender<AlertMessage>,
}

impl AlertLayer {
    /// Create a new alert layer with the given sink.
    pub fn new(alert_sender: Arc<dyn AlertSender>) -> Self {
        let (tx, mut rx) = mpsc::channel::<AlertMessage>(100);

        // Dispatch off the hot path
        tokio::spawn(async move {
            while let Some(alert) = rx.recv().await {
                if let Err(e) = alert_sender.send(alert).await {
                    eprintln!("Failed to send alert: {}", e);
                }
            }
        });

        Self { sender: tx }
    }

    /// Alert layer that logs to the console.
    pub fn console() -> Self {
        Self::new(Arc::new(ConsoleAlertSender))
    }

    /// Alert layer that posts to a webhook.
    pub fn webhook(url: String) -> Self {
        Self::new(Arc::new(WebhookAlertSender::new(url)))
    }
}

/// Visitor to extract the message and fields from an event.
struct FieldVisitor {
    message: String,
    fields: Vec<(String, String)>,
}

impl FieldVisitor {
    fn new() -> Self {
        Self {
            message: String::new(),
            fields: Vec::new(),
        }
    }
}

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.fields
                .push((field.name().to_string(), format!("{:?}", value)));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields
                .push((field.name().to_string(), value.to_string()));
        }
    }
}

impl<S> Layer<S> for AlertLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() != tracing::Level::ERROR {
            return;
        }

        let mut visitor = FieldVisitor::new();
        event.record(&mut visitor);

        let alert = AlertMessage {
            message: visitor.message,
            target: event.metadata().target().to_string(),
            timestamp: chrono::Utc::now(),
            fields: visitor.fields,
        };

        // Non-blocking send; dropping an alert beats stalling the subscriber
        let _ = self.sender.try_send(alert);
    }
}
