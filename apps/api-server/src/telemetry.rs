//! Tracing and alert wiring.
//!
//! The timeline pipeline logs corrupt store records and upstream outages at
//! ERROR; everything set up here exists to make sure those events reach an
//! operator. Cache faults stay at WARN and are only visible in the logs.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::observability::AlertLayer;

/// Log and alert settings, read once at startup.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Emit JSON log lines instead of the human-readable format.
    pub json_output: bool,
    /// Service name attached to the startup log line.
    pub service_name: String,
    /// Forward ERROR events to an alert sink.
    pub alerts_enabled: bool,
    /// Webhook to post alerts to; stderr when unset.
    pub alert_webhook_url: Option<String>,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            json_output: false,
            service_name: "chirp-api".to_string(),
            alerts_enabled: true,
            alert_webhook_url: None,
        }
    }
}

impl TelemetryConfig {
    /// Load settings from `LOG_FORMAT`, `SERVICE_NAME`, `ALERTS_ENABLED`,
    /// and `ALERT_WEBHOOK_URL`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            json_output: std::env::var("LOG_FORMAT")
                .map(|v| v.eq_ignore_ascii_case("json"))
                .unwrap_or(defaults.json_output),
            service_name: std::env::var("SERVICE_NAME").unwrap_or(defaults.service_name),
            alerts_enabled: std::env::var("ALERTS_ENABLED")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(defaults.alerts_enabled),
            alert_webhook_url: std::env::var("ALERT_WEBHOOK_URL").ok(),
        }
    }

    /// The alert sink this configuration asks for, if any.
    fn alert_layer(&self) -> Option<AlertLayer> {
        if !self.alerts_enabled {
            return None;
        }
        Some(match &self.alert_webhook_url {
            Some(url) => AlertLayer::webhook(url.clone()),
            None => AlertLayer::console(),
        })
    }
}

/// Install the global subscriber: env filter, a fmt layer in the configured
/// format, and the alert layer when enabled.
pub fn init(config: &TelemetryConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,api_server=debug,chirp_infra=debug"));

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(config.alert_layer());

    if config.json_output {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer().pretty()).init();
    }

    tracing::info!(
        service = %config.service_name,
        json_output = config.json_output,
        alerts_enabled = config.alerts_enabled,
        "Telemetry initialized"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn defaults_keep_alerts_on_and_logs_readable() {
        let config = TelemetryConfig::default();
        assert!(!config.json_output);
        assert!(config.alerts_enabled);
        assert!(config.alert_layer().is_some());
    }

    #[test]
    fn disabled_alerts_build_no_layer() {
        let config = TelemetryConfig {
            alerts_enabled: false,
            ..TelemetryConfig::default()
        };
        assert!(config.alert_layer().is_none());
    }
}
