//! Notification transports and their delivery results.

use std::time::Duration;

use crate::domain::Alert;
use crate::{AlertError, Result};

/// Environment variable holding the webhook relay URL
pub const WEBHOOK_URL_ENV: &str = "ACCIALERT_WEBHOOK_URL";

/// Environment variable holding the optional webhook bearer token
pub const WEBHOOK_TOKEN_ENV: &str = "ACCIALERT_WEBHOOK_TOKEN";

/// Error raised by a notification transport.
///
/// Always recovered locally by the dispatcher; it never reaches the caller
/// of an evaluation.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// Transport-level failure with a human-readable reason
    #[error("transport failure: {0}")]
    Transport(String),

    /// HTTP request failed
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Relay answered with a non-success status
    #[error("relay rejected alert with status {0}")]
    Rejected(reqwest::StatusCode),
}

/// Outcome of one delivery attempt through one transport.
///
/// Delivery is fire-and-forget: a failed attempt is reported and never
/// retried, and re-dispatching the same alert is a distinct attempt.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NotificationResult {
    /// Transport that made the attempt
    pub channel: String,
    /// Whether the transport reported success
    pub delivered: bool,
    /// Human-readable outcome
    pub detail: String,
}

impl NotificationResult {
    /// Result for a successful delivery
    pub fn delivered(channel: &str, detail: impl Into<String>) -> Self {
        Self {
            channel: channel.to_string(),
            delivered: true,
            detail: detail.into(),
        }
    }

    /// Result for a failed delivery
    pub fn failed(channel: &str, detail: impl Into<String>) -> Self {
        Self {
            channel: channel.to_string(),
            delivered: false,
            detail: detail.into(),
        }
    }
}

/// A notification transport.
///
/// Implementations deliver one alert through one channel. They may fail
/// with [`NotifyError`]; the dispatcher converts every outcome into a
/// [`NotificationResult`] and applies the configured timeout.
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    /// Transport name used in results and logs
    fn name(&self) -> &str;

    /// Deliver an alert
    async fn notify(&self, alert: &Alert) -> std::result::Result<(), NotifyError>;
}

/// Transport that prints alerts to standard output
pub struct ConsoleNotifier;

#[async_trait::async_trait]
impl Notifier for ConsoleNotifier {
    fn name(&self) -> &str {
        "console"
    }

    async fn notify(&self, alert: &Alert) -> std::result::Result<(), NotifyError> {
        let payload = alert.payload();

        println!("\n{} ALERT {}", alert.priority(), "=".repeat(50));
        println!("ID: {}", alert.id());
        println!("Vehicle: {}", alert.vehicle_id());
        println!("Severity: {}", payload.severity);
        println!("{}", "=".repeat(60));
        println!("{}", payload.message);
        println!("Map: {}", payload.map_link);
        for action in &payload.recommended_actions {
            println!("  - {}", action);
        }
        println!("{}\n", "=".repeat(60));

        Ok(())
    }
}

/// Configuration for the webhook relay transport.
///
/// The relay URL and credentials come from the environment, never from
/// code: the relay is the boundary behind which the concrete delivery
/// mechanism (an email gateway, an SMS bridge) lives.
#[derive(Debug, Clone)]
pub struct WebhookConfig {
    /// Relay endpoint receiving the JSON alert
    pub url: String,
    /// Optional bearer token sent with each request
    pub auth_token: Option<String>,
}

impl WebhookConfig {
    /// Read the configuration from `ACCIALERT_WEBHOOK_URL` and
    /// `ACCIALERT_WEBHOOK_TOKEN`.
    pub fn from_env() -> Result<Self> {
        let url = std::env::var(WEBHOOK_URL_ENV)
            .map_err(|_| AlertError::Config(format!("{} is not set", WEBHOOK_URL_ENV)))?;
        let auth_token = std::env::var(WEBHOOK_TOKEN_ENV).ok();
        Ok(Self { url, auth_token })
    }
}

/// Transport that posts the alert as JSON to an external relay
pub struct WebhookNotifier {
    config: WebhookConfig,
    client: reqwest::Client,
}

impl WebhookNotifier {
    /// Create a transport for the given relay
    pub fn new(config: WebhookConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Create a transport configured from the environment
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(WebhookConfig::from_env()?))
    }

    fn wire_payload(alert: &Alert) -> serde_json::Value {
        let payload = alert.payload();
        serde_json::json!({
            "alert_id": alert.id().to_string(),
            "vehicle_id": alert.vehicle_id().as_str(),
            "kind": alert.kind().to_string(),
            "priority": alert.priority().to_string(),
            "severity": payload.severity.value(),
            "latitude": payload.location.latitude,
            "longitude": payload.location.longitude,
            "map_link": payload.map_link,
            "title": payload.title,
            "message": payload.message,
            "created_at": alert.created_at().to_rfc3339(),
        })
    }
}

#[async_trait::async_trait]
impl Notifier for WebhookNotifier {
    fn name(&self) -> &str {
        "webhook"
    }

    async fn notify(&self, alert: &Alert) -> std::result::Result<(), NotifyError> {
        let mut request = self
            .client
            .post(&self.config.url)
            .json(&Self::wire_payload(alert));

        if let Some(token) = &self.config.auth_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(NotifyError::Rejected(response.status()));
        }
        Ok(())
    }
}

/// Reasonable default for a single transport attempt
pub(crate) const DEFAULT_NOTIFY_TIMEOUT: Duration = Duration::from_secs(10);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AlertKind, AlertPayload, GeoLocation, Severity, VehicleId};

    fn test_alert() -> Alert {
        let location = GeoLocation::new(12.9716, 77.5946).unwrap();
        let payload = AlertPayload::new(
            "Accident Alert",
            "Vehicle accident detected",
            Severity::new(9),
            location,
        );
        Alert::new(VehicleId::default(), AlertKind::Impact, payload)
    }

    #[test]
    fn test_wire_payload_fields() {
        let alert = test_alert();
        let wire = WebhookNotifier::wire_payload(&alert);

        assert_eq!(wire["vehicle_id"], "VH-2024-001");
        assert_eq!(wire["severity"], 9);
        assert_eq!(wire["priority"], "CRITICAL");
        assert_eq!(wire["kind"], "IMPACT");
        assert!((wire["latitude"].as_f64().unwrap() - 12.9716).abs() < 1e-9);
        assert!(wire["map_link"]
            .as_str()
            .unwrap()
            .starts_with("https://www.google.com/maps?q="));
    }

    #[test]
    fn test_webhook_config_requires_url() {
        std::env::remove_var(WEBHOOK_URL_ENV);
        let err = WebhookConfig::from_env().unwrap_err();
        assert!(matches!(err, AlertError::Config(_)));
    }

    #[tokio::test]
    async fn test_console_notifier_delivers() {
        let result = ConsoleNotifier.notify(&test_alert()).await;
        assert!(result.is_ok());
    }

    #[test]
    fn test_result_constructors() {
        let ok = NotificationResult::delivered("console", "printed");
        assert!(ok.delivered);
        assert_eq!(ok.channel, "console");

        let failed = NotificationResult::failed("webhook", "connection refused");
        assert!(!failed.delivered);
        assert_eq!(failed.detail, "connection refused");
    }
}
