//! Alert dispatching and delivery.

use std::time::Duration;

use crate::domain::Alert;

use super::notifier::{NotificationResult, Notifier, DEFAULT_NOTIFY_TIMEOUT};

/// Configuration for alert dispatch
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    /// Upper bound for one transport attempt
    pub notify_timeout: Duration,
    /// Maximum dispatch records kept for session inspection
    pub history_cap: usize,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            notify_timeout: DEFAULT_NOTIFY_TIMEOUT,
            history_cap: 32,
        }
    }
}

/// One dispatched alert with the per-transport outcomes
#[derive(Debug, Clone)]
pub struct DispatchRecord {
    /// The alert that was dispatched
    pub alert: Alert,
    /// Outcome per registered transport
    pub results: Vec<NotificationResult>,
}

/// Dispatcher fanning an alert out to all registered transports.
///
/// Fire-and-forget: every transport outcome (success, error, timeout) is
/// converted into a [`NotificationResult`]; a failed delivery is surfaced
/// in the result and never raised to the caller, and nothing is retried.
pub struct AlertDispatcher {
    config: DispatchConfig,
    notifiers: Vec<Box<dyn Notifier>>,
    history: parking_lot::RwLock<Vec<DispatchRecord>>,
}

impl AlertDispatcher {
    /// Create a dispatcher with no transports registered
    pub fn new(config: DispatchConfig) -> Self {
        Self {
            config,
            notifiers: Vec::new(),
            history: parking_lot::RwLock::new(Vec::new()),
        }
    }

    /// Register a notification transport
    pub fn add_notifier(&mut self, notifier: Box<dyn Notifier>) {
        self.notifiers.push(notifier);
    }

    /// Number of registered transports
    pub fn notifier_count(&self) -> usize {
        self.notifiers.len()
    }

    /// Dispatch an alert through every registered transport.
    ///
    /// Returns one result per transport, in registration order.
    pub async fn dispatch(&self, alert: Alert) -> Vec<NotificationResult> {
        tracing::info!(
            alert_id = %alert.id(),
            kind = %alert.kind(),
            priority = %alert.priority(),
            severity = alert.payload().severity.value(),
            "Dispatching alert"
        );

        let mut results = Vec::with_capacity(self.notifiers.len());
        for notifier in &self.notifiers {
            results.push(self.attempt(notifier.as_ref(), &alert).await);
        }

        let record = DispatchRecord {
            alert,
            results: results.clone(),
        };
        let mut history = self.history.write();
        history.push(record);
        let cap = self.config.history_cap;
        if history.len() > cap {
            let excess = history.len() - cap;
            history.drain(..excess);
        }

        results
    }

    async fn attempt(&self, notifier: &dyn Notifier, alert: &Alert) -> NotificationResult {
        let channel = notifier.name().to_string();

        match tokio::time::timeout(self.config.notify_timeout, notifier.notify(alert)).await {
            Ok(Ok(())) => {
                tracing::debug!(alert_id = %alert.id(), channel = %channel, "Alert delivered");
                NotificationResult::delivered(&channel, "alert delivered")
            }
            Ok(Err(e)) => {
                tracing::warn!(
                    alert_id = %alert.id(),
                    channel = %channel,
                    error = %e,
                    "Transport failed to deliver alert"
                );
                NotificationResult::failed(&channel, e.to_string())
            }
            Err(_) => {
                tracing::warn!(
                    alert_id = %alert.id(),
                    channel = %channel,
                    timeout_secs = self.config.notify_timeout.as_secs_f64(),
                    "Transport timed out"
                );
                NotificationResult::failed(
                    &channel,
                    format!(
                        "delivery timed out after {:.1}s",
                        self.config.notify_timeout.as_secs_f64()
                    ),
                )
            }
        }
    }

    /// Dispatch records for this session, oldest first
    pub fn history(&self) -> Vec<DispatchRecord> {
        self.history.read().clone()
    }

    /// Number of alerts dispatched this session (up to the history cap)
    pub fn dispatched_count(&self) -> usize {
        self.history.read().len()
    }

    /// Get configuration
    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }
}
