//! Integration tests for the full accident monitoring flow:
//! telemetry in -> classification -> alert generation -> transport dispatch.
//!
//! No network, no randomness in assertions: the GPS simulation is seeded and
//! the transports are in-process test doubles.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use accialert::{
    AccidentMonitor, Alert, AlertKind, MonitorConfig, NotificationResult, Notifier, NotifyError,
    Priority, TelemetrySample,
};

/// Transport double that records every alert it receives.
struct RecordingTransport {
    name: String,
    seen: Arc<Mutex<Vec<Alert>>>,
}

impl RecordingTransport {
    fn new(name: &str) -> (Self, Arc<Mutex<Vec<Alert>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                name: name.to_string(),
                seen: seen.clone(),
            },
            seen,
        )
    }
}

#[async_trait::async_trait]
impl Notifier for RecordingTransport {
    fn name(&self) -> &str {
        &self.name
    }

    async fn notify(&self, alert: &Alert) -> Result<(), NotifyError> {
        self.seen.lock().unwrap().push(alert.clone());
        Ok(())
    }
}

/// Transport double that always fails.
struct BrokenTransport;

#[async_trait::async_trait]
impl Notifier for BrokenTransport {
    fn name(&self) -> &str {
        "broken"
    }

    async fn notify(&self, _alert: &Alert) -> Result<(), NotifyError> {
        Err(NotifyError::Transport("relay unreachable".to_string()))
    }
}

/// Transport double that never completes.
struct StuckTransport;

#[async_trait::async_trait]
impl Notifier for StuckTransport {
    fn name(&self) -> &str {
        "stuck"
    }

    async fn notify(&self, _alert: &Alert) -> Result<(), NotifyError> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(())
    }
}

fn seeded_config() -> MonitorConfig {
    MonitorConfig::builder().rng_seed(42).build()
}

#[tokio::test]
async fn normal_telemetry_dispatches_nothing() {
    let (transport, seen) = RecordingTransport::new("primary");
    let mut monitor = AccidentMonitor::new(seeded_config());
    monitor.add_notifier(Box::new(transport));

    let evaluation = monitor.evaluate(TelemetrySample::new(2.5, 120.0)).await;

    assert!(!evaluation.assessment.is_accident);
    assert!(evaluation.dispatch.is_none());
    assert!(evaluation.notifications().is_empty());
    assert!(seen.lock().unwrap().is_empty());
    assert!(monitor.history().is_empty());
}

#[tokio::test]
async fn accident_telemetry_dispatches_one_alert() {
    let (transport, seen) = RecordingTransport::new("primary");
    let mut monitor = AccidentMonitor::new(seeded_config());
    monitor.add_notifier(Box::new(transport));

    let evaluation = monitor.evaluate(TelemetrySample::new(4.0, 50.0)).await;

    assert!(evaluation.assessment.is_accident);
    assert_eq!(evaluation.assessment.severity.value(), 10);

    let dispatch = evaluation.dispatch.expect("alert should be dispatched");
    assert_eq!(dispatch.alert.kind(), AlertKind::Impact);
    assert_eq!(dispatch.alert.priority(), Priority::Critical);
    assert_eq!(dispatch.notifications.len(), 1);
    assert!(dispatch.notifications[0].delivered);

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    let payload = seen[0].payload();
    assert!(payload.title.contains("VH-2024-001"));
    assert!(payload.message.contains("Severity Level: 10/10"));
    assert!(payload.map_link.starts_with("https://www.google.com/maps?q="));

    assert_eq!(monitor.history().len(), 1);
}

#[tokio::test]
async fn alert_carries_current_session_location() {
    let (transport, seen) = RecordingTransport::new("primary");
    let mut monitor = AccidentMonitor::new(seeded_config());
    monitor.add_notifier(Box::new(transport));

    let fix = monitor.refresh_location();
    assert_eq!(monitor.current_location().location, fix.location);

    monitor.evaluate(TelemetrySample::new(5.0, 90.0)).await;

    let seen = seen.lock().unwrap();
    assert_eq!(seen[0].payload().location, fix.location);
}

#[tokio::test]
async fn broken_transport_never_raises() {
    let mut monitor = AccidentMonitor::new(seeded_config());
    monitor.add_notifier(Box::new(BrokenTransport));

    let evaluation = monitor.evaluate(TelemetrySample::new(6.0, 100.0)).await;

    // The failure is contained in a well-formed result
    let results = evaluation.notifications();
    assert_eq!(results.len(), 1);
    let result: &NotificationResult = &results[0];
    assert_eq!(result.channel, "broken");
    assert!(!result.delivered);
    assert!(result.detail.contains("relay unreachable"));
}

#[tokio::test]
async fn stuck_transport_times_out_within_bound() {
    let config = MonitorConfig::builder()
        .rng_seed(42)
        .notify_timeout(Duration::from_millis(100))
        .build();
    let mut monitor = AccidentMonitor::new(config);
    monitor.add_notifier(Box::new(StuckTransport));

    let started = std::time::Instant::now();
    let evaluation = monitor.evaluate(TelemetrySample::new(4.5, 80.0)).await;

    assert!(started.elapsed() < Duration::from_secs(5));
    let results = evaluation.notifications();
    assert!(!results[0].delivered);
    assert!(results[0].detail.contains("timed out"));
}

#[tokio::test]
async fn sos_dispatches_fixed_severity_eight() {
    let (transport, seen) = RecordingTransport::new("primary");
    let mut monitor = AccidentMonitor::new(seeded_config());
    monitor.add_notifier(Box::new(transport));

    let outcome = monitor.sos().await;

    assert_eq!(outcome.alert.kind(), AlertKind::Sos);
    assert_eq!(outcome.alert.payload().severity.value(), 8);
    assert!(outcome.notifications[0].delivered);
    assert_eq!(seen.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_notifications_reach_every_transport() {
    let (first, first_seen) = RecordingTransport::new("first");
    let (second, second_seen) = RecordingTransport::new("second");
    let mut monitor = AccidentMonitor::new(seeded_config());
    monitor.add_notifier(Box::new(first));
    monitor.add_notifier(Box::new(BrokenTransport));
    monitor.add_notifier(Box::new(second));

    let outcome = monitor.test_notifications().await;

    assert_eq!(outcome.alert.kind(), AlertKind::Test);
    assert_eq!(outcome.notifications.len(), 3);
    assert!(outcome.notifications[0].delivered);
    assert!(!outcome.notifications[1].delivered);
    assert!(outcome.notifications[2].delivered);
    assert_eq!(first_seen.lock().unwrap().len(), 1);
    assert_eq!(second_seen.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn repeated_dispatch_is_not_deduplicated() {
    // Fire-and-forget: re-evaluating the same accident is a distinct,
    // indistinguishable notification attempt
    let (transport, seen) = RecordingTransport::new("primary");
    let mut monitor = AccidentMonitor::new(seeded_config());
    monitor.add_notifier(Box::new(transport));

    let sample = TelemetrySample::new(4.0, 20.0);
    let first = monitor.evaluate(sample).await;
    let second = monitor.evaluate(sample).await;

    assert_eq!(first.assessment, second.assessment);
    assert_eq!(first.assessment.severity.value(), 4);
    assert_eq!(seen.lock().unwrap().len(), 2);
    assert_eq!(monitor.history().len(), 2);
}
