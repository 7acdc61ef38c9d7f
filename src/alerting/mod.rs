//! Alerting module: payload generation and transport dispatch.

mod dispatcher;
mod generator;
mod notifier;

pub use dispatcher::{AlertDispatcher, DispatchConfig, DispatchRecord};
pub use generator::AlertGenerator;
pub use notifier::{
    ConsoleNotifier, NotificationResult, Notifier, NotifyError, WebhookConfig, WebhookNotifier,
};
