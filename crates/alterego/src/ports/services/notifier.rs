//! Notifier Port
//!
//! Abstract interface for sending alerts to the persona's owner through
//! an external push service. Delivery is best-effort: implementations
//! report what happened but never fail the caller.

use async_trait::async_trait;

use crate::domain::entities::NotificationEvent;
use crate::domain::value_objects::DeliveryStatus;

/// Notification delivery interface
///
/// # Example
///
/// ```rust,ignore
/// use alterego::ports::Notifier;
///
/// struct PushoverNotifier { /* reqwest client */ }
///
/// #[async_trait]
/// impl Notifier for PushoverNotifier {
///     async fn notify(&self, event: &NotificationEvent) -> DeliveryStatus {
///         // POST form to the push endpoint, swallow failures
///     }
/// }
/// ```
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send the event. Errors are logged and folded into the returned status.
    async fn notify(&self, event: &NotificationEvent) -> DeliveryStatus;

    /// Get the notifier name (e.g., "pushover")
    fn name(&self) -> &str;
}
