//! DeliveryStatus - Outcome of a best-effort notification

use serde::{Deserialize, Serialize};

/// What happened to a notification. Internal only; tool results never expose it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "reason")]
pub enum DeliveryStatus {
    Delivered,
    Failed(String),
    /// No notifier is configured
    Skipped,
}

impl DeliveryStatus {
    pub fn is_delivered(&self) -> bool {
        matches!(self, DeliveryStatus::Delivered)
    }
}

impl std::fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeliveryStatus::Delivered => write!(f, "delivered"),
            DeliveryStatus::Failed(reason) => write!(f, "failed: {}", reason),
            DeliveryStatus::Skipped => write!(f, "skipped"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_delivered_counts_as_delivered() {
        assert!(DeliveryStatus::Delivered.is_delivered());
        assert!(!DeliveryStatus::Skipped.is_delivered());
        assert!(!DeliveryStatus::Failed("HTTP 400".into()).is_delivered());
        assert_eq!(
            DeliveryStatus::Failed("HTTP 400".into()).to_string(),
            "failed: HTTP 400"
        );
    }
}
