use serde::{Deserialize, Serialize};
use std::fmt;

/// What happens when a templated rule fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleAction {
    /// Creates an incident in the dashboard.
    #[default]
    Info,
    /// Creates an incident and blocks matching traffic.
    Flagged,
}

impl RuleAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleAction::Info => "info",
            RuleAction::Flagged => "flagged",
        }
    }
}

impl fmt::Display for RuleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The platform's authoritative representation of a templated rule.
///
/// # Platform Framework
/// Implements [`RemoteEntity`](crate::framework::RemoteEntity) (see
/// [`templated_rule::entity`](crate::templated_rule::entity)), so it can be served by a
/// [`PlatformActor`](crate::framework::PlatformActor).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomAlert {
    pub id: String,
    pub tag_name: String,
    #[serde(default)]
    pub long_name: String,
    pub interval: u32,
    pub threshold: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_duration_seconds: Option<u32>,
    pub enabled: bool,
    pub action: RuleAction,
    /// Site the platform reports the alert under, when it echoes one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
}

/// Full-replacement payload for a custom alert.
///
/// Always carries all six mutable fields; the site is part of the request scope, never
/// of the body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomAlertBody {
    pub tag_name: String,
    pub long_name: String,
    pub interval: u32,
    pub threshold: u32,
    pub enabled: bool,
    pub action: RuleAction,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_alert_uses_platform_field_names() {
        let json = r#"{
            "id": "al_123",
            "tagName": "sqli-attempts",
            "longName": "SQLi burst",
            "interval": 10,
            "threshold": 50,
            "blockDurationSeconds": 3600,
            "enabled": true,
            "action": "flagged"
        }"#;
        let alert: CustomAlert = serde_json::from_str(json).unwrap();
        assert_eq!(alert.id, "al_123");
        assert_eq!(alert.tag_name, "sqli-attempts");
        assert_eq!(alert.block_duration_seconds, Some(3600));
        assert_eq!(alert.action, RuleAction::Flagged);
        assert_eq!(alert.site_name, None);
    }

    #[test]
    fn test_body_serializes_all_mutable_fields() {
        let body = CustomAlertBody {
            tag_name: "xss".into(),
            long_name: String::new(),
            interval: 1,
            threshold: 5,
            enabled: false,
            action: RuleAction::Info,
        };
        let value = serde_json::to_value(&body).unwrap();
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys.len(), 6);
        for key in ["tagName", "longName", "interval", "threshold", "enabled", "action"] {
            assert!(keys.contains(&key), "missing {key}");
        }
        assert_eq!(value["action"], "info");
    }

    #[test]
    fn test_unknown_action_is_rejected() {
        let result: Result<RuleAction, _> = serde_json::from_str(r#""block""#);
        assert!(result.is_err());
    }
}
