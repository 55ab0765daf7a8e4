use crate::model::{CustomAlert, CustomAlertBody, RuleAction};
use serde::{Deserialize, Serialize};

/// Declared state of one templated rule, as the host persists it between invocations.
///
/// `id` is empty until a create succeeds and empty again after a delete succeeds.
/// `site_short_name` and `block_duration_seconds` are caller-authoritative: reads never
/// overwrite them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TemplatedRuleState {
    #[serde(default)]
    pub id: String,
    pub site_short_name: String,
    pub tag_name: String,
    #[serde(default)]
    pub long_name: String,
    #[serde(default)]
    pub interval: u32,
    #[serde(default)]
    pub threshold: u32,
    #[serde(default)]
    pub block_duration_seconds: Option<u32>,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub action: RuleAction,
}

impl TemplatedRuleState {
    /// Creates an uncreated record for `tag_name` on `site_short_name`.
    pub fn new(site_short_name: impl Into<String>, tag_name: impl Into<String>) -> Self {
        Self {
            site_short_name: site_short_name.into(),
            tag_name: tag_name.into(),
            ..Self::default()
        }
    }

    /// True once the record corresponds to a remote object.
    pub fn is_created(&self) -> bool {
        !self.id.is_empty()
    }

    /// The full-replacement payload for this record's mutable fields.
    pub fn body(&self) -> CustomAlertBody {
        CustomAlertBody {
            tag_name: self.tag_name.clone(),
            long_name: self.long_name.clone(),
            interval: self.interval,
            threshold: self.threshold,
            enabled: self.enabled,
            action: self.action,
        }
    }

    /// Copies the six mutable fields of `alert` into a new record.
    ///
    /// Identity, site and block duration keep this record's values.
    pub fn refreshed_from(&self, alert: &CustomAlert) -> Self {
        Self {
            tag_name: alert.tag_name.clone(),
            long_name: alert.long_name.clone(),
            interval: alert.interval,
            threshold: alert.threshold,
            enabled: alert.enabled,
            action: alert.action,
            ..self.clone()
        }
    }

    /// Whether moving from `self` to `desired` changes an attribute that cannot be
    /// updated in place. Such a change needs delete then create, never update.
    pub fn requires_replacement(&self, desired: &TemplatedRuleState) -> bool {
        self.site_short_name != desired.site_short_name
    }

    pub(crate) fn without_identity(&self) -> Self {
        Self {
            id: String::new(),
            ..self.clone()
        }
    }

    pub(crate) fn with_identity(&self, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..self.clone()
        }
    }
}
