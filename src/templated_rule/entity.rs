//! RemoteEntity trait implementation for [`CustomAlert`].
//!
//! This is what the platform does on its side: provisioning from the template and
//! enforcing the domain constraints on every replacement.

use crate::framework::{ApiError, RemoteEntity, Scope};
use crate::model::{CustomAlert, CustomAlertBody, RuleAction};
use crate::templated_rule::schema::{MAX_THRESHOLD, MIN_THRESHOLD, VALID_INTERVALS};

impl RemoteEntity for CustomAlert {
    type Body = CustomAlertBody;

    /// Template defaults: a disabled, informational rule with no tag.
    fn from_template(id: String, scope: &Scope) -> Self {
        Self {
            id,
            tag_name: String::new(),
            long_name: String::new(),
            interval: VALID_INTERVALS[0],
            threshold: MIN_THRESHOLD,
            block_duration_seconds: None,
            enabled: false,
            action: RuleAction::Info,
            site_name: Some(scope.site.clone()),
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn apply(&mut self, body: CustomAlertBody) -> Result<(), ApiError> {
        if body.tag_name.is_empty() {
            return Err(ApiError::Rejected("tagName must not be empty".into()));
        }
        if !VALID_INTERVALS.contains(&body.interval) {
            return Err(ApiError::Rejected(format!(
                "interval must be 1, 10 or 60, got {}",
                body.interval
            )));
        }
        if !(MIN_THRESHOLD..=MAX_THRESHOLD).contains(&body.threshold) {
            return Err(ApiError::Rejected(format!(
                "threshold must be between {MIN_THRESHOLD} and {MAX_THRESHOLD}, got {}",
                body.threshold
            )));
        }

        self.tag_name = body.tag_name;
        self.long_name = body.long_name;
        self.interval = body.interval;
        self.threshold = body.threshold;
        self.enabled = body.enabled;
        self.action = body.action;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(interval: u32, threshold: u32) -> CustomAlertBody {
        CustomAlertBody {
            tag_name: "sqli-attempts".into(),
            long_name: "SQLi burst".into(),
            interval,
            threshold,
            enabled: true,
            action: RuleAction::Flagged,
        }
    }

    #[test]
    fn test_template_defaults() {
        let alert = CustomAlert::from_template("al_1".into(), &Scope::new("corp", "www"));
        assert_eq!(alert.id(), "al_1");
        assert!(!alert.enabled);
        assert_eq!(alert.action, RuleAction::Info);
        assert_eq!(alert.site_name.as_deref(), Some("www"));
    }

    #[test]
    fn test_apply_accepts_domain_values() {
        let mut alert = CustomAlert::default();
        for interval in VALID_INTERVALS {
            alert.apply(body(interval, MAX_THRESHOLD)).unwrap();
            assert_eq!(alert.interval, interval);
        }
        assert_eq!(alert.tag_name, "sqli-attempts");
        assert_eq!(alert.action, RuleAction::Flagged);
    }

    #[test]
    fn test_apply_rejects_out_of_domain_values() {
        let mut alert = CustomAlert::default();
        assert!(matches!(alert.apply(body(5, 50)), Err(ApiError::Rejected(_))));
        assert!(matches!(alert.apply(body(10, 0)), Err(ApiError::Rejected(_))));
        assert!(matches!(
            alert.apply(body(10, MAX_THRESHOLD + 1)),
            Err(ApiError::Rejected(_))
        ));

        let mut untagged = body(10, 50);
        untagged.tag_name.clear();
        assert!(matches!(alert.apply(untagged), Err(ApiError::Rejected(_))));
        assert_eq!(alert, CustomAlert::default());
    }
}
