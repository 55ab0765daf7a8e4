use crate::framework::ApiError;
use crate::model::{CustomAlert, CustomAlertBody};
use async_trait::async_trait;

/// The remote operations the reconciler needs from the platform.
///
/// Every call is addressed by `corp` and `site`; the three id-based calls also take the
/// alert identity. Implementations report failures as [`ApiError`] and never retry.
#[async_trait]
pub trait TemplatedRuleApi: Send + Sync {
    /// Provisions a new rule from the site's template. No field payload is sent.
    async fn create_from_template(&self, corp: &str, site: &str) -> Result<CustomAlert, ApiError>;

    /// Fetches a rule by identity.
    async fn fetch_by_id(&self, corp: &str, site: &str, id: &str) -> Result<CustomAlert, ApiError>;

    /// Replaces every mutable field of a rule.
    async fn replace_by_id(
        &self,
        corp: &str,
        site: &str,
        id: &str,
        body: CustomAlertBody,
    ) -> Result<CustomAlert, ApiError>;

    /// Deletes a rule.
    async fn delete_by_id(&self, corp: &str, site: &str, id: &str) -> Result<(), ApiError>;
}
