use crate::clients::rule_api::TemplatedRuleApi;
use crate::framework::{ApiError, PlatformClient, Scope};
use crate::model::{CustomAlert, CustomAlertBody};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for the custom alert platform.
///
/// Wraps the generic [`PlatformClient`] and exposes it through [`TemplatedRuleApi`].
#[derive(Clone)]
pub struct AlertClient {
    inner: PlatformClient<CustomAlert>,
}

impl AlertClient {
    pub fn new(inner: PlatformClient<CustomAlert>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl TemplatedRuleApi for AlertClient {
    #[instrument(skip(self))]
    async fn create_from_template(&self, corp: &str, site: &str) -> Result<CustomAlert, ApiError> {
        debug!("Sending request");
        self.inner.create(Scope::new(corp, site)).await
    }

    #[instrument(skip(self))]
    async fn fetch_by_id(&self, corp: &str, site: &str, id: &str) -> Result<CustomAlert, ApiError> {
        debug!("Sending request");
        self.inner.fetch(Scope::new(corp, site), id.to_string()).await
    }

    #[instrument(skip(self, body))]
    async fn replace_by_id(
        &self,
        corp: &str,
        site: &str,
        id: &str,
        body: CustomAlertBody,
    ) -> Result<CustomAlert, ApiError> {
        debug!(?body, "Sending request");
        self.inner
            .replace(Scope::new(corp, site), id.to_string(), body)
            .await
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, corp: &str, site: &str, id: &str) -> Result<(), ApiError> {
        debug!("Sending request");
        self.inner.delete(Scope::new(corp, site), id.to_string()).await
    }
}
