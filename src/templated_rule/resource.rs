//! # Templated Rule Reconciler
//!
//! The four lifecycle operations (plus import) that keep a declared
//! [`TemplatedRuleState`] and its remote [`CustomAlert`](crate::model::CustomAlert) in step.
//!
//! Every operation takes an immutable snapshot and returns a new record; the host decides
//! what to persist. Remote calls are awaited strictly one after another and the first
//! failure ends the operation.

use crate::clients::TemplatedRuleApi;
use crate::framework::ApiError;
use crate::templated_rule::error::LifecycleError;
use crate::templated_rule::state::TemplatedRuleState;
use tracing::{debug, info, instrument, warn};

/// Capabilities the host hands to every lifecycle operation.
#[derive(Clone)]
pub struct ProviderMeta<A> {
    /// Tenant every remote call is scoped to.
    pub corp: String,
    pub client: A,
}

impl<A: TemplatedRuleApi> ProviderMeta<A> {
    pub fn new(corp: impl Into<String>, client: A) -> Self {
        Self {
            corp: corp.into(),
            client,
        }
    }
}

/// Reconciler for the templated rule resource.
#[derive(Debug, Clone)]
pub struct TemplatedRuleResource {
    cleanup_orphans: bool,
}

impl Default for TemplatedRuleResource {
    fn default() -> Self {
        Self {
            cleanup_orphans: true,
        }
    }
}

impl TemplatedRuleResource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether create deletes the freshly provisioned rule when its read-back fails.
    pub fn with_orphan_cleanup(mut self, enabled: bool) -> Self {
        self.cleanup_orphans = enabled;
        self
    }

    pub fn cleanup_orphans(&self) -> bool {
        self.cleanup_orphans
    }

    /// Provisions a rule from the site template and reads it back.
    ///
    /// The returned record reflects the server's values, not the declared ones; a
    /// following update converges the two.
    #[instrument(skip_all, fields(site = %state.site_short_name))]
    pub async fn create<A: TemplatedRuleApi>(
        &self,
        state: &TemplatedRuleState,
        meta: &ProviderMeta<A>,
    ) -> Result<TemplatedRuleState, LifecycleError> {
        if state.is_created() {
            return Err(LifecycleError::AlreadyCreated(state.id.clone()));
        }
        debug!(?state, "Create");

        let alert = meta
            .client
            .create_from_template(&meta.corp, &state.site_short_name)
            .await?;
        let created = state.with_identity(alert.id);
        info!(id = %created.id, "Provisioned from template");

        let source = match fetch_into(&created, meta).await {
            Ok(refreshed) => {
                info!(id = %refreshed.id, "Created");
                return Ok(refreshed);
            }
            Err(e) => e,
        };
        warn!(id = %created.id, error = %source, "Read after create failed");

        if !self.cleanup_orphans {
            return Err(LifecycleError::Refresh {
                state: Box::new(created),
                source,
            });
        }

        match meta
            .client
            .delete_by_id(&meta.corp, &created.site_short_name, &created.id)
            .await
        {
            Ok(()) => {
                info!(id = %created.id, "Removed rule after failed read");
                Err(LifecycleError::Remote(source))
            }
            Err(cleanup) => {
                warn!(id = %created.id, error = %cleanup, "Cleanup failed; rule left behind");
                Err(LifecycleError::Orphaned {
                    id: created.id.clone(),
                    state: Box::new(created),
                    source,
                    cleanup,
                })
            }
        }
    }

    /// Refreshes the six mutable fields from the platform.
    ///
    /// A not-found failure is returned as is; deciding that the rule is gone is the
    /// host's call.
    #[instrument(skip_all, fields(site = %state.site_short_name, id = %state.id))]
    pub async fn read<A: TemplatedRuleApi>(
        &self,
        state: &TemplatedRuleState,
        meta: &ProviderMeta<A>,
    ) -> Result<TemplatedRuleState, LifecycleError> {
        if !state.is_created() {
            return Err(LifecycleError::MissingIdentity);
        }
        let refreshed = fetch_into(state, meta).await?;
        debug!(state = ?refreshed, "Read");
        Ok(refreshed)
    }

    /// Replaces every mutable field remotely, then reads the rule back.
    #[instrument(skip_all, fields(site = %state.site_short_name, id = %state.id))]
    pub async fn update<A: TemplatedRuleApi>(
        &self,
        state: &TemplatedRuleState,
        meta: &ProviderMeta<A>,
    ) -> Result<TemplatedRuleState, LifecycleError> {
        if !state.is_created() {
            return Err(LifecycleError::MissingIdentity);
        }
        let body = state.body();
        debug!(?body, "Update");

        let alert = meta
            .client
            .replace_by_id(&meta.corp, &state.site_short_name, &state.id, body)
            .await?;
        let replaced = if alert.id.is_empty() {
            state.clone()
        } else {
            state.with_identity(alert.id)
        };
        if replaced.id != state.id {
            info!(previous = %state.id, id = %replaced.id, "Identity changed on update");
        }

        match fetch_into(&replaced, meta).await {
            Ok(refreshed) => {
                info!(id = %refreshed.id, "Updated");
                Ok(refreshed)
            }
            Err(source) => {
                warn!(id = %replaced.id, error = %source, "Read after update failed");
                Err(LifecycleError::Refresh {
                    state: Box::new(replaced),
                    source,
                })
            }
        }
    }

    /// Deletes the remote rule and returns the record with its identity cleared.
    #[instrument(skip_all, fields(site = %state.site_short_name, id = %state.id))]
    pub async fn delete<A: TemplatedRuleApi>(
        &self,
        state: &TemplatedRuleState,
        meta: &ProviderMeta<A>,
    ) -> Result<TemplatedRuleState, LifecycleError> {
        if !state.is_created() {
            return Err(LifecycleError::MissingIdentity);
        }
        meta.client
            .delete_by_id(&meta.corp, &state.site_short_name, &state.id)
            .await?;
        info!("Deleted");
        Ok(state.without_identity())
    }

    /// Adopts an existing rule given as `<site_short_name>:<id>` and reads it.
    #[instrument(skip(self, meta))]
    pub async fn import<A: TemplatedRuleApi>(
        &self,
        import_id: &str,
        meta: &ProviderMeta<A>,
    ) -> Result<TemplatedRuleState, LifecycleError> {
        let (site, id) = parse_import_id(import_id)?;
        let state = TemplatedRuleState {
            id,
            site_short_name: site,
            ..TemplatedRuleState::default()
        };
        self.read(&state, meta).await
    }
}

async fn fetch_into<A: TemplatedRuleApi>(
    state: &TemplatedRuleState,
    meta: &ProviderMeta<A>,
) -> Result<TemplatedRuleState, ApiError> {
    let alert = meta
        .client
        .fetch_by_id(&meta.corp, &state.site_short_name, &state.id)
        .await?;
    Ok(state.refreshed_from(&alert))
}

fn parse_import_id(input: &str) -> Result<(String, String), LifecycleError> {
    match input.split_once(':') {
        Some((site, id)) if !site.is_empty() && !id.is_empty() && !id.contains(':') => {
            Ok((site.to_string(), id.to_string()))
        }
        _ => Err(LifecycleError::InvalidImportId(input.to_string())),
    }
}
