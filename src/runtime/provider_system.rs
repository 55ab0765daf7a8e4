use crate::clients::AlertClient;
use crate::runtime::config::ProviderConfig;
use crate::templated_rule::{ProviderMeta, TemplatedRuleResource};
use tracing::{error, info};

/// Runs the templated rule resource against an in-memory platform.
///
/// `ProviderSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping the platform task
/// - **Dependency Wiring**: resolving the corp and the API client into one [`ProviderMeta`]
/// - **Reconciler Setup**: building the [`TemplatedRuleResource`] from configuration
///
/// # Example
///
/// ```ignore
/// let system = ProviderSystem::new(ProviderConfig::new("acme"));
///
/// let declared = TemplatedRuleState::new("www", "sqli-attempts");
/// let created = system.resource.create(&declared, &system.meta).await?;
///
/// system.shutdown().await?;
/// ```
pub struct ProviderSystem {
    /// The reconciler, configured from [`ProviderConfig`].
    pub resource: TemplatedRuleResource,

    /// Corp and client handed to every lifecycle operation.
    pub meta: ProviderMeta<AlertClient>,

    handle: tokio::task::JoinHandle<()>,
}

impl ProviderSystem {
    /// Spawns the platform task and wires the reconciler to it.
    pub fn new(config: ProviderConfig) -> Self {
        let (platform, client) = crate::templated_rule::new_platform(config.platform_buffer);
        let handle = tokio::spawn(platform.run());
        info!(corp = %config.corp, cleanup_orphans = config.cleanup_orphans, "Provider started");

        Self {
            resource: TemplatedRuleResource::new().with_orphan_cleanup(config.cleanup_orphans),
            meta: ProviderMeta::new(config.corp, client),
            handle,
        }
    }

    /// Drops the client, which closes the platform channel, then waits for the task.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down provider...");
        drop(self.meta);

        if let Err(e) = self.handle.await {
            error!("Platform task failed: {:?}", e);
            return Err(format!("Platform task failed: {:?}", e));
        }

        info!("Provider shutdown complete.");
        Ok(())
    }
}
