//! Walks one templated rule through create, update, read and delete against the
//! in-memory platform.
//!
//! ```bash
//! TEMPLATED_RULE_CORP=acme RUST_LOG=info cargo run
//! ```

use templated_rule_provider::model::RuleAction;
use templated_rule_provider::runtime::{setup_tracing, ProviderConfig, ProviderSystem};
use templated_rule_provider::templated_rule::TemplatedRuleState;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = ProviderConfig::from_env().map_err(|e| e.to_string())?;
    info!(corp = %config.corp, "Starting templated rule provider");

    let system = ProviderSystem::new(config);

    let declared = TemplatedRuleState {
        long_name: "SQL injection attempts".to_string(),
        interval: 10,
        threshold: 50,
        enabled: true,
        action: RuleAction::Flagged,
        ..TemplatedRuleState::new("www", "sqli-attempts")
    };

    let span = tracing::info_span!("provision");
    let converged = async {
        let created = system
            .resource
            .create(&declared, &system.meta)
            .await
            .map_err(|e| e.to_string())?;
        info!(id = %created.id, enabled = created.enabled, "Created from template");

        // The template ignores the declared fields, so converge with an update.
        let desired = TemplatedRuleState {
            id: created.id.clone(),
            ..declared.clone()
        };
        system
            .resource
            .update(&desired, &system.meta)
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    info!(
        id = %converged.id,
        interval = converged.interval,
        threshold = converged.threshold,
        action = %converged.action,
        "Rule converged"
    );

    match system.resource.read(&converged, &system.meta).await {
        Ok(current) if current == converged => info!("No drift detected"),
        Ok(current) => info!(?current, "Drift detected"),
        Err(e) => error!(error = %e, "Read failed"),
    }

    let deleted = system
        .resource
        .delete(&converged, &system.meta)
        .await
        .map_err(|e| e.to_string())?;
    info!(created = deleted.is_created(), "Rule deleted");

    system.shutdown().await?;

    info!("Provider run completed successfully");
    Ok(())
}
