use templated_rule_provider::framework::ApiError;
use templated_rule_provider::model::RuleAction;
use templated_rule_provider::runtime::{ProviderConfig, ProviderSystem};
use templated_rule_provider::templated_rule::{LifecycleError, TemplatedRuleState};

fn declared() -> TemplatedRuleState {
    TemplatedRuleState {
        long_name: "SQL injection attempts".into(),
        interval: 10,
        threshold: 50,
        enabled: true,
        action: RuleAction::Flagged,
        ..TemplatedRuleState::new("www", "sqli-attempts")
    }
}

/// Full lifecycle against the in-memory platform.
#[tokio::test]
async fn test_full_lifecycle_integration() {
    let system = ProviderSystem::new(ProviderConfig::new("acme"));
    let resource = &system.resource;

    // Create applies the template, not the declared fields
    let created = resource
        .create(&declared(), &system.meta)
        .await
        .expect("Failed to create rule");
    assert!(created.is_created());
    assert_eq!(created.site_short_name, "www");
    assert_eq!(created.tag_name, "");
    assert_eq!(created.interval, 1);
    assert!(!created.enabled);

    // Update converges to the declared fields
    let desired = TemplatedRuleState {
        id: created.id.clone(),
        ..declared()
    };
    let updated = resource
        .update(&desired, &system.meta)
        .await
        .expect("Failed to update rule");
    assert_eq!(updated, desired);

    // Read reports no drift
    let read = resource
        .read(&updated, &system.meta)
        .await
        .expect("Failed to read rule");
    assert_eq!(read, updated);

    // Disable only; every other field is sent again unchanged
    let disabled = TemplatedRuleState {
        enabled: false,
        ..updated.clone()
    };
    let updated = resource
        .update(&disabled, &system.meta)
        .await
        .expect("Failed to disable rule");
    assert_eq!(updated, disabled);

    // Delete clears identity and the rule is gone remotely
    let deleted = resource
        .delete(&updated, &system.meta)
        .await
        .expect("Failed to delete rule");
    assert!(!deleted.is_created());

    let err = resource
        .read(&updated, &system.meta)
        .await
        .expect_err("Rule should be gone");
    assert_eq!(
        err,
        LifecycleError::Remote(ApiError::NotFound(updated.id.clone()))
    );

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_invalid_update_is_rejected_and_leaves_rule_unchanged() {
    let system = ProviderSystem::new(ProviderConfig::new("acme"));
    let resource = &system.resource;

    let created = resource.create(&declared(), &system.meta).await.unwrap();
    let converged = resource
        .update(
            &TemplatedRuleState {
                id: created.id.clone(),
                ..declared()
            },
            &system.meta,
        )
        .await
        .unwrap();

    for invalid in [
        TemplatedRuleState {
            interval: 5,
            ..converged.clone()
        },
        TemplatedRuleState {
            threshold: 0,
            ..converged.clone()
        },
        TemplatedRuleState {
            tag_name: String::new(),
            ..converged.clone()
        },
    ] {
        let err = resource
            .update(&invalid, &system.meta)
            .await
            .expect_err("Update should be rejected");
        assert!(matches!(
            err,
            LifecycleError::Remote(ApiError::Rejected(_))
        ));
        assert!(err.committed_state().is_none());
    }

    let read = resource.read(&converged, &system.meta).await.unwrap();
    assert_eq!(read, converged);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_rules_are_scoped_to_their_site() {
    let system = ProviderSystem::new(ProviderConfig::new("acme"));
    let resource = &system.resource;

    let created = resource.create(&declared(), &system.meta).await.unwrap();

    let elsewhere = TemplatedRuleState {
        site_short_name: "api".into(),
        ..created.clone()
    };
    assert!(created.requires_replacement(&elsewhere));
    let err = resource.read(&elsewhere, &system.meta).await.unwrap_err();
    assert!(err.api_error().is_some_and(ApiError::is_not_found));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_import_adopts_existing_rule() {
    let system = ProviderSystem::new(ProviderConfig::new("acme"));
    let resource = &system.resource;

    let created = resource.create(&declared(), &system.meta).await.unwrap();
    let converged = resource
        .update(
            &TemplatedRuleState {
                id: created.id.clone(),
                ..declared()
            },
            &system.meta,
        )
        .await
        .unwrap();

    let imported = resource
        .import(&format!("www:{}", converged.id), &system.meta)
        .await
        .unwrap();
    assert_eq!(imported, converged);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_each_create_gets_a_distinct_identity() {
    let system = ProviderSystem::new(ProviderConfig::new("acme"));

    let first = system
        .resource
        .create(&declared(), &system.meta)
        .await
        .unwrap();
    let second = system
        .resource
        .create(&declared(), &system.meta)
        .await
        .unwrap();
    assert_ne!(first.id, second.id);

    system.shutdown().await.unwrap();
}
