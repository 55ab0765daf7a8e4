/// Initializes the tracing/logging infrastructure for the application.
///
/// Log verbosity comes from `RUST_LOG`:
/// - `RUST_LOG=info` - one line per remote change (provisioned, updated, deleted)
/// - `RUST_LOG=debug` - also full records and replacement payloads
/// - `RUST_LOG=templated_rule_provider::framework=debug` - platform requests only
///
/// The compact format keeps lifecycle spans inline, e.g. `create{site=www}: Created`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
