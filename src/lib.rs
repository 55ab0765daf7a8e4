//! # Templated Rule Provider
//!
//! A desired-state reconciler for templated rules: site-scoped custom alerts that a
//! remote security platform provisions from a predefined template.
//!
//! The host keeps a [`TemplatedRuleState`](templated_rule::TemplatedRuleState) per rule
//! and calls one of the lifecycle operations on it. Each operation talks to the platform
//! through [`TemplatedRuleApi`](clients::TemplatedRuleApi) and hands back a new record for
//! the host to persist.
//!
//! ## 🔄 Lifecycle
//!
//! | Operation | Remote calls | Result |
//! |-----------|--------------|--------|
//! | `create` | create from template, fetch | server values, identity set |
//! | `read` | fetch | six mutable fields refreshed |
//! | `update` | replace (all six fields), fetch | server values |
//! | `delete` | delete | identity cleared |
//! | `import` | fetch | adopted record |
//!
//! Create does not apply the declared fields; the template decides them, and the next
//! update converges the rule. Changing `site_short_name` requires delete then create.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Platform ([`framework`])
//! A generic `PlatformActor<T>` that owns remote objects per corp and site, answering
//! create, fetch, replace and delete over a channel. It stands in for the real API in
//! the demo and in end-to-end tests.
//! - **Key items**: [`RemoteEntity`](framework::RemoteEntity), [`PlatformActor`](framework::PlatformActor),
//!   [`MockPlatform`](framework::mock::MockPlatform).
//!
//! ### 2. The Interface ([`clients`])
//! - **Role**: The four-call API contract and the client that implements it over the platform channel.
//! - **Key items**: [`TemplatedRuleApi`](clients::TemplatedRuleApi), [`AlertClient`](clients::AlertClient).
//!
//! ### 3. The Reconciler ([`templated_rule`])
//! - **Role**: Declared state, schema and the lifecycle operations.
//! - **Key items**: [`TemplatedRuleResource`](templated_rule::TemplatedRuleResource),
//!   [`LifecycleError`](templated_rule::LifecycleError).
//!
//! ### 4. The Runtime ([`runtime`])
//! - **Role**: Configuration from the environment, tracing setup and the [`ProviderSystem`](runtime::ProviderSystem) orchestrator.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! TEMPLATED_RULE_CORP=acme RUST_LOG=info cargo run
//! cargo test
//! ```

pub mod clients;
pub mod framework;
pub mod model;
pub mod runtime;
pub mod templated_rule;
