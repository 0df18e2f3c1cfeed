use tracing::info;

use crate::config::Config;
use crate::domain::services::ledger::SessionLedger;
use crate::infra::sources::seed_source::SeedSource;

/// Builds a ledger pre-populated from the seed source.
pub async fn bootstrap_ledger(config: &Config) -> SessionLedger {
    let mut ledger = SessionLedger::new();
    ledger
        .load(&SeedSource, config.load_delay())
        .await
        .expect("Failed to load seed data");

    info!(
        "Ledger bootstrapped with {} session(s)",
        ledger.sessions().len()
    );
    ledger
}
