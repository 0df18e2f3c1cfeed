use crate::domain::models::participant::Participant;
use crate::domain::models::session::Session;
use crate::error::LedgerError;
use async_trait::async_trait;

/// Where session data comes from. The built-in seed implements this today; a
/// persistent store plugs in behind the same contract.
#[async_trait]
pub trait SessionSource: Send + Sync {
    async fn fetch(&self) -> Result<(Vec<Session>, Vec<Participant>), LedgerError>;
}
