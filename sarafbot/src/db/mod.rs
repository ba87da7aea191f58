pub mod json;

use async_trait::async_trait;

use crate::error::Result;
use crate::service::rate::RateSnapshot;

/// Last delivered snapshot, kept across restarts.
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Empty snapshot when nothing has been saved yet.
    async fn load(&self) -> Result<RateSnapshot>;

    async fn save(&self, rates: &RateSnapshot) -> Result<()>;
}
