pub mod telegram;

use async_trait::async_trait;

use crate::error::Result;

/// Delivery channel for rendered messages.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, text: &str) -> Result<()>;
}
