use async_trait::async_trait;

use crate::config::AiConfig;
use crate::error::Result;

/// One-shot chat completion against an upstream model.
///
/// The orchestrator talks to the upstream only through this trait so
/// tests can substitute a scripted client and assert on call counts.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Issue exactly one completion call with a (system, user) message
    /// pair and return the model's raw text content.
    async fn complete(&self, system: &str, user: &str, config: &AiConfig) -> Result<String>;
}
