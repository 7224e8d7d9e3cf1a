//! AI idea-generation orchestrator
//!
//! Composes the technique registry, prompt builders, completion client,
//! and response normalizer into the four public operations. Each
//! operation validates caller input first (no network call on invalid
//! input), issues at most one upstream call, and never returns an error
//! for a malformed model response; that case degrades to a placeholder
//! draft inside the normalizer.
//!
//! All state is call-scoped and immutable; an `Orchestrator` is safe to
//! share across concurrent callers.

use std::sync::Arc;

use uuid::Uuid;

use crate::clients::{ChatCompletionClient, CompletionClient};
use crate::config::AiConfig;
use crate::error::{IdeaStormError, Result};
use crate::normalize::{self, Operation};
use crate::prompts;
use crate::schemas::{
    ExpansionRequest, GenerationRequest, IdeaDraft, PerspectiveRequest, RefinementRequest,
};

pub struct Orchestrator {
    client: Arc<dyn CompletionClient>,
    config: AiConfig,
}

impl Orchestrator {
    /// Build an orchestrator over the HTTP completion client.
    ///
    /// Key resolution happens here: an explicit per-request key wins over
    /// the configured default, and failing to resolve any key is a
    /// configuration error raised before any prompt is built.
    pub fn new(config: &AiConfig, override_key: Option<&str>) -> Result<Self> {
        let client = ChatCompletionClient::new()?;
        Self::with_client(config, override_key, Arc::new(client))
    }

    /// Build an orchestrator over a caller-supplied completion client
    pub fn with_client(
        config: &AiConfig,
        override_key: Option<&str>,
        client: Arc<dyn CompletionClient>,
    ) -> Result<Self> {
        let config = config.resolve(override_key)?;
        Ok(Self { client, config })
    }

    /// Generate fresh ideas for a session topic
    pub async fn generate(&self, req: &GenerationRequest) -> Result<Vec<IdeaDraft>> {
        let session_id = require_id(req.session_id, "sessionId")?;
        require_text(&req.prompt, "prompt")?;
        require_positive(req.count, "count")?;

        let built = prompts::build_generate(req);
        let raw = self
            .client
            .complete(&built.system, &built.user, &self.config)
            .await?;
        let drafts = normalize::normalize_batch(&raw, session_id, Operation::Generate).into_drafts();
        tracing::debug!("generate produced {} draft(s)", drafts.len());
        Ok(drafts)
    }

    /// Expand an existing idea into branching ideas
    pub async fn expand(&self, req: &ExpansionRequest) -> Result<Vec<IdeaDraft>> {
        require_id(req.idea_id, "ideaId")?;
        let session_id = require_id(req.session_id, "sessionId")?;
        require_positive(req.depth, "depth")?;

        let built = prompts::build_expand(req);
        let raw = self
            .client
            .complete(&built.system, &built.user, &self.config)
            .await?;
        let drafts = normalize::normalize_batch(&raw, session_id, Operation::Expand).into_drafts();
        tracing::debug!("expand produced {} draft(s)", drafts.len());
        Ok(drafts)
    }

    /// Reframe an existing idea from alternative viewpoints
    pub async fn perspectives(&self, req: &PerspectiveRequest) -> Result<Vec<IdeaDraft>> {
        require_id(req.idea_id, "ideaId")?;
        let session_id = require_id(req.session_id, "sessionId")?;
        require_positive(req.count, "count")?;

        let built = prompts::build_perspectives(req);
        let raw = self
            .client
            .complete(&built.system, &built.user, &self.config)
            .await?;
        let drafts =
            normalize::normalize_batch(&raw, session_id, Operation::Perspectives).into_drafts();
        tracing::debug!("perspectives produced {} draft(s)", drafts.len());
        Ok(drafts)
    }

    /// Refine an existing idea per caller instructions; returns a single
    /// draft rather than a sequence
    pub async fn refine(&self, req: &RefinementRequest) -> Result<IdeaDraft> {
        require_id(req.idea_id, "ideaId")?;
        let session_id = require_id(req.session_id, "sessionId")?;
        require_text(&req.instructions, "instructions")?;

        let built = prompts::build_refine(req);
        let raw = self
            .client
            .complete(&built.system, &built.user, &self.config)
            .await?;
        Ok(normalize::normalize_single(&raw, session_id).into_draft())
    }
}

/// Report whether a usable API key resolves from the per-request override
/// or the configured default. Performs no network call.
pub fn validate_key(config: &AiConfig, override_key: Option<&str>) -> bool {
    config.resolve(override_key).is_ok()
}

fn require_id(id: Option<Uuid>, field: &str) -> Result<Uuid> {
    id.ok_or_else(|| IdeaStormError::Validation {
        message: format!("{} is required", field),
    })
}

fn require_text(value: &str, field: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(IdeaStormError::Validation {
            message: format!("{} is required", field),
        });
    }
    Ok(())
}

fn require_positive(value: Option<u32>, field: &str) -> Result<()> {
    if value == Some(0) {
        return Err(IdeaStormError::Validation {
            message: format!("{} must be greater than zero", field),
        });
    }
    Ok(())
}
