//! Request and draft value types
//!
//! Request structs mirror the JSON the web tier forwards: camelCase
//! field names, id fields optional so the orchestrator itself can reject
//! missing ones instead of failing opaquely at the transport edge.
//! `RawModelIdea` is the untrusted shape expected from the model and is
//! never assumed to hold.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Parameters for the "generate" operation
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    #[serde(default)]
    pub session_id: Option<Uuid>,
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub technique: Option<String>,
    #[serde(default)]
    pub count: Option<u32>,
}

/// Parameters for the "expand" operation
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpansionRequest {
    #[serde(default)]
    pub idea_id: Option<Uuid>,
    #[serde(default)]
    pub session_id: Option<Uuid>,
    #[serde(default)]
    pub source_content: String,
    #[serde(default)]
    pub depth: Option<u32>,
}

/// Parameters for the "perspectives" operation
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerspectiveRequest {
    #[serde(default)]
    pub idea_id: Option<Uuid>,
    #[serde(default)]
    pub session_id: Option<Uuid>,
    #[serde(default)]
    pub source_content: String,
    #[serde(default)]
    pub count: Option<u32>,
}

/// Parameters for the "refine" operation
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefinementRequest {
    #[serde(default)]
    pub idea_id: Option<Uuid>,
    #[serde(default)]
    pub session_id: Option<Uuid>,
    #[serde(default)]
    pub source_content: String,
    #[serde(default)]
    pub instructions: String,
}

/// Canvas coordinates for an idea card
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Default for Position {
    fn default() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

/// Untrusted idea shape expected from the model
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawModelIdea {
    pub content: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub position: Option<Position>,
    #[serde(default)]
    pub category_id: Option<String>,
}

/// An idea ready to be persisted by the repository collaborator
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaDraft {
    pub session_id: Uuid,
    pub content: String,
    pub position: Position,
    pub category_id: Option<String>,
    pub is_ai_generated: bool,
}

impl IdeaDraft {
    /// Merge a raw model idea into a draft: title and description joined
    /// by a blank line (bare title when the description is empty),
    /// position defaulting to the origin.
    pub fn from_raw(raw: RawModelIdea, session_id: Uuid) -> Self {
        let content = if raw.description.trim().is_empty() {
            raw.content
        } else {
            format!("{}\n\n{}", raw.content, raw.description)
        };
        Self {
            session_id,
            content,
            position: raw.position.unwrap_or_default(),
            category_id: raw.category_id,
            is_ai_generated: true,
        }
    }
}
