//! Response normalization and fallback policy
//!
//! Model output is untrusted text. The normalizer either parses it into
//! idea drafts or downgrades the whole response to a single deterministic
//! placeholder draft; a malformed model response never surfaces as an
//! error to the caller. "Valid but empty" is distinguished from
//! "unparseable": a well-formed `[]` yields an empty parsed sequence,
//! not a fallback.

use uuid::Uuid;

use crate::schemas::{IdeaDraft, Position, RawModelIdea};

/// Which public operation a response belongs to; selects the fallback
/// message shown when the response is malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Generate,
    Expand,
    Perspectives,
    Refine,
}

impl Operation {
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Operation::Generate => "AI idea generation failed. Please try again.",
            Operation::Expand => "AI expansion failed. Please try again.",
            Operation::Perspectives => "AI perspective generation failed. Please try again.",
            Operation::Refine => "AI refinement failed. Please try again.",
        }
    }
}

/// Outcome of normalizing an array-form response
#[derive(Debug)]
pub enum NormalizedBatch {
    Parsed(Vec<IdeaDraft>),
    Fallback(IdeaDraft),
}

impl NormalizedBatch {
    pub fn into_drafts(self) -> Vec<IdeaDraft> {
        match self {
            NormalizedBatch::Parsed(drafts) => drafts,
            NormalizedBatch::Fallback(draft) => vec![draft],
        }
    }
}

/// Outcome of normalizing a single-object (refine) response
#[derive(Debug)]
pub enum NormalizedSingle {
    Parsed(IdeaDraft),
    Fallback(IdeaDraft),
}

impl NormalizedSingle {
    pub fn into_draft(self) -> IdeaDraft {
        match self {
            NormalizedSingle::Parsed(draft) | NormalizedSingle::Fallback(draft) => draft,
        }
    }
}

/// Parse an array-form model response into idea drafts.
pub fn normalize_batch(raw: &str, session_id: Uuid, op: Operation) -> NormalizedBatch {
    let cleaned = strip_code_fences(raw);
    match serde_json::from_str::<Vec<RawModelIdea>>(cleaned) {
        Ok(ideas) => NormalizedBatch::Parsed(
            ideas
                .into_iter()
                .map(|idea| IdeaDraft::from_raw(idea, session_id))
                .collect(),
        ),
        Err(e) => {
            tracing::warn!("Unparseable {:?} response, emitting fallback draft: {}", op, e);
            NormalizedBatch::Fallback(fallback_draft(session_id, op))
        }
    }
}

/// Parse a single-object model response (the refine form).
pub fn normalize_single(raw: &str, session_id: Uuid) -> NormalizedSingle {
    let cleaned = strip_code_fences(raw);
    match serde_json::from_str::<RawModelIdea>(cleaned) {
        Ok(idea) => NormalizedSingle::Parsed(IdeaDraft::from_raw(idea, session_id)),
        Err(e) => {
            tracing::warn!("Unparseable refine response, emitting fallback draft: {}", e);
            NormalizedSingle::Fallback(fallback_draft(session_id, Operation::Refine))
        }
    }
}

fn fallback_draft(session_id: Uuid, op: Operation) -> IdeaDraft {
    IdeaDraft {
        session_id,
        content: op.fallback_message().to_string(),
        position: Position::default(),
        category_id: None,
        is_ai_generated: true,
    }
}

/// Strip a surrounding Markdown code fence, which chat models commonly
/// wrap around JSON even when told not to.
fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(rest) = rest.strip_suffix("```") else {
        return trimmed;
    };
    // Drop the info string ("json", "JSON", ...) on the opening fence
    let rest = match rest.split_once('\n') {
        Some((first_line, body)) if first_line.trim().chars().all(char::is_alphanumeric) => body,
        _ => rest,
    };
    rest.trim()
}
