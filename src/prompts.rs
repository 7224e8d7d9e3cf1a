//! Prompt builders for the four AI operations
//!
//! Builders are pure: the same request always produces the same prompt
//! pair (no timestamps, no randomness), which keeps prompts testable.
//! The user prompt is never empty.

use crate::schemas::{ExpansionRequest, GenerationRequest, PerspectiveRequest, RefinementRequest};
use crate::techniques::Technique;

/// Default number of ideas for generate/perspectives
pub const DEFAULT_IDEA_COUNT: u32 = 3;
/// Default branching depth for expand
pub const DEFAULT_EXPAND_DEPTH: u32 = 1;
/// Ideas requested per level of expansion depth
pub const IDEAS_PER_DEPTH: u32 = 3;

const ARRAY_FORMAT: &str = "Respond ONLY with a JSON array of objects, each shaped as \
{\"content\": \"short title\", \"description\": \"two or three sentences\", \
\"position\": {\"x\": 0, \"y\": 0}}. No prose outside the JSON.";

const OBJECT_FORMAT: &str = "Respond ONLY with a single JSON object shaped as \
{\"content\": \"short title\", \"description\": \"two or three sentences\", \
\"position\": {\"x\": 0, \"y\": 0}}. No prose outside the JSON.";

/// A (system, user) prompt pair ready for the completion client
#[derive(Debug, Clone)]
pub struct BuiltPrompt {
    pub system: String,
    pub user: String,
}

/// Build the prompt pair for the "generate" operation.
///
/// The system prompt comes from the technique registry (unknown
/// techniques degrade to general); the user prompt asks for exactly
/// `count` ideas (default 3) on the caller's topic.
pub fn build_generate(req: &GenerationRequest) -> BuiltPrompt {
    let technique = Technique::parse(req.technique.as_deref());
    let count = req.count.unwrap_or(DEFAULT_IDEA_COUNT);

    let mut user = format!(
        "Generate exactly {} brainstorming ideas for the topic: {}",
        count, req.prompt
    );
    if let Some(context) = req.context.as_deref()
        && !context.trim().is_empty()
    {
        user.push_str("\n\nAdditional context: ");
        user.push_str(context);
    }
    user.push_str("\n\n");
    user.push_str(ARRAY_FORMAT);

    BuiltPrompt {
        system: technique.system_prompt().to_string(),
        user,
    }
}

/// Build the prompt pair for the "expand" operation.
///
/// Asks for `3 * depth` new ideas branching from the source idea. Depth
/// beyond 1 shifts the framing from closely related ideas to deeper
/// follow-on chains.
pub fn build_expand(req: &ExpansionRequest) -> BuiltPrompt {
    let depth = req.depth.unwrap_or(DEFAULT_EXPAND_DEPTH);
    // depth is caller-supplied and unbounded; saturate rather than wrap
    let count = IDEAS_PER_DEPTH.saturating_mul(depth);

    let system = if depth > 1 {
        "You are a brainstorming assistant expanding an existing idea. \
         Follow implication chains several steps out: produce deep follow-on ideas \
         that build on each other, not just near neighbors of the original."
    } else {
        "You are a brainstorming assistant expanding an existing idea. \
         Produce closely related ideas that branch directly from the original."
    };

    let user = format!(
        "Starting from this idea:\n\n{}\n\nGenerate exactly {} new ideas that branch from it.\n\n{}",
        req.source_content, count, ARRAY_FORMAT
    );

    BuiltPrompt {
        system: system.to_string(),
        user,
    }
}

/// Build the prompt pair for the "perspectives" operation.
pub fn build_perspectives(req: &PerspectiveRequest) -> BuiltPrompt {
    let count = req.count.unwrap_or(DEFAULT_IDEA_COUNT);

    let system = "You are a brainstorming assistant reframing an idea through different \
                  viewpoints, in the spirit of the six-perspectives technique: look at the \
                  idea through the eyes of different stakeholders, disciplines, and time \
                  horizons. Each perspective should change what the idea means, not just \
                  how it is worded.";

    let user = format!(
        "Consider this idea:\n\n{}\n\nGive exactly {} alternative perspectives on it, \
         each from a clearly different viewpoint.\n\n{}",
        req.source_content, count, ARRAY_FORMAT
    );

    BuiltPrompt {
        system: system.to_string(),
        user,
    }
}

/// Build the prompt pair for the "refine" operation.
///
/// Unlike the other builders this asks for a single refined object, not
/// an array.
pub fn build_refine(req: &RefinementRequest) -> BuiltPrompt {
    let system = "You are a brainstorming assistant improving an existing idea. \
                  Keep the idea's intent, apply the user's instructions faithfully, \
                  and return one refined version.";

    let user = format!(
        "Refine this idea:\n\n{}\n\nInstructions: {}\n\n{}",
        req.source_content, req.instructions, OBJECT_FORMAT
    );

    BuiltPrompt {
        system: system.to_string(),
        user,
    }
}
