//! Brainstorming technique registry
//!
//! Maps a technique identifier to its fixed system prompt. Unknown or
//! missing identifiers degrade to `General` rather than erroring; an
//! invalid technique from a caller should never make an idea request
//! fail.

use serde::{Deserialize, Serialize};

/// Named brainstorming heuristic selecting a system prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Technique {
    #[serde(rename = "general")]
    General,
    #[serde(rename = "scamper")]
    Scamper,
    #[serde(rename = "lateralThinking")]
    LateralThinking,
    #[serde(rename = "sixHats")]
    SixHats,
    #[serde(rename = "5w1h")]
    FiveWOneH,
}

const GENERAL_PROMPT: &str = "You are a creative brainstorming assistant. \
Generate diverse, concrete, actionable ideas for the user's topic. \
Favor variety over depth: each idea should explore a different angle. \
Keep titles short and descriptions to two or three sentences.";

const SCAMPER_PROMPT: &str = "You are a brainstorming assistant applying the SCAMPER method: \
Substitute, Combine, Adapt, Modify, Put to another use, Eliminate, Reverse. \
For each idea, apply one SCAMPER lens to the user's topic and name the lens used. \
Keep titles short and descriptions to two or three sentences.";

const LATERAL_PROMPT: &str = "You are a brainstorming assistant using lateral thinking. \
Break established patterns: use provocations, random associations, and reversals \
to reach ideas a direct approach would miss. Unexpected but workable beats obvious. \
Keep titles short and descriptions to two or three sentences.";

const SIX_HATS_PROMPT: &str = "You are a brainstorming assistant using the Six Thinking Hats: \
White (facts), Red (feelings), Black (risks), Yellow (benefits), Green (creativity), \
Blue (process). Rotate through the hats so the ideas cover distinct modes of thinking, \
and name the hat each idea wears. Keep titles short and descriptions to two or three sentences.";

const FIVE_W_ONE_H_PROMPT: &str = "You are a brainstorming assistant using the 5W1H method: \
Who, What, When, Where, Why, How. Interrogate the user's topic from each of these \
questions to surface ideas, and name the question each idea answers. \
Keep titles short and descriptions to two or three sentences.";

impl Technique {
    /// Parse a wire identifier, degrading to `General` for anything
    /// unknown or missing.
    pub fn parse(raw: Option<&str>) -> Technique {
        match raw {
            Some("general") => Technique::General,
            Some("scamper") => Technique::Scamper,
            Some("lateralThinking") => Technique::LateralThinking,
            Some("sixHats") => Technique::SixHats,
            Some("5w1h") => Technique::FiveWOneH,
            _ => Technique::General,
        }
    }

    /// Fixed system prompt for this technique
    pub fn system_prompt(&self) -> &'static str {
        match self {
            Technique::General => GENERAL_PROMPT,
            Technique::Scamper => SCAMPER_PROMPT,
            Technique::LateralThinking => LATERAL_PROMPT,
            Technique::SixHats => SIX_HATS_PROMPT,
            Technique::FiveWOneH => FIVE_W_ONE_H_PROMPT,
        }
    }
}
