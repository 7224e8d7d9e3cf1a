pub mod clients;
pub mod config;
pub mod error;
pub mod normalize;
pub mod orchestrator;
pub mod prompts;
pub mod schemas;
pub mod techniques;

pub use config::AiConfig;
pub use error::{IdeaStormError, Result};
pub use orchestrator::{Orchestrator, validate_key};
pub use schemas::IdeaDraft;

/// Load `.env` if present; missing files are silently ignored.
pub fn load_env() {
    let _ = dotenvy::dotenv();
}
