pub mod openai;
pub mod traits;

pub use openai::ChatCompletionClient;
pub use traits::CompletionClient;
