use async_trait::async_trait;

use crate::errors::ProviderError;

/// Prompt payload and sampling parameters for one generation call.
#[derive(Clone, Debug)]
pub struct GenerationInstruction {
    pub system: String,
    pub user: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Trait implemented by each text generation backend.
///
/// `complete` returns the raw assistant text; shaping and cleanup happen in
/// the adapter above it. Injected so the adapter is testable with a scripted
/// mock instead of the network.
#[async_trait]
pub trait TextModel: Send + Sync {
    fn name(&self) -> &str;
    fn model(&self) -> &str;

    async fn complete(&self, instruction: &GenerationInstruction)
        -> Result<String, ProviderError>;
}
