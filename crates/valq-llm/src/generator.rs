use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tracing::{debug, warn};

use valq_core::errors::ProviderError;
use valq_core::provider::TextModel;
use valq_core::sanitize::sanitize_candidates;
use valq_core::types::{Mode, Question};

use crate::extract;
use crate::prompts;

/// Attempt budget and per-attempt deadline for each mode. Single mode is a
/// latency-sensitive regenerate tap, so it gets fewer, shorter attempts.
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    pub batch_attempts: u32,
    pub single_attempts: u32,
    pub batch_timeout: Duration,
    pub single_timeout: Duration,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            batch_attempts: 3,
            single_attempts: 2,
            batch_timeout: Duration::from_secs(25),
            single_timeout: Duration::from_secs(12),
        }
    }
}

impl GeneratorConfig {
    fn attempts(&self, mode: Mode) -> u32 {
        match mode {
            Mode::Batch => self.batch_attempts,
            Mode::Single => self.single_attempts,
        }
    }

    fn attempt_timeout(&self, mode: Mode) -> Duration {
        match mode {
            Mode::Batch => self.batch_timeout,
            Mode::Single => self.single_timeout,
        }
    }
}

/// Orchestration-and-extraction layer around an injected text model.
///
/// Each attempt is independent: complete, strip fencing, parse, sanitize. An
/// attempt succeeds only if sanitization keeps at least `count` questions;
/// anything less records the shortfall and the next attempt runs. After the
/// budget is spent the last recorded error is returned. The generator never
/// invents content.
pub struct QuestionGenerator {
    model: Arc<dyn TextModel>,
    config: GeneratorConfig,
}

impl QuestionGenerator {
    pub fn new(model: Arc<dyn TextModel>, config: GeneratorConfig) -> Self {
        Self { model, config }
    }

    pub fn with_defaults(model: Arc<dyn TextModel>) -> Self {
        Self::new(model, GeneratorConfig::default())
    }

    pub async fn request_questions(
        &self,
        count: usize,
        context: &Value,
        mode: Mode,
        exclude_prompts: &[String],
    ) -> Result<Vec<Question>, ProviderError> {
        let instruction = prompts::build_instruction(count, context, mode, exclude_prompts);
        let attempts = self.config.attempts(mode);
        let deadline = self.config.attempt_timeout(mode);

        let mut last_error: Option<ProviderError> = None;

        for attempt in 1..=attempts {
            match self.attempt(&instruction, count, deadline).await {
                Ok(questions) => {
                    debug!(
                        provider = self.model.name(),
                        mode = mode.as_str(),
                        attempt,
                        accepted = questions.len(),
                        "generation attempt succeeded"
                    );
                    return Ok(questions);
                }
                Err(e) => {
                    warn!(
                        provider = self.model.name(),
                        mode = mode.as_str(),
                        attempt,
                        attempts,
                        error_kind = e.error_kind(),
                        error = %e,
                        "generation attempt failed"
                    );
                    last_error = Some(e);
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| ProviderError::Malformed("generation failed".to_string())))
    }

    async fn attempt(
        &self,
        instruction: &valq_core::provider::GenerationInstruction,
        count: usize,
        deadline: Duration,
    ) -> Result<Vec<Question>, ProviderError> {
        let raw = match tokio::time::timeout(deadline, self.model.complete(instruction)).await {
            Ok(result) => result?,
            Err(_) => return Err(ProviderError::Timeout(deadline)),
        };

        let text = extract::strip_code_fence(&raw);
        let payload: Value = serde_json::from_str(text)
            .map_err(|e| ProviderError::Malformed(format!("response is not JSON: {e}")))?;

        let cleaned = sanitize_candidates(extract::candidate_list(&payload), count);
        if cleaned.len() >= count {
            Ok(cleaned)
        } else {
            Err(ProviderError::Insufficient {
                accepted: cleaned.len(),
                requested: count,
            })
        }
    }
}
