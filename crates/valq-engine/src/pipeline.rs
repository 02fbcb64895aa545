use tracing::{debug, warn};

use valq_core::fallback::select_fallback;
use valq_core::types::{GenerationRequest, GenerationResult, Source};
use valq_llm::QuestionGenerator;

/// Composes the provider path with the deterministic fallback.
///
/// `produce` never fails and always returns a full set: every provider-path
/// error is absorbed here, logged, and answered from the bank. Callers can
/// tell the two paths apart only through the `source` discriminant.
pub struct QuestionPipeline {
    generator: QuestionGenerator,
}

impl QuestionPipeline {
    pub fn new(generator: QuestionGenerator) -> Self {
        Self { generator }
    }

    pub async fn produce(&self, request: &GenerationRequest) -> GenerationResult {
        let target = request.target_count();

        match self
            .generator
            .request_questions(target, &request.context, request.mode, &request.exclude_prompts)
            .await
        {
            Ok(mut questions) if questions.len() >= target => {
                questions.truncate(target);
                debug!(
                    mode = request.mode.as_str(),
                    count = target,
                    "serving provider-generated questions"
                );
                GenerationResult {
                    questions,
                    source: Source::Provider,
                }
            }
            Ok(questions) => {
                warn!(
                    mode = request.mode.as_str(),
                    accepted = questions.len(),
                    requested = target,
                    "provider returned too few questions, serving fallback"
                );
                self.fallback(request)
            }
            Err(e) => {
                warn!(
                    mode = request.mode.as_str(),
                    error_kind = e.error_kind(),
                    error = %e,
                    "provider generation failed, serving fallback"
                );
                self.fallback(request)
            }
        }
    }

    // The fallback keeps the batch count even in single mode and ignores
    // exclude_prompts; regenerate clients pick a fresh question out of the
    // oversized set themselves.
    fn fallback(&self, request: &GenerationRequest) -> GenerationResult {
        GenerationResult {
            questions: select_fallback(request.count, &request.context, request.regen_seed),
            source: Source::Fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use std::time::Duration;
    use valq_core::provider::TextModel;
    use valq_core::types::Mode;
    use valq_llm::mock::{MockCompletion, MockModel};
    use valq_llm::GeneratorConfig;

    fn batch_payload(count: usize) -> String {
        let questions: Vec<Value> = (0..count)
            .map(|n| {
                json!({
                    "prompt": format!("Scenario {n}: you value punctual arrivals or flexible plans?"),
                    "a": "Punctual arrivals keep my whole day on track.",
                    "b": "Flexible plans keep my whole day relaxed.",
                })
            })
            .collect();
        json!({ "questions": questions }).to_string()
    }

    fn pipeline_with(responses: Vec<MockCompletion>) -> QuestionPipeline {
        let model = Arc::new(MockModel::new(responses)) as Arc<dyn TextModel>;
        let config = GeneratorConfig {
            batch_timeout: Duration::from_millis(200),
            single_timeout: Duration::from_millis(100),
            ..Default::default()
        };
        QuestionPipeline::new(valq_llm::QuestionGenerator::new(model, config))
    }

    fn request(body: Value) -> GenerationRequest {
        GenerationRequest::from_value(&body)
    }

    #[tokio::test]
    async fn provider_success_is_served_as_provider() {
        let pipeline = pipeline_with(vec![MockCompletion::text(&batch_payload(10))]);
        let result = pipeline.produce(&request(json!({"count": 10}))).await;
        assert_eq!(result.source, Source::Provider);
        assert_eq!(result.questions.len(), 10);
        assert_eq!(result.questions[0].id, "q1");
    }

    #[tokio::test]
    async fn insufficient_provider_degrades_to_full_fallback_set() {
        // One tiny unusable question per attempt, three attempts, then bank.
        let stub = MockCompletion::text(
            r#"{"questions": [{"prompt": "Too short", "a": "x", "b": "y"}]}"#,
        );
        let pipeline = pipeline_with(vec![stub.clone(), stub.clone(), stub]);
        let result = pipeline.produce(&request(json!({"count": 10}))).await;
        assert_eq!(result.source, Source::Fallback);
        assert_eq!(result.questions.len(), 10);
    }

    #[tokio::test]
    async fn provider_errors_are_absorbed() {
        let boom = MockCompletion::Error(valq_core::ProviderError::Network("down".into()));
        let pipeline = pipeline_with(vec![boom.clone(), boom.clone(), boom]);
        let result = pipeline.produce(&request(json!({"count": 5}))).await;
        assert_eq!(result.source, Source::Fallback);
        assert_eq!(result.questions.len(), 5);
    }

    #[tokio::test]
    async fn single_mode_serves_one_provider_question() {
        let payload = batch_payload(1);
        let pipeline = pipeline_with(vec![MockCompletion::text(&payload)]);
        let result = pipeline
            .produce(&request(json!({"count": 10, "mode": "single"})))
            .await;
        assert_eq!(result.source, Source::Provider);
        assert_eq!(result.questions.len(), 1);
    }

    #[tokio::test]
    async fn single_mode_fallback_keeps_the_batch_count() {
        let bad = MockCompletion::text("not json");
        let pipeline = pipeline_with(vec![bad.clone(), bad]);
        let result = pipeline
            .produce(&request(json!({"count": 10, "mode": "single"})))
            .await;
        assert_eq!(result.source, Source::Fallback);
        assert_eq!(result.questions.len(), 10);
    }

    #[tokio::test]
    async fn fallback_is_deterministic_for_identical_requests() {
        let body = json!({"count": 6, "context": {"a": 1}, "regenSeed": 4});
        let bad = MockCompletion::text("not json");

        let first = pipeline_with(vec![bad.clone(), bad.clone(), bad.clone()])
            .produce(&request(body.clone()))
            .await;
        let second = pipeline_with(vec![bad.clone(), bad.clone(), bad])
            .produce(&request(body))
            .await;

        assert_eq!(first.source, Source::Fallback);
        assert_eq!(first.questions, second.questions);
    }
}
