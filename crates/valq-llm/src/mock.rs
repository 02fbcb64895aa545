use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use valq_core::errors::ProviderError;
use valq_core::provider::{GenerationInstruction, TextModel};

/// Pre-programmed completions for deterministic testing without API calls.
#[derive(Clone)]
pub enum MockCompletion {
    /// Return this raw assistant text.
    Text(String),
    /// Return an error from the complete() call itself.
    Error(ProviderError),
    /// Wait a duration, then resolve the inner completion.
    Delayed(Duration, Box<MockCompletion>),
}

impl MockCompletion {
    pub fn text(raw: &str) -> Self {
        Self::Text(raw.to_string())
    }

    pub fn delayed(delay: Duration, inner: MockCompletion) -> Self {
        Self::Delayed(delay, Box::new(inner))
    }
}

/// Mock model that plays back completions in sequence.
pub struct MockModel {
    responses: Vec<MockCompletion>,
    call_count: AtomicUsize,
}

impl MockModel {
    pub fn new(responses: Vec<MockCompletion>) -> Self {
        Self {
            responses,
            call_count: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl TextModel for MockModel {
    fn name(&self) -> &str {
        "mock"
    }

    fn model(&self) -> &str {
        "mock-model"
    }

    async fn complete(
        &self,
        _instruction: &GenerationInstruction,
    ) -> Result<String, ProviderError> {
        let index = self.call_count.fetch_add(1, Ordering::Relaxed);

        let Some(response) = self.responses.get(index) else {
            return Err(ProviderError::Malformed(format!(
                "MockModel: no completion configured for call {index}"
            )));
        };

        // Unroll nested delays iteratively to avoid recursive async.
        let mut current = response.clone();
        loop {
            match current {
                MockCompletion::Text(text) => return Ok(text),
                MockCompletion::Error(e) => return Err(e),
                MockCompletion::Delayed(delay, inner) => {
                    tokio::time::sleep(delay).await;
                    current = *inner;
                }
            }
        }
    }
}
