use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Smallest question set a caller may request.
pub const MIN_COUNT: usize = 1;
/// Largest question set a caller may request.
pub const MAX_COUNT: usize = 20;
/// Used when the inbound count is absent or unparsable.
pub const DEFAULT_COUNT: usize = 10;

/// A single A/B preference question.
///
/// `id` is a positional tag (`q1..qN`) stamped at the end of processing; ids
/// arriving from a provider or a caller are never trusted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub a: String,
    pub b: String,
}

/// Generation mode requested by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Produce a full set of questions at once.
    Batch,
    /// Produce one question, avoiding previously seen prompts.
    Single,
}

impl Mode {
    /// Only the exact string `"single"` selects single mode; everything else,
    /// including absent or non-string values, means batch.
    fn from_field(raw: Option<&Value>) -> Self {
        match raw.and_then(Value::as_str) {
            Some("single") => Self::Single,
            _ => Self::Batch,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Batch => "batch",
            Self::Single => "single",
        }
    }
}

/// A fully-defaulted, clamped generation request.
///
/// Built from an untyped JSON body; construction never fails. Field-level
/// garbage maps to defaults, so the only way a caller sees an error is a body
/// that is not JSON at all, which the transport layer rejects before this
/// type is involved.
#[derive(Clone, Debug)]
pub struct GenerationRequest {
    pub count: usize,
    pub context: Value,
    pub mode: Mode,
    pub exclude_prompts: Vec<String>,
    pub regen_seed: i64,
}

impl GenerationRequest {
    pub fn from_value(body: &Value) -> Self {
        Self {
            count: clamp_count(body.get("count")),
            context: context_field(body.get("context")),
            mode: Mode::from_field(body.get("mode")),
            exclude_prompts: string_list(body.get("excludePrompts")),
            regen_seed: seed_field(body.get("regenSeed")),
        }
    }

    /// Number of questions the provider path must deliver. Single mode always
    /// targets one question regardless of `count`.
    pub fn target_count(&self) -> usize {
        match self.mode {
            Mode::Single => 1,
            Mode::Batch => self.count,
        }
    }
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self::from_value(&Value::Null)
    }
}

/// Result of one pipeline run: exactly the target number of questions plus
/// the origin discriminant.
#[derive(Clone, Debug, Serialize)]
pub struct GenerationResult {
    pub questions: Vec<Question>,
    pub source: Source,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Provider,
    Fallback,
}

fn clamp_count(raw: Option<&Value>) -> usize {
    let parsed = match raw {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    match parsed {
        Some(n) => n.clamp(MIN_COUNT as i64, MAX_COUNT as i64) as usize,
        None => DEFAULT_COUNT,
    }
}

fn seed_field(raw: Option<&Value>) -> i64 {
    match raw {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
    .unwrap_or(0)
}

fn context_field(raw: Option<&Value>) -> Value {
    match raw {
        Some(Value::Null) | None => Value::Object(serde_json::Map::new()),
        Some(other) => other.clone(),
    }
}

fn string_list(raw: Option<&Value>) -> Vec<String> {
    match raw.and_then(Value::as_array) {
        Some(items) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_for_empty_body() {
        let request = GenerationRequest::from_value(&json!({}));
        assert_eq!(request.count, DEFAULT_COUNT);
        assert_eq!(request.mode, Mode::Batch);
        assert_eq!(request.regen_seed, 0);
        assert!(request.exclude_prompts.is_empty());
        assert_eq!(request.context, json!({}));
    }

    #[test]
    fn count_is_clamped_not_rejected() {
        let low = GenerationRequest::from_value(&json!({"count": -3}));
        assert_eq!(low.count, MIN_COUNT);

        let high = GenerationRequest::from_value(&json!({"count": 999}));
        assert_eq!(high.count, MAX_COUNT);

        let exact = GenerationRequest::from_value(&json!({"count": 7}));
        assert_eq!(exact.count, 7);
    }

    #[test]
    fn count_accepts_numeric_strings_and_truncates_floats() {
        let from_string = GenerationRequest::from_value(&json!({"count": "5"}));
        assert_eq!(from_string.count, 5);

        let from_float = GenerationRequest::from_value(&json!({"count": 5.9}));
        assert_eq!(from_float.count, 5);

        let garbage = GenerationRequest::from_value(&json!({"count": "many"}));
        assert_eq!(garbage.count, DEFAULT_COUNT);

        let wrong_type = GenerationRequest::from_value(&json!({"count": [1, 2]}));
        assert_eq!(wrong_type.count, DEFAULT_COUNT);
    }

    #[test]
    fn mode_defaults_to_batch_on_unknown_values() {
        assert_eq!(
            GenerationRequest::from_value(&json!({"mode": "single"})).mode,
            Mode::Single
        );
        assert_eq!(
            GenerationRequest::from_value(&json!({"mode": "SINGLE"})).mode,
            Mode::Batch
        );
        assert_eq!(
            GenerationRequest::from_value(&json!({"mode": 7})).mode,
            Mode::Batch
        );
    }

    #[test]
    fn single_mode_targets_one_question() {
        let request = GenerationRequest::from_value(&json!({"count": 10, "mode": "single"}));
        assert_eq!(request.count, 10);
        assert_eq!(request.target_count(), 1);
    }

    #[test]
    fn exclude_prompts_keeps_only_strings() {
        let request = GenerationRequest::from_value(&json!({
            "excludePrompts": ["seen before", 42, null, "another one"]
        }));
        assert_eq!(request.exclude_prompts, vec!["seen before", "another one"]);

        let not_a_list = GenerationRequest::from_value(&json!({"excludePrompts": "seen"}));
        assert!(not_a_list.exclude_prompts.is_empty());
    }

    #[test]
    fn regen_seed_parses_or_defaults() {
        assert_eq!(
            GenerationRequest::from_value(&json!({"regenSeed": 42})).regen_seed,
            42
        );
        assert_eq!(
            GenerationRequest::from_value(&json!({"regenSeed": "17"})).regen_seed,
            17
        );
        assert_eq!(
            GenerationRequest::from_value(&json!({"regenSeed": {}})).regen_seed,
            0
        );
    }

    #[test]
    fn context_passes_through_opaquely() {
        let request = GenerationRequest::from_value(&json!({
            "context": {"canGiveRides": true, "homeArea": "north"}
        }));
        assert_eq!(request.context["homeArea"], "north");
    }

    #[test]
    fn source_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Source::Provider).unwrap(), "\"provider\"");
        assert_eq!(serde_json::to_string(&Source::Fallback).unwrap(), "\"fallback\"");
    }

    #[test]
    fn result_wire_shape() {
        let result = GenerationResult {
            questions: vec![Question {
                id: "q1".into(),
                prompt: "During rides, you prefer:".into(),
                a: "A calm, quiet ride where we can relax.".into(),
                b: "A friendly ride with light conversation.".into(),
            }],
            source: Source::Fallback,
        };
        let wire = serde_json::to_value(&result).unwrap();
        assert_eq!(wire["source"], "fallback");
        assert_eq!(wire["questions"][0]["id"], "q1");
        assert!(wire["questions"][0].get("prompt").is_some());
    }
}
