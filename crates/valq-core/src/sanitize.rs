use std::collections::HashSet;

use serde_json::Value;

use crate::policy;
use crate::types::Question;

/// Minimum length of a normalized field, in Unicode scalar values.
pub const MIN_FIELD_CHARS: usize = 8;
/// Maximum length of a normalized field, in Unicode scalar values.
pub const MAX_FIELD_CHARS: usize = 200;

/// Collapses internal whitespace runs to single spaces and trims the ends.
pub fn normalize_text(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Total extraction of one candidate field: absent, non-string, empty, or
/// out-of-bounds values all map to None rather than an error.
fn field_text(candidate: &Value, key: &str) -> Option<String> {
    let raw = candidate.get(key)?.as_str()?;
    let compact = normalize_text(raw);
    let chars = compact.chars().count();
    if !(MIN_FIELD_CHARS..=MAX_FIELD_CHARS).contains(&chars) {
        return None;
    }
    Some(compact)
}

/// Cleans an untrusted candidate tree into at most `target_count` questions.
///
/// Candidates are evaluated in input order and rejected at the first failed
/// gate: shape/length, then content policy, then case-insensitive prompt
/// dedup. Scanning stops once `target_count` candidates are accepted. Ids are
/// re-stamped `q1..qN` over the accepted sequence; incoming ids are ignored.
///
/// Never pads: the result may be shorter than `target_count`.
pub fn sanitize_candidates(raw: &Value, target_count: usize) -> Vec<Question> {
    let Some(items) = raw.as_array() else {
        return Vec::new();
    };

    let mut seen_prompts = HashSet::new();
    let mut accepted = Vec::new();

    for item in items {
        if accepted.len() >= target_count {
            break;
        }
        let (Some(prompt), Some(a), Some(b)) = (
            field_text(item, "prompt"),
            field_text(item, "a"),
            field_text(item, "b"),
        ) else {
            continue;
        };
        if policy::is_disallowed(&prompt, &a, &b) {
            continue;
        }
        if !seen_prompts.insert(prompt.to_lowercase()) {
            continue;
        }
        accepted.push(Question {
            id: String::new(),
            prompt,
            a,
            b,
        });
    }

    assign_ids(accepted)
}

/// Stamps sequential positional ids over a question sequence.
pub(crate) fn assign_ids(mut questions: Vec<Question>) -> Vec<Question> {
    for (index, question) in questions.iter_mut().enumerate() {
        question.id = format!("q{}", index + 1);
    }
    questions
}
