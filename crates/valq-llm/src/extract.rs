use serde_json::Value;

/// Removes a surrounding markdown code fence, if present, so fenced provider
/// output still parses as JSON. Tolerates a missing closing fence.
pub fn strip_code_fence(raw: &str) -> &str {
    let mut text = raw.trim();
    if let Some(rest) = text.strip_prefix("```") {
        let rest = rest.strip_prefix("json").unwrap_or(rest);
        text = rest.trim_start();
        if let Some(body) = text.strip_suffix("```") {
            text = body.trim_end();
        }
    }
    text
}

/// Locates the candidate list inside a parsed provider payload: either the
/// payload is the list itself, or it carries a `questions` key. Anything else
/// maps to Null, which the sanitizer treats as no candidates.
pub fn candidate_list(payload: &Value) -> &Value {
    match payload {
        Value::Object(map) => map.get("questions").unwrap_or(&Value::Null),
        other => other,
    }
}
