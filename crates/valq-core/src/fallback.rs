use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::bank::{BankEntry, QUESTION_BANK};
use crate::sanitize::assign_ids;
use crate::types::Question;

/// Selects `count` bank questions in a reproducible pseudo-random order.
///
/// The order is a pure function of `(context, regen_seed)`: the pair is
/// serialized canonically, hashed, and the digest prefix seeds the shuffle.
/// Identical inputs yield bit-identical output across runs and processes;
/// changing `regen_seed` gives clients a stateless "regenerate" lever.
///
/// Always succeeds. If `count` exceeds the bank size the full bank is
/// returned (the catalog is sized to cover every allowed count).
pub fn select_fallback(count: usize, context: &Value, regen_seed: i64) -> Vec<Question> {
    let mut pool: Vec<Question> = QUESTION_BANK.iter().map(BankEntry::to_question).collect();
    let mut rng = StdRng::seed_from_u64(fingerprint_seed(context, regen_seed));
    pool.shuffle(&mut rng);
    pool.truncate(count.min(QUESTION_BANK.len()));
    assign_ids(pool)
}

/// First 8 bytes of the SHA-256 digest of the canonical fingerprint text,
/// interpreted as a big-endian integer.
fn fingerprint_seed(context: &Value, regen_seed: i64) -> u64 {
    let mut text = String::from("{\"context\":");
    write_canonical(context, &mut text);
    text.push_str(",\"regen_seed\":");
    text.push_str(&regen_seed.to_string());
    text.push('}');

    let digest = Sha256::digest(text.as_bytes());
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(prefix)
}

/// Serializes a JSON value with object keys in sorted order, so equivalent
/// contexts fingerprint identically regardless of how the map was built.
fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            out.push('{');
            for (index, key) in keys.iter().enumerate() {
                if index > 0 {
                    out.push(',');
                }
                out.push_str(&Value::String((*key).clone()).to_string());
                out.push(':');
                write_canonical(&map[*key], out);
            }
            out.push('}');
        }
        Value::Array(items) => {
            out.push('[');
            for (index, item) in items.iter().enumerate() {
                if index > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        scalar => out.push_str(&scalar.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MAX_COUNT;
    use serde_json::json;
    use std::collections::HashSet;

    #[test]
    fn identical_inputs_yield_identical_output() {
        let context = json!({"a": 1});
        let first = select_fallback(5, &context, 0);
        let second = select_fallback(5, &context, 0);
        assert_eq!(first.len(), 5);
        assert_eq!(first, second);
    }

    #[test]
    fn key_order_does_not_change_the_fingerprint() {
        let mut forward = serde_json::Map::new();
        forward.insert("alpha".into(), json!(1));
        forward.insert("beta".into(), json!(2));

        let mut reverse = serde_json::Map::new();
        reverse.insert("beta".into(), json!(2));
        reverse.insert("alpha".into(), json!(1));

        assert_eq!(
            select_fallback(8, &Value::Object(forward), 3),
            select_fallback(8, &Value::Object(reverse), 3)
        );
    }

    #[test]
    fn every_allowed_count_returns_exactly_count_distinct_questions() {
        let context = json!({"homeArea": "north"});
        for count in 1..=MAX_COUNT {
            let selected = select_fallback(count, &context, 0);
            assert_eq!(selected.len(), count);

            let prompts: HashSet<&str> =
                selected.iter().map(|q| q.prompt.as_str()).collect();
            assert_eq!(prompts.len(), count, "duplicate bank pick at count {count}");

            for q in &selected {
                assert!(
                    QUESTION_BANK.iter().any(|entry| entry.prompt == q.prompt),
                    "selected question not in bank: {}",
                    q.prompt
                );
            }
        }
    }

    #[test]
    fn ids_are_sequential_after_selection() {
        let selected = select_fallback(4, &json!({}), 9);
        let ids: Vec<&str> = selected.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, ["q1", "q2", "q3", "q4"]);
    }

    #[test]
    fn regen_seed_changes_the_ordering() {
        let context = json!({"canGiveRides": true});
        let full = QUESTION_BANK.len();
        let base = select_fallback(full, &context, 0);
        // Not a hard guarantee for any single pair of seeds, so probe a few.
        let shifted = (1..=5).any(|seed| select_fallback(full, &context, seed) != base);
        assert!(shifted, "five distinct seeds all produced the same order");
    }

    #[test]
    fn oversized_count_returns_the_full_bank() {
        let selected = select_fallback(QUESTION_BANK.len() + 10, &json!({}), 0);
        assert_eq!(selected.len(), QUESTION_BANK.len());
    }

    #[test]
    fn canonical_form_is_stable_and_sorted() {
        let mut out = String::new();
        write_canonical(&json!({"b": [1, {"z": null, "a": "x"}], "a": true}), &mut out);
        assert_eq!(out, r#"{"a":true,"b":[1,{"a":"x","z":null}]}"#);
    }
}
