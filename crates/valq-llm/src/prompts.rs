use serde_json::Value;

use valq_core::provider::GenerationInstruction;
use valq_core::types::Mode;

/// Single mode lists at most this many previously seen prompts to avoid.
const MAX_EXCLUDED_PROMPTS: usize = 8;

const SINGLE_TEMPERATURE: f32 = 0.6;
const BATCH_TEMPERATURE: f32 = 0.8;
const SINGLE_MAX_TOKENS: u32 = 260;
const BATCH_MAX_TOKENS: u32 = 900;

const SYSTEM_DIRECTIVE: &str = concat!(
    "Goal: Generate A/B questions to elicit user values for matching users for carpooling. ",
    "Focus on higher-level value dimensions such as punctuality, efficiency, trustworthiness, kindness, ",
    "safety, communication, flexibility, comfort, environmental impact, reliability, and fairness. ",
    "Questions must reveal meaningful tradeoffs between values, not surface-level wording changes. ",
    "Do not ask about processes like payment methods, fares, pricing, or discounts. ",
    "Vocabulary should be simple and accessible, avoiding jargon or abstract concepts. ",
    "Return strict JSON only with this exact shape: ",
    "{\"questions\":[{\"prompt\":\"...\",\"a\":\"...\",\"b\":\"...\"}]}. ",
    "No markdown. No commentary. No extra keys.",
);

/// Builds the full instruction for one generation call. The user directive
/// differs by mode: single asks for exactly one question and names prompts to
/// avoid; batch asks for `count` questions and pushes the model to vary the
/// value tradeoff across them. Neither hint is enforced here; the sanitizer
/// is the only gate that counts.
pub fn build_instruction(
    count: usize,
    context: &Value,
    mode: Mode,
    exclude_prompts: &[String],
) -> GenerationInstruction {
    let context_json = context.to_string();

    match mode {
        Mode::Single => {
            let banned = exclude_prompts
                .iter()
                .take(MAX_EXCLUDED_PROMPTS)
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            GenerationInstruction {
                system: SYSTEM_DIRECTIVE.to_string(),
                user: format!(
                    "Generate 1 unique A/B question tailored to carpooling values. \
                     Target one meaningful value tradeoff (e.g., punctuality vs flexibility, efficiency vs comfort). \
                     Do not mention app features, payment, fares, or pricing. \
                     Keep it concise and scenario-based. Options must be <= 140 chars. \
                     Avoid these prompts: {banned}. \
                     User context: {context_json}"
                ),
                temperature: SINGLE_TEMPERATURE,
                max_tokens: SINGLE_MAX_TOKENS,
            }
        }
        Mode::Batch => GenerationInstruction {
            system: SYSTEM_DIRECTIVE.to_string(),
            user: format!(
                "Generate {count} unique A/B questions tailored to carpooling. \
                 Each question should map to one primary value tradeoff (e.g., punctuality vs flexibility, \
                 efficiency vs comfort, consistency vs flexibility, sustainability vs speed). \
                 Do not ask about app features, payment methods, fares, or pricing. \
                 Each prompt should be concise and scenario-based. \
                 Each option should be clear, balanced, and <= 160 chars. \
                 Avoid repeating the same value pairing across multiple questions. \
                 User context: {context_json}"
            ),
            temperature: BATCH_TEMPERATURE,
            max_tokens: BATCH_MAX_TOKENS,
        },
    }
}
