use std::sync::LazyLock;

use regex::RegexSet;

/// Topics a question must never touch: payment mechanics, product surface
/// vocabulary, and in-product contact channels. Matching is word-boundary
/// aware against the lower-cased question text, so over-matching is possible
/// and accepted; the fallback bank absorbs the losses.
///
/// Versioned constant. Not user-configurable.
pub const DISALLOWED_TOPIC_PATTERNS: &[&str] = &[
    r"\bpay(?:ment|ing)?\b",
    r"\bfare(?:s)?\b",
    r"\bprice(?:s|d|ing)?\b",
    r"\bcost(?:s|ly)?\b",
    r"\bdiscount(?:s|ed)?\b",
    r"\bsubscription(?:s)?\b",
    r"\bpromo(?:tion|code|codes)?\b",
    r"\bwallet\b",
    r"\bcredit\s*card\b",
    r"\bdebit\s*card\b",
    r"\bcash\b",
    r"\bvenmo\b",
    r"\bpaypal\b",
    r"\bapple\s*pay\b",
    r"\bgoogle\s*pay\b",
    r"\bapp\b",
    r"\bfeature(?:s)?\b",
    r"\bui\b",
    r"\binterface\b",
    r"\bsettings?\b",
    r"\bnotification(?:s)?\b",
    r"\bbutton(?:s)?\b",
    r"\bin[-\s]?app\b",
    r"\bmessage(?:s|ing)?\b",
    r"\bchat(?:ting)?\b",
    r"\bphone\s*call(?:s)?\b",
    r"\bcall\s+driver(?:s)?\b",
    r"\bcontact\s+method(?:s)?\b",
    r"\bhow\s+to\s+contact\b",
];

static DISALLOWED_TOPICS: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new(DISALLOWED_TOPIC_PATTERNS).expect("disallowed topic patterns must compile")
});

/// Returns true if any field of the question touches a disallowed topic.
/// Pure classifier; one match anywhere disqualifies the whole question.
pub fn is_disallowed(prompt: &str, a: &str, b: &str) -> bool {
    let full = format!("{prompt} {a} {b}").to_lowercase();
    DISALLOWED_TOPICS.is_match(&full)
}
