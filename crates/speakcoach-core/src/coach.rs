//! Rule-based coaching feedback.
//!
//! The fallback path when no chat provider is configured or the provider
//! call fails: canned tips keyed on similarity and a few common learner
//! mistakes, plus a small-talk responder for free chat.

use std::sync::LazyLock;

use regex::Regex;

use crate::similarity::similarity;

/// Similarity below which the "match the key words" tip fires.
const LOW_SIMILARITY: f64 = 0.5;

/// Similarity above which the rewrite line turns into praise.
const NEAR_NATIVE: f64 = 0.7;

/// Utterances shorter than this many words get the full-sentence tip.
const MIN_UTTERANCE_WORDS: usize = 5;

static INFORMAL_CONTRACTIONS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bain't\b|gonna\b|wanna\b").expect("contraction phrase set must compile")
});

static AGREEMENT_ERRORS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bhe don't\b|she don't\b|I doesn't\b")
        .expect("agreement phrase set must compile")
});

/// Build local coach feedback for one attempt.
///
/// Always produces the same shape: a similarity line, one tip line, a
/// natural-phrasing rewrite, and a closing follow-up question.
pub fn local_feedback(target: &str, transcript: &str) -> String {
    let sim = similarity(target, transcript);

    let mut tips: Vec<&str> = Vec::new();
    if sim < LOW_SIMILARITY {
        tips.push("Try to match the key words from the target sentence.");
    }
    if INFORMAL_CONTRACTIONS.is_match(transcript) {
        tips.push("Use standard forms: 'going to', 'want to'.");
    }
    if AGREEMENT_ERRORS.is_match(transcript) {
        tips.push("Use 'doesn't' for he/she/it.");
    }
    if transcript.split_whitespace().count() < MIN_UTTERANCE_WORDS {
        tips.push("Speak in full sentences.");
    }

    let tip_line = if tips.is_empty() {
        "• Good job! Keep going.".to_string()
    } else {
        format!("• Tip: {}", tips.join(" "))
    };

    let rewrite = if sim > NEAR_NATIVE {
        "Great! Your version is close to native.".to_string()
    } else {
        format!("Try: \"{target}\"")
    };

    [
        "Local Coach Feedback:".to_string(),
        format!("• Similarity to target: {:.0}%", sim * 100.0),
        tip_line,
        format!("• Natural phrasing: {rewrite}"),
        "Question: Can you say it again with a different detail?".to_string(),
    ]
    .join("\n")
}

/// Canned reply for one free-chat turn when no provider is configured.
pub fn small_talk(input: &str) -> &'static str {
    let s = input.to_lowercase();
    if s.contains("hello") || s.contains("hi") || s.contains("hey") {
        "Hello! Let's practice speaking. Tell me about your day in 2-3 sentences."
    } else if s.contains("how are you") {
        "I'm great and ready to help you learn. How are you feeling today?"
    } else if s.contains("your name") {
        "I'm your AI English coach. Ask me for pronunciation or grammar tips!"
    } else if s.contains("pronunciation") {
        "Tip: Compare your recording with the model sentence. Stress content words; weaken function words."
    } else if s.contains("grammar") {
        "Grammar tip: For habits, use Present Simple: 'I go to school every day.' Not 'I am go.'"
    } else {
        "Nice! Can you add one more detail using 'because' or 'so'?"
    }
}
