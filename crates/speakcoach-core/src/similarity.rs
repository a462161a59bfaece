//! Token-level text similarity.
//!
//! Compares a spoken transcript against its target sentence by blending
//! token edit distance (ordering and word choice) with vocabulary overlap
//! (right words in any order). Both terms normalize by the longer token
//! sequence, so omissions and insertions are penalized alike.

use std::collections::HashSet;

/// Weight of the edit-distance term in the similarity blend.
pub const WORD_SIM_WEIGHT: f64 = 0.6;

/// Weight of the vocabulary-overlap term in the similarity blend.
pub const OVERLAP_WEIGHT: f64 = 0.4;

/// Normalize a sentence into lowercase word tokens.
///
/// Keeps ASCII letters and apostrophes; every other character becomes a
/// word boundary. Order and duplicates are preserved, empty tokens
/// discarded. Total: any input (including empty) yields a valid sequence.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c == '\'' {
                c
            } else {
                ' '
            }
        })
        .collect::<String>()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Token-level edit distance with unit insert/delete/substitute costs.
pub fn edit_distance<S: AsRef<str>>(a: &[S], b: &[S]) -> usize {
    let (m, n) = (a.len(), b.len());
    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0usize; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = usize::from(a[i - 1].as_ref() != b[j - 1].as_ref());
            curr[j] = (prev[j] + 1)
                .min(curr[j - 1] + 1)
                .min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Similarity of a spoken transcript to its target sentence, in `[0, 1]`.
///
/// Either side tokenizing to nothing scores 0.
pub fn similarity(target: &str, said: &str) -> f64 {
    let t = tokenize(target);
    let s = tokenize(said);
    if t.is_empty() || s.is_empty() {
        return 0.0;
    }

    let max_len = t.len().max(s.len()) as f64;
    let word_sim = 1.0 - edit_distance(&t, &s) as f64 / max_len;

    let target_words: HashSet<&str> = t.iter().map(String::as_str).collect();
    let overlap = s
        .iter()
        .filter(|w| target_words.contains(w.as_str()))
        .count() as f64
        / max_len;

    (WORD_SIM_WEIGHT * word_sim + OVERLAP_WEIGHT * overlap).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_strips_punctuation_and_case() {
        assert_eq!(
            tokenize("Hello, World! It's 9 a.m."),
            vec!["hello", "world", "it's", "a", "m"]
        );
    }

    #[test]
    fn tokenize_empty_and_symbol_only_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("123 !?").is_empty());
    }

    #[test]
    fn edit_distance_identity_is_zero() {
        let a = tokenize("I like to eat rice and fish");
        assert_eq!(edit_distance(&a, &a), 0);
    }

    #[test]
    fn edit_distance_is_symmetric() {
        let a = tokenize("I like rice");
        let b = tokenize("I really like fried rice");
        assert_eq!(edit_distance(&a, &b), edit_distance(&b, &a));
        assert_eq!(edit_distance(&a, &b), 2);
    }

    #[test]
    fn edit_distance_against_empty_is_length() {
        let a = tokenize("one two three");
        let empty: Vec<String> = Vec::new();
        assert_eq!(edit_distance(&a, &empty), 3);
        assert_eq!(edit_distance(&empty, &a), 3);
    }

    #[test]
    fn similarity_identity_is_one() {
        let text = "Could you please repeat that more slowly?";
        assert!((similarity(text, text) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn similarity_of_empty_input_is_zero() {
        assert_eq!(similarity("I like rice", ""), 0.0);
        assert_eq!(similarity("", "I like rice"), 0.0);
        assert_eq!(similarity("", ""), 0.0);
    }

    #[test]
    fn similarity_stays_in_unit_interval() {
        let cases = [
            ("I like to eat rice and fish", "completely unrelated words here"),
            ("short", "a much longer transcript with many extra words added"),
            ("Where are you from?", "where you are from"),
        ];
        for (target, said) in cases {
            let sim = similarity(target, said);
            assert!((0.0..=1.0).contains(&sim), "similarity {sim} out of range");
        }
    }

    #[test]
    fn reordered_words_score_above_disjoint_words() {
        let target = "I prefer trains to buses";
        let reordered = similarity(target, "to buses I prefer trains");
        let disjoint = similarity(target, "cats enjoy sleeping all day");
        assert!(reordered > disjoint);
        assert_eq!(disjoint, 0.0);
    }

    #[test]
    fn close_transcript_scores_high_but_below_identity() {
        let target = "I usually wake up at 6 a.m. and go to school by bus";
        let said = "I usually wake up at 6 and go to school by bus";
        let sim = similarity(target, said);
        assert!(sim > 0.8);
        assert!(sim < 1.0);
    }
}
