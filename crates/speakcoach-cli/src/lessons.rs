//! Built-in practice sentences.

use speakcoach_core::model::{CefrLevel, PracticeTab};

pub const PHRASES: [&str; 5] = [
    "Good morning! How are you today?",
    "Could you please repeat that more slowly?",
    "I would like a cup of coffee, please.",
    "Where is the nearest bus stop?",
    "Can you help me with this form?",
];

pub const SITUATIONS: [&str; 5] = [
    "At a restaurant: order food, ask about ingredients, and request the bill.",
    "Job interview: introduce yourself and describe your strengths.",
    "Travel: ask for directions and clarify ticket options.",
    "Shopping: compare two products and ask about discounts.",
    "School: ask your teacher for feedback on your assignment.",
];

pub const FREE_TALK: [&str; 5] = [
    "Talk about your favorite hobby and why you enjoy it.",
    "Describe a memorable trip you took.",
    "Explain your daily routine on a busy day.",
    "Discuss your goals for the next three months.",
    "Share your opinion on learning languages with AI.",
];

pub const CEFR_A1: [&str; 5] = [
    "Hello, my name is ___.",
    "I live in ___.",
    "I like to eat rice and fish.",
    "What is your name?",
    "Where are you from?",
];

pub const CEFR_A2: [&str; 5] = [
    "I usually wake up at 6 a.m. and go to school by bus.",
    "Could you please speak more slowly?",
    "I want to buy a ticket to Kolkata.",
    "I don’t understand this word. Can you explain it?",
    "How much does this cost?",
];

pub const CEFR_B1: [&str; 5] = [
    "Last weekend I visited my grandparents and helped them in the garden.",
    "I prefer trains to buses because they are more comfortable.",
    "I’m learning English to study abroad next year.",
    "Can you tell me the way to the nearest pharmacy?",
    "I had a problem with my phone, but I fixed it.",
];

pub const CEFR_B2: [&str; 5] = [
    "In my opinion, online education is flexible but lacks face-to-face interaction.",
    "If I had known about the exam earlier, I would have prepared better.",
    "The film was engaging overall, although the ending felt rushed.",
    "I find it challenging to balance work and study at the same time.",
    "Could you clarify what you mean by 'scalability'?",
];

/// Practice sentences for a tab, with `level` selecting the CEFR list.
pub fn prompts_for(tab: PracticeTab, level: CefrLevel) -> &'static [&'static str] {
    match tab {
        PracticeTab::Phrases => &PHRASES,
        PracticeTab::Situations => &SITUATIONS,
        PracticeTab::FreeTalk => &FREE_TALK,
        PracticeTab::Cefr => match level {
            CefrLevel::A1 => &CEFR_A1,
            CefrLevel::A2 => &CEFR_A2,
            CefrLevel::B1 => &CEFR_B1,
            CefrLevel::B2 => &CEFR_B2,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tab_has_sentences() {
        for tab in [
            PracticeTab::Phrases,
            PracticeTab::Situations,
            PracticeTab::FreeTalk,
            PracticeTab::Cefr,
        ] {
            assert_eq!(prompts_for(tab, CefrLevel::A1).len(), 5);
        }
    }

    #[test]
    fn cefr_levels_select_different_lists() {
        assert_ne!(
            prompts_for(PracticeTab::Cefr, CefrLevel::A1),
            prompts_for(PracticeTab::Cefr, CefrLevel::B2)
        );
    }
}
