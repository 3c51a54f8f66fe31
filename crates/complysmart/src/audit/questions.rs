/// Prompts offered next to the free-text Q&A box.
pub const SUGGESTED_QUESTIONS: [&str; 6] = [
    "What are our biggest compliance risks?",
    "How can we improve our KYC verification rate?",
    "What regulatory changes should we prepare for?",
    "How does our compliance compare to industry standards?",
    "What immediate actions should we take to improve compliance?",
    "What penalties might we face for our current compliance gaps?",
];

pub fn suggested_question(index: usize) -> Option<&'static str> {
    SUGGESTED_QUESTIONS.get(index).copied()
}
