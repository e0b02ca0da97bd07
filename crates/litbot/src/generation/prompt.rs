//! Prompt templates for literature discussion

/// Prompt builder combining the reference text, the user's review and the question
pub struct PromptBuilder;

impl PromptBuilder {
    /// Build the discussion prompt
    pub fn build_prompt(corpus: &str, review: &str, question: &str) -> String {
        format!(
            "소설 원문:\n{corpus}\n\n감상문:\n{review}\n\n사용자 질문:\n{question}",
            corpus = corpus,
            review = review,
            question = question,
        )
    }
}
