//! 연습 응답 피드백 프롬프트

use super::Prompt;
use crate::domain::scenario::Scenario;

/// 피드백 System Prompt
pub const SYSTEM_PROMPT: &str = r#"You are a sales trainer providing concise feedback on practice responses.

FEEDBACK FORMAT:
1. Keep feedback under 150 words
2. Be encouraging but honest
3. Provide specific, actionable suggestions
4. Rate responses 1-10 based on effectiveness

Structure:
**Score:** [X/10]
**What worked:** [1-2 strengths]
**Improve:** [2-3 specific suggestions]"#;

pub fn user_prompt(scenario: &Scenario, user_response: &str) -> String {
    format!(
        "Objection: \"{}\"\nContext: {}\nExpected approach: {}\n\nAgent's response: \"{}\"\n\nProvide brief, actionable feedback with a score 1-10.",
        scenario.objection, scenario.context, scenario.suggested_response, user_response
    )
}

pub fn build_feedback_prompt(scenario: &Scenario, user_response: &str) -> Prompt {
    Prompt {
        system: SYSTEM_PROMPT.to_string(),
        user: user_prompt(scenario, user_response),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_prompt_should_require_score_and_sections() {
        assert!(SYSTEM_PROMPT.contains("**Score:** [X/10]"));
        assert!(SYSTEM_PROMPT.contains("**What worked:**"));
        assert!(SYSTEM_PROMPT.contains("**Improve:**"));
        assert!(SYSTEM_PROMPT.contains("under 150 words"));
    }

    #[test]
    fn user_prompt_should_embed_scenario_and_agent_response() {
        // Arrange
        let scenario = Scenario {
            id: 1,
            category: "Pricing & Commission Objections".to_string(),
            objection: "Your commission is too high.".to_string(),
            context: "Comparing fees.".to_string(),
            suggested_response: "Reframe as an investment.".to_string(),
        };

        // Act
        let prompt = build_feedback_prompt(&scenario, "I understand, but look at the value.");

        // Assert
        assert_eq!(prompt.system, SYSTEM_PROMPT);
        assert!(prompt.user.contains("Objection: \"Your commission is too high.\""));
        assert!(prompt.user.contains("Context: Comparing fees."));
        assert!(prompt.user.contains("Expected approach: Reframe as an investment."));
        assert!(prompt
            .user
            .contains("Agent's response: \"I understand, but look at the value.\""));
    }
}
