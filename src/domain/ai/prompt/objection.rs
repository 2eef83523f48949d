//! 반론 대응 코칭 프롬프트

use super::{LanguageDirective, Prompt};
use crate::domain::scenario::Scenario;

/// 매칭된 시나리오가 없을 때 사용하는 컨텍스트
pub const GENERIC_CONTEXT: &str = "General sales objection";

/// 반론 대응 system prompt
pub fn system_prompt(directive: LanguageDirective) -> String {
    format!(
        r#"You are a sales coach providing quick, actionable responses to sales objections.

RESPONSE FORMAT REQUIREMENTS:
1. Keep responses under 200 words
2. Be direct and practical
3. Provide 2-3 specific phrases the agent can use
4. {}
5. Use simple, clear language

Structure your response as:
**Quick Strategy:** [1-2 sentences]
**What to Say:** [2-3 specific phrases]
**Why This Works:** [1 sentence explanation]"#,
        directive.instruction()
    )
}

/// 반론 대응 user prompt
///
/// `objection_text`는 비어 있어도 그대로 전달됩니다.
pub fn user_prompt(objection_text: &str, scenario: Option<&Scenario>) -> String {
    let context = scenario.map_or(GENERIC_CONTEXT, |s| s.context.as_str());

    format!(
        "Handle this objection: \"{}\"\n\nContext: {}\n\nGive a brief, practical response strategy.",
        objection_text, context
    )
}

pub fn build_objection_prompt(
    objection_text: &str,
    language: Option<&str>,
    scenario: Option<&Scenario>,
) -> Prompt {
    Prompt {
        system: system_prompt(LanguageDirective::from_language(language)),
        user: user_prompt(objection_text, scenario),
    }
}
