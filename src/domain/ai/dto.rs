use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::scenario::Scenario;

/// 반론 대응 요청
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ObjectionRequest {
    /// 가맹점주의 반론 (빈 문자열도 그대로 LLM에 전달)
    #[schema(example = "Bahut mehenga hai, itna budget nahi hai mera.")]
    pub objection_text: String,

    /// 응답 언어 (기본값 English)
    #[serde(default = "default_language")]
    #[schema(example = "Hinglish")]
    pub language: Option<String>,

    /// 참고할 시나리오 ID (없는 ID면 시나리오 없이 진행)
    #[serde(default)]
    #[schema(example = 2)]
    pub scenario_id: Option<i64>,
}

fn default_language() -> Option<String> {
    Some("English".to_string())
}

/// 연습 응답 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResponseType {
    Voice,
    Text,
}

/// 연습 응답 피드백 요청
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct PracticeResponse {
    /// 연습한 시나리오 ID (반드시 존재해야 함)
    #[schema(example = 1)]
    pub scenario_id: i64,

    /// 상담원의 응답
    #[schema(example = "I understand the concern. Let me show you what you get for that fee.")]
    pub user_response: String,

    pub response_type: ResponseType,
}

/// 반론 대응 응답
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AiResponse {
    /// LLM이 생성한 코칭 응답
    pub response: String,

    /// 프롬프트에 사용된 시나리오
    pub scenario_used: Option<Scenario>,
}

/// 연습 응답 피드백
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PracticeFeedback {
    /// LLM 응답 원문
    pub feedback: String,

    /// 1~10 점수
    #[schema(example = 8, minimum = 1, maximum = 10)]
    pub score: Option<u8>,

    /// 개선 제안 (최대 3개)
    pub suggestions: Vec<String>,
}
