use std::sync::Arc;

use super::client::{ChatRequest, LlmClient};
use super::dto::{AiResponse, ObjectionRequest, PracticeFeedback, PracticeResponse};
use super::parser::parse_feedback;
use super::prompt::{build_feedback_prompt, build_objection_prompt};
use crate::domain::scenario::ScenarioCatalog;
use crate::error::AppError;

const OBJECTION_SESSION_PREFIX: &str = "objection";
const PRACTICE_SESSION_PREFIX: &str = "practice";

/// 반론 대응 코칭 서비스
///
/// 시나리오 선택, 프롬프트 구성, LLM 호출, 응답 파싱을 하나로 묶습니다.
/// 요청 간 공유하는 가변 상태는 없습니다.
#[derive(Clone)]
pub struct CoachService {
    client: LlmClient,
    catalog: Arc<ScenarioCatalog>,
}

impl CoachService {
    pub fn new(client: LlmClient, catalog: Arc<ScenarioCatalog>) -> Self {
        Self { client, catalog }
    }

    /// 반론에 대한 코칭 응답 생성
    ///
    /// 시나리오 ID가 없거나 카탈로그에 없으면 시나리오 없이 진행합니다.
    pub async fn handle_objection(&self, request: ObjectionRequest) -> Result<AiResponse, AppError> {
        let scenario_used = request
            .scenario_id
            .and_then(|id| self.catalog.find_by_id(id))
            .cloned();

        if let (Some(id), None) = (request.scenario_id, &scenario_used) {
            tracing::debug!(scenario_id = id, "Scenario not found, using generic context");
        }

        let prompt = build_objection_prompt(
            &request.objection_text,
            request.language.as_deref(),
            scenario_used.as_ref(),
        );

        let response = self
            .client
            .complete(ChatRequest::new(OBJECTION_SESSION_PREFIX, prompt))
            .await
            .map_err(|e| e.with_ai_context("Error generating AI response"))?;

        Ok(AiResponse {
            response,
            scenario_used,
        })
    }

    /// 연습 응답에 대한 점수와 피드백 생성
    pub async fn practice_feedback(
        &self,
        request: PracticeResponse,
    ) -> Result<PracticeFeedback, AppError> {
        let scenario = self
            .catalog
            .find_by_id(request.scenario_id)
            .ok_or_else(|| AppError::not_found("Scenario not found"))?;

        let prompt = build_feedback_prompt(scenario, &request.user_response);

        let response = self
            .client
            .complete(ChatRequest::new(PRACTICE_SESSION_PREFIX, prompt))
            .await
            .map_err(|e| e.with_ai_context("Error generating feedback"))?;

        let parsed = parse_feedback(&response);
        tracing::debug!(
            score = parsed.score,
            suggestion_count = parsed.suggestions.len(),
            "Feedback parsed"
        );

        Ok(PracticeFeedback {
            feedback: parsed.feedback,
            score: Some(parsed.score),
            suggestions: parsed.suggestions,
        })
    }

    /// LLM 제공자 연결 확인
    pub async fn check_connectivity(&self) -> Result<(), AppError> {
        self.client.check_connectivity().await
    }
}
