use std::sync::Arc;
use std::time::{Duration, Instant};

use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use uuid::Uuid;

use super::prompt::Prompt;
use crate::config::LlmConfig;
use crate::error::AppError;

/// 한 번의 LLM 호출 요청
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    /// 제공자 쪽 로그용 세션 토큰 (응답에는 영향 없음)
    pub session_id: String,
    pub system: String,
    pub user: String,
}

impl ChatRequest {
    /// `<prefix>_<uuid>` 형식의 새 세션 토큰으로 요청을 만듭니다.
    pub fn new(session_prefix: &str, prompt: Prompt) -> Self {
        Self {
            session_id: format!("{}_{}", session_prefix, Uuid::new_v4()),
            system: prompt.system,
            user: prompt.user,
        }
    }
}

/// LLM 게이트웨이 인터페이스
///
/// 외부 chat completion API 호출을 추상화하여 테스트에서 Mock 객체로 대체할 수 있습니다.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait LlmGateway: Send + Sync {
    /// 채팅 완성 요청
    ///
    /// 전체 응답 텍스트를 돌려주거나 `AppError::AiGeneration`으로 실패합니다.
    async fn complete(&self, request: ChatRequest) -> Result<String, AppError>;

    /// API 연결 상태 확인 (모델 목록 조회)
    async fn check_connectivity(&self) -> Result<(), AppError>;
}

/// Arc로 래핑된 LlmGateway (Clone 지원)
pub type LlmClient = Arc<dyn LlmGateway>;

/// OpenAI 호환 chat completion API 클라이언트
#[derive(Clone)]
pub struct OpenAiGateway {
    client: Client<OpenAIConfig>,
    model: String,
    timeout: Duration,
}

impl OpenAiGateway {
    pub fn new(config: &LlmConfig) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(config.api_key.as_str())
            .with_api_base(config.api_base.as_str());

        Self {
            client: Client::with_config(openai_config),
            model: config.model.clone(),
            timeout: config.timeout,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

/// 제공자 에러를 단일 AI 생성 실패로 변환
fn to_generation_error(error: OpenAIError) -> AppError {
    match error {
        OpenAIError::ApiError(api_err) => AppError::ai_generation(api_err.message),
        other => AppError::ai_generation(other.to_string()),
    }
}

/// 응답 본문이 아예 없을 때만 실패로 봅니다. 빈 문자열은 그대로 파서에 넘깁니다.
fn reply_text(content: Option<String>) -> Result<String, AppError> {
    content.ok_or_else(|| AppError::ai_generation("LLM returned no message content"))
}

fn build_messages(request: &ChatRequest) -> Result<Vec<ChatCompletionRequestMessage>, AppError> {
    let system = ChatCompletionRequestSystemMessageArgs::default()
        .content(request.system.as_str())
        .build()
        .map_err(|e| AppError::internal(e.to_string()))?;

    let user = ChatCompletionRequestUserMessageArgs::default()
        .content(request.user.clone())
        .build()
        .map_err(|e| AppError::internal(e.to_string()))?;

    Ok(vec![
        ChatCompletionRequestMessage::System(system),
        ChatCompletionRequestMessage::User(user),
    ])
}

#[async_trait::async_trait]
impl LlmGateway for OpenAiGateway {
    async fn complete(&self, request: ChatRequest) -> Result<String, AppError> {
        let completion = CreateChatCompletionRequestArgs::default()
            .model(self.model.as_str())
            .messages(build_messages(&request)?)
            .user(request.session_id.as_str())
            .build()
            .map_err(|e| AppError::internal(e.to_string()))?;

        let started = Instant::now();
        let response = tokio::time::timeout(self.timeout, self.client.chat().create(completion))
            .await
            .map_err(|_| {
                AppError::ai_generation(format!(
                    "LLM request timed out after {}s",
                    self.timeout.as_secs()
                ))
            })?
            .map_err(to_generation_error);

        let latency_ms = started.elapsed().as_millis() as u64;
        let response = match response {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(
                    session_id = %request.session_id,
                    model = %self.model,
                    latency_ms,
                    error = %e,
                    "LLM call failed"
                );
                return Err(e);
            }
        };

        let content = reply_text(
            response
                .choices
                .into_iter()
                .next()
                .and_then(|choice| choice.message.content),
        )?;

        tracing::info!(
            session_id = %request.session_id,
            model = %self.model,
            latency_ms,
            response_length = content.len(),
            "LLM call completed"
        );

        Ok(content)
    }

    async fn check_connectivity(&self) -> Result<(), AppError> {
        self.client
            .models()
            .list()
            .await
            .map_err(to_generation_error)?;
        Ok(())
    }
}
