use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::response::ErrorResponse;

/// 애플리케이션 전역 에러 타입
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 요청 본문 JSON 파싱 실패 (필드 누락, 타입 불일치 등)
    #[error("Invalid request body: {0}")]
    JsonParseFailed(String),

    /// 존재하지 않는 시나리오 참조
    #[error("{0}")]
    NotFound(String),

    /// LLM 호출 실패 (네트워크, 인증, rate limit, 타임아웃, 빈 응답)
    #[error("{0}")]
    AiGeneration(String),

    /// 그 밖의 서버 내부 에러
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn ai_generation(msg: impl Into<String>) -> Self {
        AppError::AiGeneration(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    /// 업스트림 에러 메시지 앞에 엔드포인트별 문맥을 붙입니다.
    ///
    /// AI 생성 실패 이외의 에러는 그대로 반환합니다.
    pub fn with_ai_context(self, context: &str) -> Self {
        match self {
            AppError::AiGeneration(msg) => AppError::AiGeneration(format!("{}: {}", context, msg)),
            other => other,
        }
    }

    /// 에러 코드 반환
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::JsonParseFailed(_) => "COMMON400",
            AppError::NotFound(_) => "SCENARIO_404",
            AppError::AiGeneration(_) => "AI_001",
            AppError::Internal(_) => "COMMON500",
        }
    }

    /// HTTP 상태 코드 반환
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::JsonParseFailed(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AiGeneration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(code, error = %message, "Request failed");
        } else {
            tracing::warn!(code, error = %message, "Request rejected");
        }

        (status, Json(ErrorResponse::new(code, message))).into_response()
    }
}

/// JsonRejection을 AppError로 변환
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::JsonParseFailed(rejection.body_text())
    }
}
