use serde::Serialize;
use utoipa::ToSchema;

/// 에러 응답 형식
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// 성공 여부 (에러 시 항상 false)
    #[schema(example = false)]
    pub is_success: bool,

    /// 에러 코드
    #[schema(example = "SCENARIO_404")]
    pub code: String,

    /// 에러 메시지
    #[schema(example = "Scenario not found")]
    pub message: String,

    /// 에러 시 항상 null
    #[schema(value_type = Option<Object>)]
    pub result: Option<()>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            is_success: false,
            code: code.into(),
            message: message.into(),
            result: None,
        }
    }
}

/// 단순 메시지 응답
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Sales Training Assistant API")]
    pub message: String,
}
