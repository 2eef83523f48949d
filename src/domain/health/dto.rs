use serde::Serialize;
use utoipa::ToSchema;

/// `/health` 응답
#[derive(Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub status: HealthState,
    #[schema(example = "0.1.0")]
    pub version: &'static str,
    #[schema(example = 3600)]
    pub uptime_secs: u64,
    /// 카탈로그에 적재된 시나리오 수
    #[schema(example = 60)]
    pub scenario_count: usize,
    pub checks: DependencyChecks,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthState {
    Healthy,
    /// LLM은 응답하지만 느림
    Degraded,
    /// LLM에 닿지 않음
    Unhealthy,
}

#[derive(Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DependencyChecks {
    pub llm_api: LlmCheck,
}

/// LLM 제공자 연결 확인 결과
#[derive(Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LlmCheck {
    #[schema(example = true)]
    pub reachable: bool,
    #[schema(example = 150)]
    pub latency_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LlmCheck {
    pub fn reachable(latency_ms: u64) -> Self {
        Self {
            reachable: true,
            latency_ms,
            error: None,
        }
    }

    pub fn unreachable(latency_ms: u64, reason: impl Into<String>) -> Self {
        Self {
            reachable: false,
            latency_ms,
            error: Some(reason.into()),
        }
    }
}
