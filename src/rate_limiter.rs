//! Rate Limiting 모듈
//!
//! LLM을 호출하는 엔드포인트에 IP 기반 요청 제한을 걸어 제공자 비용과 quota를 보호합니다.

use axum::{
    http::{header::RETRY_AFTER, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorError,
    GovernorLayer,
};

use crate::config::{ConfigError, RateLimitConfig};
use crate::response::ErrorResponse;

pub type AiRateLimitLayer =
    GovernorLayer<SmartIpKeyExtractor, governor::middleware::NoOpMiddleware>;

/// AI 엔드포인트용 Rate Limiter 레이어 생성
///
/// 클라이언트 IP는 `X-Forwarded-For` 등 프록시 헤더를 우선 사용하고,
/// 없으면 소켓 주소(`ConnectInfo`)를 사용합니다.
pub fn create_ai_rate_limiter(config: RateLimitConfig) -> Result<AiRateLimitLayer, ConfigError> {
    let governor_config = GovernorConfigBuilder::default()
        .per_second(config.per_second)
        .burst_size(config.burst_size)
        .key_extractor(SmartIpKeyExtractor)
        .error_handler(|err| RateLimitResponse::from(err).into_response())
        .finish()
        .ok_or(ConfigError::InvalidRateLimit)?;

    Ok(GovernorLayer {
        config: Arc::new(governor_config),
    })
}

/// Rate Limit 초과 시 응답
#[derive(Debug)]
struct RateLimitResponse {
    status: StatusCode,
    retry_after: Option<u64>,
}

impl From<GovernorError> for RateLimitResponse {
    fn from(err: GovernorError) -> Self {
        match err {
            GovernorError::TooManyRequests { wait_time, .. } => Self {
                status: StatusCode::TOO_MANY_REQUESTS,
                retry_after: Some(wait_time),
            },
            _ => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                retry_after: None,
            },
        }
    }
}

impl IntoResponse for RateLimitResponse {
    fn into_response(self) -> Response {
        let body = if self.status == StatusCode::TOO_MANY_REQUESTS {
            tracing::warn!(retry_after_secs = ?self.retry_after, "Rate limit exceeded");
            ErrorResponse::new("COMMON429", "Too many requests. Please try again shortly.")
        } else {
            tracing::error!(status = %self.status, "Rate limiter could not identify client");
            ErrorResponse::new("COMMON500", "Unable to identify client")
        };

        let mut response = (self.status, Json(body)).into_response();

        if let Some(retry_after) = self.retry_after {
            if let Ok(value) = HeaderValue::from_str(&retry_after.to_string()) {
                response.headers_mut().insert(RETRY_AFTER, value);
            }
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limiter_should_be_created_from_config() {
        let layer = create_ai_rate_limiter(RateLimitConfig {
            per_second: 10,
            burst_size: 50,
        });

        assert!(layer.is_ok());
    }

    #[test]
    fn too_many_requests_should_map_to_429_with_retry_after() {
        let response = RateLimitResponse::from(GovernorError::TooManyRequests {
            wait_time: 30,
            headers: None,
        })
        .into_response();

        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(
            response.headers().get(RETRY_AFTER).unwrap().to_str().unwrap(),
            "30"
        );
    }

    #[test]
    fn unable_to_extract_key_should_map_to_500_without_retry_after() {
        let response = RateLimitResponse::from(GovernorError::UnableToExtractKey).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.headers().get(RETRY_AFTER).is_none());
    }
}
