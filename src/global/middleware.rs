//! 요청 추적 미들웨어
//!
//! 요청마다 request ID를 붙이고, 완료 로그와 HTTP 메트릭을 남깁니다.

use std::time::{Duration, Instant};

use axum::{
    extract::Request,
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use tracing::Instrument;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// 메트릭 라벨에 남기는 경로 구간 수
const METRIC_PATH_DEPTH: usize = 3;

/// 들어온 `x-request-id`를 재사용하거나 새로 발급해 span과 응답 헤더에 싣습니다.
pub async fn request_tracing(request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .filter(|v| !v.is_empty())
        .cloned()
        .unwrap_or_else(generate_request_id);

    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let span = tracing::info_span!(
        "http_request",
        request_id = request_id.to_str().unwrap_or("invalid"),
        %method,
        %path,
    );

    async move {
        let started = Instant::now();
        let mut response = next.run(request).await;
        let elapsed = started.elapsed();
        let status = response.status();

        tracing::info!(
            status = status.as_u16(),
            duration_ms = elapsed.as_millis() as u64,
            "Request completed"
        );
        record_http_metrics(method.as_str(), &path, status.as_u16(), elapsed);

        response.headers_mut().insert(REQUEST_ID_HEADER, request_id);
        response
    }
    .instrument(span)
    .await
}

fn generate_request_id() -> HeaderValue {
    // UUID 문자열은 항상 유효한 헤더 값
    HeaderValue::from_str(&Uuid::new_v4().to_string())
        .unwrap_or_else(|_| HeaderValue::from_static("unknown"))
}

fn record_http_metrics(method: &str, path: &str, status: u16, elapsed: Duration) {
    let labels = [
        ("method", method.to_owned()),
        ("path", metric_path(path)),
        ("status", status.to_string()),
    ];

    metrics::counter!("http_requests_total", &labels).increment(1);
    metrics::histogram!("http_request_duration_seconds", &labels).record(elapsed.as_secs_f64());
}

/// 라벨 카디널리티를 막기 위해 앞쪽 몇 구간만 남깁니다.
fn metric_path(path: &str) -> String {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if segments.len() <= METRIC_PATH_DEPTH {
        return path.to_owned();
    }
    format!("/{}", segments[..METRIC_PATH_DEPTH].join("/"))
}
