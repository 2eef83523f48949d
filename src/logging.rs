//! 로깅 초기화 모듈
//!
//! JSON 형식의 구조화된 로깅을 stdout으로 출력합니다.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "info,sales_coach_server=debug,tower_http=debug";

/// 로깅 시스템을 초기화합니다.
///
/// 환경 변수 `RUST_LOG`로 로그 레벨을 설정할 수 있으며,
/// 이미 초기화된 경우에는 조용히 무시합니다.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let stdout_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .flatten_event(false);

    if let Err(err) = tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .try_init()
    {
        eprintln!("Failed to initialize tracing: {}", err);
    }
}
