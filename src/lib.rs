pub mod config;
pub mod domain;
pub mod error;
pub mod global;
pub mod logging;
pub mod rate_limiter;
pub mod response;
pub mod shutdown;

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use config::{AppConfig, ConfigError};
use domain::ai::{self, CoachService, OpenAiGateway};
use domain::health;
use domain::scenario::{self, ScenarioCatalog};
use global::{cors::create_cors_layer, middleware::request_tracing, prometheus::metrics_handler};
use rate_limiter::{create_ai_rate_limiter, AiRateLimitLayer};

pub use domain::ai::{ChatRequest, LlmGateway};

/// LLM 타임아웃 외에 라우터 전체에 주는 여유 시간
const REQUEST_TIMEOUT_MARGIN: Duration = Duration::from_secs(10);

#[derive(OpenApi)]
#[openapi(
    paths(
        health::handler::api_root,
        health::handler::health_check,
        scenario::handler::list_scenarios,
        scenario::handler::list_categories,
        scenario::handler::practice_scenarios,
        ai::handler::handle_objection,
        ai::handler::practice_feedback,
    ),
    components(
        schemas(
            scenario::Scenario,
            scenario::CategoriesResponse,
            ai::ObjectionRequest,
            ai::PracticeResponse,
            ai::ResponseType,
            ai::AiResponse,
            ai::PracticeFeedback,
            health::dto::HealthStatus,
            response::ErrorResponse,
            response::MessageResponse,
        )
    ),
    tags(
        (name = "Scenario", description = "연습 시나리오 API"),
        (name = "Coach", description = "LLM 코칭 API"),
        (name = "Health", description = "헬스체크 API")
    )
)]
pub struct ApiDoc;

/// 핸들러 간 공유 상태 (모두 불변)
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<ScenarioCatalog>,
    pub coach: Arc<CoachService>,
    pub started_at: Instant,
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(client: ai::LlmClient, catalog: Arc<ScenarioCatalog>) -> Self {
        Self {
            coach: Arc::new(CoachService::new(client, Arc::clone(&catalog))),
            catalog,
            started_at: Instant::now(),
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, handle: Option<PrometheusHandle>) -> Self {
        self.metrics = handle;
        self
    }
}

/// 라우터 구성
///
/// `rate_limiter`가 있으면 LLM을 호출하는 두 엔드포인트에만 적용합니다.
pub fn create_router(
    state: AppState,
    cors: CorsLayer,
    rate_limiter: Option<AiRateLimitLayer>,
) -> Router {
    let coach_routes = Router::new()
        .route("/api/objection/handle", post(ai::handler::handle_objection))
        .route("/api/practice/feedback", post(ai::handler::practice_feedback));

    let coach_routes = match rate_limiter {
        Some(layer) => coach_routes.layer(layer),
        None => coach_routes,
    };

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(health::health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api", get(health::api_root))
        .route("/api/", get(health::api_root))
        .route("/api/scenarios", get(scenario::handler::list_scenarios))
        .route(
            "/api/scenarios/categories",
            get(scenario::handler::list_categories),
        )
        .route(
            "/api/scenarios/practice",
            get(scenario::handler::practice_scenarios),
        )
        .merge(coach_routes)
        .layer(axum::middleware::from_fn(request_tracing))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// 설정으로부터 운영용 앱 생성
pub fn create_app(config: &AppConfig, metrics: Option<PrometheusHandle>) -> Result<Router, ConfigError> {
    let catalog = Arc::new(ScenarioCatalog::builtin());
    let client: ai::LlmClient = Arc::new(OpenAiGateway::new(&config.llm));
    let state = AppState::new(client, catalog).with_metrics(metrics);

    let cors = create_cors_layer(&config.cors_origins)?;
    let rate_limiter = create_ai_rate_limiter(config.rate_limit)?;

    Ok(create_router(state, cors, Some(rate_limiter))
        .layer(TimeoutLayer::new(config.llm.timeout + REQUEST_TIMEOUT_MARGIN)))
}

/// 테스트용 라우터 생성 (LLM 게이트웨이 주입, rate limit 없음)
pub fn create_test_router_with_mock<G>(gateway: G) -> Router
where
    G: LlmGateway + 'static,
{
    let state = AppState::new(Arc::new(gateway), Arc::new(ScenarioCatalog::builtin()));
    create_router(state, CorsLayer::permissive(), None)
}
