use std::net::SocketAddr;

use sales_coach_server::{
    config::AppConfig, create_app, global::prometheus::install_recorder, logging::init_logging,
    shutdown::shutdown_signal,
};

#[tokio::main]
async fn main() {
    // 1. 환경변수 로드
    dotenvy::dotenv().ok();

    // 2. 로깅 초기화
    init_logging();

    // 3. 설정 로드
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    // 4. 메트릭 및 라우터 설정
    let metrics = install_recorder();
    let app = match create_app(&config, metrics) {
        Ok(app) => app,
        Err(err) => {
            tracing::error!(error = %err, "Failed to build application");
            std::process::exit(1);
        }
    };

    // 5. 서버 실행
    let addr = format!("{}:{}", config.server_host, config.server_port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(error = %err, addr = %addr, "Failed to bind address");
            std::process::exit(1);
        }
    };

    tracing::info!(
        addr = %addr,
        model = %config.llm.model,
        "Sales coach server listening"
    );

    if let Err(err) = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    {
        tracing::error!(error = %err, "Server error");
        std::process::exit(1);
    }

    tracing::info!("Server shut down gracefully");
}
