use std::time::{Duration, Instant};

use super::dto::{DependencyChecks, HealthState, HealthStatus, LlmCheck};
use crate::domain::ai::CoachService;

const LLM_CHECK_TIMEOUT: Duration = Duration::from_secs(5);
const SLOW_CHECK_THRESHOLD_MS: u64 = 2_000;

/// 서버 상태 보고서를 만듭니다. 결과는 캐시하지 않습니다.
pub async fn check_health(
    coach: &CoachService,
    started_at: Instant,
    scenario_count: usize,
) -> HealthStatus {
    let llm_api = check_llm(coach).await;

    HealthStatus {
        status: overall_state(&llm_api),
        version: env!("CARGO_PKG_VERSION"),
        uptime_secs: started_at.elapsed().as_secs(),
        scenario_count,
        checks: DependencyChecks { llm_api },
    }
}

fn overall_state(llm: &LlmCheck) -> HealthState {
    match (llm.reachable, llm.latency_ms) {
        (false, _) => HealthState::Unhealthy,
        (true, ms) if ms >= SLOW_CHECK_THRESHOLD_MS => HealthState::Degraded,
        (true, _) => HealthState::Healthy,
    }
}

async fn check_llm(coach: &CoachService) -> LlmCheck {
    let started = Instant::now();
    let outcome = tokio::time::timeout(LLM_CHECK_TIMEOUT, coach.check_connectivity()).await;
    let latency_ms = started.elapsed().as_millis() as u64;

    let check = match outcome {
        Ok(Ok(())) => LlmCheck::reachable(latency_ms),
        Ok(Err(e)) => LlmCheck::unreachable(latency_ms, e.to_string()),
        Err(_) => LlmCheck::unreachable(latency_ms, "Timeout"),
    };

    if check.reachable {
        tracing::debug!(latency_ms, "LLM connectivity check passed");
    } else {
        tracing::warn!(latency_ms, error = ?check.error, "LLM connectivity check failed");
    }

    check
}
