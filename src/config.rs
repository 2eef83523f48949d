use std::env;
use std::time::Duration;

/// Gemini의 OpenAI 호환 엔드포인트
pub const DEFAULT_LLM_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/openai";
pub const DEFAULT_LLM_MODEL: &str = "gemini-2.5-pro";
const DEFAULT_LLM_TIMEOUT_SECS: u64 = 30;

/// CORS 허용 출처
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    /// `*` - 모든 출처 허용
    Any,
    /// 명시된 출처만 허용
    List(Vec<String>),
}

impl CorsOrigins {
    /// 콤마로 구분된 출처 목록을 파싱합니다. `*`가 포함되면 전체 허용입니다.
    pub fn parse(raw: &str) -> Self {
        let origins: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        if origins.is_empty() || origins.iter().any(|o| o == "*") {
            CorsOrigins::Any
        } else {
            CorsOrigins::List(origins)
        }
    }
}

/// LLM 제공자 설정
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub api_base: String,
    pub model: String,
    pub timeout: Duration,
}

/// AI 엔드포인트 rate limit 설정
#[derive(Debug, Clone, Copy)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

/// 애플리케이션 설정
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,
    pub llm: LlmConfig,
    pub cors_origins: CorsOrigins,
    pub rate_limit: RateLimitConfig,
}

impl AppConfig {
    /// 환경 변수에서 설정 로드
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 임의의 키 조회 함수로부터 설정을 구성합니다.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_host = lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let server_port = lookup("SERVER_PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let api_key = lookup("LLM_API_KEY")
            .or_else(|| lookup("GEMINI_API_KEY"))
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let api_base =
            lookup("LLM_API_BASE").unwrap_or_else(|| DEFAULT_LLM_API_BASE.to_string());
        let model = lookup("LLM_MODEL").unwrap_or_else(|| DEFAULT_LLM_MODEL.to_string());

        let timeout_secs = match lookup("LLM_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidNumber("LLM_TIMEOUT_SECS"))?,
            None => DEFAULT_LLM_TIMEOUT_SECS,
        };

        let cors_origins = CorsOrigins::parse(&lookup("CORS_ORIGINS").unwrap_or_else(|| "*".to_string()));

        let per_second = match lookup("RATE_LIMIT_PER_SECOND") {
            Some(raw) => raw
                .parse::<u64>()
                .ok()
                .filter(|v| *v > 0)
                .ok_or(ConfigError::InvalidNumber("RATE_LIMIT_PER_SECOND"))?,
            None => 10,
        };

        let burst_size = match lookup("RATE_LIMIT_BURST") {
            Some(raw) => raw
                .parse::<u32>()
                .ok()
                .filter(|v| *v > 0)
                .ok_or(ConfigError::InvalidNumber("RATE_LIMIT_BURST"))?,
            None => 50,
        };

        Ok(Self {
            server_host,
            server_port,
            llm: LlmConfig {
                api_key,
                api_base,
                model,
                timeout: Duration::from_secs(timeout_secs),
            },
            cors_origins,
            rate_limit: RateLimitConfig {
                per_second,
                burst_size,
            },
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port number")]
    InvalidPort,
    #[error("LLM_API_KEY (or GEMINI_API_KEY) environment variable is required")]
    MissingApiKey,
    #[error("{0} must be a positive integer")]
    InvalidNumber(&'static str),
    #[error("Invalid rate limit configuration")]
    InvalidRateLimit,
    #[error("Invalid CORS origin: {0}")]
    InvalidCorsOrigin(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn should_apply_defaults_when_only_api_key_is_set() {
        let config = AppConfig::from_lookup(lookup_from(&[("LLM_API_KEY", "key")])).unwrap();

        assert_eq!(config.server_host, "0.0.0.0");
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.llm.api_base, DEFAULT_LLM_API_BASE);
        assert_eq!(config.llm.model, DEFAULT_LLM_MODEL);
        assert_eq!(config.llm.timeout, Duration::from_secs(30));
        assert_eq!(config.cors_origins, CorsOrigins::Any);
        assert_eq!(config.rate_limit.per_second, 10);
        assert_eq!(config.rate_limit.burst_size, 50);
    }

    #[test]
    fn should_fall_back_to_gemini_api_key() {
        let config = AppConfig::from_lookup(lookup_from(&[("GEMINI_API_KEY", "gemini")])).unwrap();

        assert_eq!(config.llm.api_key, "gemini");
    }

    #[test]
    fn should_fail_without_api_key() {
        let result = AppConfig::from_lookup(lookup_from(&[]));

        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn should_fail_with_blank_api_key() {
        let result = AppConfig::from_lookup(lookup_from(&[("LLM_API_KEY", "  ")]));

        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn should_fail_with_invalid_port() {
        let result = AppConfig::from_lookup(lookup_from(&[
            ("LLM_API_KEY", "key"),
            ("SERVER_PORT", "not-a-port"),
        ]));

        assert!(matches!(result, Err(ConfigError::InvalidPort)));
    }

    #[test]
    fn should_fail_with_zero_timeout() {
        let result = AppConfig::from_lookup(lookup_from(&[
            ("LLM_API_KEY", "key"),
            ("LLM_TIMEOUT_SECS", "0"),
        ]));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidNumber("LLM_TIMEOUT_SECS"))
        ));
    }

    #[test]
    fn cors_origins_should_parse_comma_separated_list() {
        let origins = CorsOrigins::parse("https://a.example, https://b.example ,");

        assert_eq!(
            origins,
            CorsOrigins::List(vec![
                "https://a.example".to_string(),
                "https://b.example".to_string()
            ])
        );
    }

    #[test]
    fn cors_origins_should_treat_wildcard_as_any() {
        assert_eq!(CorsOrigins::parse("*"), CorsOrigins::Any);
        assert_eq!(CorsOrigins::parse("https://a.example,*"), CorsOrigins::Any);
        assert_eq!(CorsOrigins::parse(""), CorsOrigins::Any);
    }
}
