use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};

use crate::config::{ConfigError, CorsOrigins};

/// 설정된 출처 목록으로 CORS 레이어를 만듭니다.
///
/// 와일드카드는 credentials를 허용할 수 없으므로 명시 목록일 때만 credentials를 켭니다.
pub fn create_cors_layer(origins: &CorsOrigins) -> Result<CorsLayer, ConfigError> {
    match origins {
        CorsOrigins::Any => Ok(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)),
        CorsOrigins::List(list) => {
            let values = list
                .iter()
                .map(|origin| {
                    HeaderValue::from_str(origin)
                        .map_err(|_| ConfigError::InvalidCorsOrigin(origin.clone()))
                })
                .collect::<Result<Vec<_>, _>>()?;

            Ok(CorsLayer::new()
                .allow_origin(AllowOrigin::list(values))
                .allow_credentials(true)
                .allow_methods(AllowMethods::mirror_request())
                .allow_headers(AllowHeaders::mirror_request()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_wildcard_layer() {
        assert!(create_cors_layer(&CorsOrigins::Any).is_ok());
    }

    #[test]
    fn should_build_layer_for_origin_list() {
        let origins = CorsOrigins::List(vec!["https://coach.example".to_string()]);

        assert!(create_cors_layer(&origins).is_ok());
    }

    #[test]
    fn should_reject_origin_with_invalid_header_characters() {
        let origins = CorsOrigins::List(vec!["https://bad\norigin".to_string()]);

        assert!(matches!(
            create_cors_layer(&origins),
            Err(ConfigError::InvalidCorsOrigin(_))
        ));
    }
}
