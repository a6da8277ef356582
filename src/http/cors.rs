//! CORS layer construction.

use std::time::Duration;

use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};

use crate::config::CorsConfig;

/// Build a CORS layer from config.
///
/// Methods and headers are always fully permitted. With credentials enabled
/// the preflight request is mirrored, since browsers refuse a literal `*`
/// there. Validation already rejects a wildcard origin with credentials.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let wildcard = config.allowed_origins.iter().any(|o| o == "*");

    let origin = if wildcard {
        tracing::warn!("CORS allows any origin");
        AllowOrigin::from(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| HeaderValue::from_str(o).ok())
            .collect();
        AllowOrigin::list(origins)
    };

    let mut layer = CorsLayer::new().allow_origin(origin);

    if config.allow_credentials && !wildcard {
        layer = layer
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(true);
    } else {
        layer = layer.allow_methods(Any).allow_headers(Any);
    }

    if config.max_age_secs > 0 {
        layer = layer.max_age(Duration::from_secs(config.max_age_secs));
    }

    layer
}
