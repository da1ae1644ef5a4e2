use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::error::WebError;

/// Account name the authenticated request acts on behalf of
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Owner(pub String);

impl Owner {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Bearer keys mapped to the account that owns them
#[derive(Debug, Clone, Default)]
pub struct ApiKeys {
    keys: Arc<HashMap<String, String>>,
}

impl ApiKeys {
    /// Parses `owner:key` pairs separated by commas.
    pub fn from_comma_separated(keys_str: &str) -> Self {
        let keys = keys_str
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter_map(|entry| match entry.split_once(':') {
                Some((owner, key)) if !owner.trim().is_empty() && !key.trim().is_empty() => {
                    Some((key.trim().to_string(), owner.trim().to_string()))
                }
                _ => {
                    tracing::warn!("Ignoring API key entry without an owner");
                    None
                }
            })
            .collect();

        Self {
            keys: Arc::new(keys),
        }
    }

    pub fn owner_of(&self, key: &str) -> Option<Owner> {
        self.keys.get(key).cloned().map(Owner)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

pub async fn require_auth(
    State(api_keys): State<ApiKeys>,
    mut req: Request,
    next: Next,
) -> Result<Response, WebError> {
    let token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim);

    let Some(owner) = token.and_then(|token| api_keys.owner_of(token)) else {
        tracing::warn!("Invalid API key attempt on {}", req.uri().path());
        return Err(WebError::Unauthorized);
    };

    req.extensions_mut().insert(owner);

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Extension, Router,
        body::Body,
        http::{Request as HttpRequest, StatusCode},
        middleware,
        routing::get,
    };
    use tower::ServiceExt;

    #[test]
    fn test_parse_owner_key_pairs() {
        let keys = ApiKeys::from_comma_separated(" ioanna:k1 , giannis:k2,,orphan, :k3");

        assert_eq!(keys.len(), 2);
        assert_eq!(keys.owner_of("k1"), Some(Owner("ioanna".to_string())));
        assert_eq!(keys.owner_of("k2"), Some(Owner("giannis".to_string())));
        assert_eq!(keys.owner_of("k3"), None);
        assert_eq!(keys.owner_of("orphan"), None);
    }

    fn app() -> Router {
        let keys = ApiKeys::from_comma_separated("ioanna:secret");

        Router::new()
            .route(
                "/whoami",
                get(|Extension(owner): Extension<Owner>| async move { owner.0 }),
            )
            .route_layer(middleware::from_fn_with_state(keys, require_auth))
    }

    async fn status_for(authorization: Option<&str>) -> StatusCode {
        let mut builder = HttpRequest::builder().uri("/whoami");
        if let Some(value) = authorization {
            builder = builder.header(AUTHORIZATION, value);
        }

        app()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_valid_key_attaches_owner() {
        let response = app()
            .oneshot(
                HttpRequest::builder()
                    .uri("/whoami")
                    .header(AUTHORIZATION, "Bearer secret")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"ioanna");
    }

    #[tokio::test]
    async fn test_missing_or_wrong_key_is_rejected() {
        assert_eq!(status_for(None).await, StatusCode::UNAUTHORIZED);
        assert_eq!(status_for(Some("Bearer nope")).await, StatusCode::UNAUTHORIZED);
        assert_eq!(status_for(Some("secret")).await, StatusCode::UNAUTHORIZED);
    }
}
