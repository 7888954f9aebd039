use crate::state::AppState;

use axum::{
    body::Body,
    extract::{Request, State},
    http::{Method, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use pharos_core::prelude::*;
use tracing::{debug, warn};

pub struct ApiError(anyhow::Error);

impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.0
            .downcast_ref::<GatewayError>()
            .map(|gateway_err| {
                let status = match gateway_err {
                    GatewayError::ManifestNotFound => StatusCode::NOT_FOUND,
                    GatewayError::ManifestMalformed(_) => StatusCode::INTERNAL_SERVER_ERROR,
                    GatewayError::StaleVersion(_) => StatusCode::GONE,
                    GatewayError::ObjectNotFound(_) => StatusCode::NOT_FOUND,
                    GatewayError::Store(_) => StatusCode::BAD_GATEWAY,
                };
                (status, gateway_err.to_string())
            })
            .unwrap_or((
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Internal Server Error: {}", self.0),
            ))
            .into_response()
    }
}

fn descriptor_from(uri: &Uri, layout: &KeyLayout) -> RequestDescriptor {
    let token = uri.query().and_then(|query| {
        query.split('&').find_map(|pair| {
            let (name, value) = pair.split_once('=')?;
            (name == layout.version_param && !value.is_empty()).then(|| value.to_string())
        })
    });

    RequestDescriptor::new(uri.path(), token)
}

fn redirect_to_version(pathname: &str, param: &str, version: &str) -> Result<Response, ApiError> {
    let location = format!("{pathname}?{param}={version}");
    Ok(Response::builder()
        .status(StatusCode::FOUND)
        .header(header::LOCATION, location)
        .body(Body::empty())?)
}

/// GET|HEAD on any path: resolve versioning, then serve through the
/// cache-aside pipeline.
pub async fn serve<S: ObjectStore, C: EdgeCache>(
    State(state): State<AppState<S, C>>,
    request: Request,
) -> Result<Response, ApiError> {
    let layout = &state.config.layout;
    let descriptor = descriptor_from(request.uri(), layout);

    match Route::resolve(&descriptor, layout) {
        Route::ManifestRedirect => {
            let manifest = resolve_manifest(&state.store, &layout.manifest_key).await?;
            redirect_to_version(&descriptor.pathname, &layout.version_param, &manifest.version)
        }
        Route::ManifestPinned { token } => {
            let manifest = resolve_manifest(&state.store, &layout.manifest_key).await?;
            if token != manifest.version {
                return Err(GatewayError::StaleVersion(token).into());
            }
            // A valid pin serves the root manifest key itself; historical
            // snapshots are never served.
            fetch_through_cache(&state, request.method(), request.uri(), &layout.manifest_key)
                .await
        }
        Route::Object { storage_key } => {
            fetch_through_cache(&state, request.method(), request.uri(), &storage_key).await
        }
    }
}

/// Cache-aside: exact-request lookup first, store on miss, response
/// cloned into the background write queue without delaying the client.
async fn fetch_through_cache<S: ObjectStore, C: EdgeCache>(
    state: &AppState<S, C>,
    method: &Method,
    uri: &Uri,
    storage_key: &str,
) -> Result<Response, ApiError> {
    let cache_key = CacheKey {
        method: method.to_string(),
        url: uri.to_string(),
    };

    match state.cache.lookup(&cache_key).await {
        Ok(Some(cached)) => {
            debug!("Cache hit for {}", cache_key.url);
            return materialize(cached);
        }
        Ok(None) => {}
        // A failing cache degrades to a miss; the store stays
        // authoritative.
        Err(e) => warn!("Cache lookup for {} failed: {e}", cache_key.url),
    }

    let object = state
        .store
        .get(storage_key)
        .await
        .map_err(GatewayError::Store)?
        .ok_or_else(|| GatewayError::ObjectNotFound(storage_key.to_string()))?;

    let content_type = content_type_for(storage_key, &state.config.layout.schema_prefix);

    let mut headers = vec![
        (header::CONTENT_TYPE.to_string(), content_type.to_string()),
        (
            header::CACHE_CONTROL.to_string(),
            state.config.cache_control.clone(),
        ),
    ];
    if let Some(etag) = &object.etag {
        headers.push((header::ETAG.to_string(), etag.clone()));
    }

    let response = CachedResponse {
        status: StatusCode::OK.as_u16(),
        headers,
        body: object.body,
    };

    state.writer.enqueue(cache_key, response.clone());

    materialize(response)
}

fn materialize(cached: CachedResponse) -> Result<Response, ApiError> {
    let mut builder = Response::builder().status(cached.status);
    for (name, value) in &cached.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    Ok(builder.body(Body::from(cached.body))?)
}
