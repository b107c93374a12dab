//! Reference HTTP host exposing the localization engine as JSON endpoints.
//!
//! Each handler builds its own [`RequestContext`] from the inbound request
//! (Host header, URI and `Accept-Language`), so concurrent requests never
//! share a current locale. A locale segment in the request path wins over
//! the header.

use crate::error::LocalizationError;
use crate::i18n::{Locale, RouteKey};
use crate::localizer::{Localizer, RequestContext};
use axum::extract::{Query, State};
use axum::http::header::{ACCEPT_LANGUAGE, HOST};
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::debug;

#[derive(Clone)]
pub struct AppState {
    pub localizer: Arc<Localizer>,
}

/// Build the router with request tracing.
pub fn router(localizer: Arc<Localizer>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/locales", get(locales))
        .route("/localize", get(localize))
        .route("/route", get(route_url))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { localizer })
}

// ==================== Responses ====================

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct UrlResponse {
    pub url: String,

    /// Locale the URL is rendered for; absent for canonical URLs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LocalesResponse {
    pub current: String,
    pub default: String,
    pub hide_default_locale_in_url: bool,
    pub locales: Vec<Locale>,
}

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.message }));
        (self.status, body).into_response()
    }
}

// ==================== Request Context ====================

/// Context for one request: request URL from Host + URI, current locale
/// from the path's locale segment, else negotiated from `Accept-Language`.
fn request_context(localizer: &Localizer, headers: &HeaderMap, uri: &Uri) -> RequestContext {
    let host = headers.get(HOST).and_then(|v| v.to_str().ok());
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("http");
    let path = uri.path_and_query().map_or("/", |pq| pq.as_str());

    let mut ctx = match host {
        Some(host) => localizer.context_for(&format!("{}://{}{}", scheme, host, path)),
        None => localizer.context(),
    };

    if let Some(locale) = localizer.locale_from_request(&mut ctx) {
        debug!("Locale '{}' taken from request path", locale);
        return ctx;
    }

    if let Some(header) = headers.get(ACCEPT_LANGUAGE).and_then(|v| v.to_str().ok()) {
        let locale = localizer.negotiate(&mut ctx, header);
        debug!("Negotiated locale '{}' from '{}'", locale, header);
    }
    ctx
}

// ==================== Handlers ====================

pub async fn health() -> &'static str {
    "OK"
}

pub async fn locales(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
) -> Json<LocalesResponse> {
    let localizer = &state.localizer;
    let ctx = request_context(localizer, &headers, &uri);

    Json(LocalesResponse {
        current: ctx.state().current().key().to_string(),
        default: ctx.state().default().key().to_string(),
        hide_default_locale_in_url: localizer.hides_default_locale(),
        locales: localizer.registry().iter().cloned().collect(),
    })
}

/// How `/localize` rewrites the URL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Swap the locale prefix only
    #[default]
    Localize,
    /// Also translate recognized route paths
    Translate,
    /// Remove the locale prefix
    Canonical,
}

#[derive(Debug, Default, Deserialize)]
pub struct LocalizeParams {
    pub url: Option<String>,
    pub locale: Option<String>,
    #[serde(default)]
    pub mode: Mode,
}

pub async fn localize(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    Query(params): Query<LocalizeParams>,
) -> Result<Json<UrlResponse>, ApiError> {
    let localizer = &state.localizer;
    let ctx = request_context(localizer, &headers, &uri);
    let locale = params.locale.as_deref();
    let url = params.url.as_deref();

    let target = || Some(locale.unwrap_or_else(|| ctx.state().current().key()).to_string());
    let localized = match params.mode {
        Mode::Localize => localizer.localize_url(&ctx, locale, url).map(|url| (url, target())),
        Mode::Translate => localizer.get_localized_url(&ctx, locale, url).map(|url| (url, target())),
        Mode::Canonical => localizer.non_localized_url(&ctx, url).map(|url| (url, None)),
    };

    localized
        .map(|(url, locale)| Json(UrlResponse { url, locale }))
        .ok_or_else(|| ApiError::new(StatusCode::NOT_FOUND, "No URL available"))
}

/// `GET /route?name=<route key>&locale=<key>&<param>=<value>...`
pub async fn route_url(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    Query(mut params): Query<HashMap<String, String>>,
) -> Result<Json<UrlResponse>, ApiError> {
    let localizer = &state.localizer;
    let ctx = request_context(localizer, &headers, &uri);

    let name = params
        .remove("name")
        .ok_or_else(|| ApiError::new(StatusCode::BAD_REQUEST, "Missing 'name' parameter"))?;
    let locale = params
        .remove("locale")
        .unwrap_or_else(|| ctx.state().current().key().to_string());
    let parameters: Vec<(String, String)> = params.into_iter().collect();

    match localizer.url_from_route_name(&ctx, &locale, &RouteKey::new(name), &parameters) {
        Ok(Some(url)) => Ok(Json(UrlResponse {
            url,
            locale: Some(locale),
        })),
        Ok(None) => Err(ApiError::new(StatusCode::NOT_FOUND, "No URL available")),
        Err(
            e @ (LocalizationError::MissingParameter { .. }
            | LocalizationError::InvalidParameter { .. }),
        ) => {
            Err(ApiError::new(StatusCode::UNPROCESSABLE_ENTITY, e.to_string()))
        }
        Err(e) => Err(ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())),
    }
}
