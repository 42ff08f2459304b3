use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use chrono::Utc;
use serde_json::{json, Value};
use tracing::{debug, error, info, instrument};

use crate::{
    state::{AppState, StoredLink},
    types::{ShortenRequest, ShortenResponse, UrlDetailResponse},
    utils::{encode_long_url, join_short_link, valid_short_code, validate},
};

#[instrument]
pub async fn health_check() -> (StatusCode, Json<Value>) {
    let response = json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    });
    (StatusCode::OK, Json(response))
}

#[instrument(skip(state, payload))]
pub async fn create_short_url(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> impl IntoResponse {
    let payload = match payload {
        Ok(payload) => payload.0,
        Err(rejection) => {
            let error_message = match rejection {
                JsonRejection::MissingJsonContentType(_) => {
                    json!({"error": "Expected 'Content-Type: application/json' header"})
                }
                JsonRejection::JsonSyntaxError(_) => json!({"error": "JSON syntax error"}),
                JsonRejection::JsonDataError(_) => json!({"error": "JSON data structure mismatch"}),
                _ => json!({"error": "Unknown JSON parsing error"}),
            };
            error!(error = ?rejection, "JSON parsing error");
            return (StatusCode::BAD_REQUEST, Json(error_message)).into_response();
        }
    };

    let original_url = payload.original_url.trim().to_string();
    if let Err(reason) = validate(&original_url) {
        error!(url = %original_url, %reason, "Invalid URL format");
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Invalid URL format"})),
        )
            .into_response();
    }

    let short_code = encode_long_url(&original_url);
    debug!(short_code = %short_code, "Generated short code");

    state
        .links
        .write()
        .await
        .entry(short_code.clone())
        .or_insert_with(|| StoredLink {
            original_url: original_url.clone(),
            created_at: Utc::now(),
        });

    info!(
        short_url = %join_short_link(&state.base_url, &short_code),
        "Created short URL"
    );
    let response = ShortenResponse {
        short_url: short_code,
        original_url: Some(original_url),
    };
    (StatusCode::CREATED, Json(response)).into_response()
}

#[instrument(skip(state))]
pub async fn handle_short_url(
    State(state): State<AppState>,
    Path(short_code): Path<String>,
) -> impl IntoResponse {
    if !valid_short_code(&short_code) {
        error!(short_code = %short_code, "Invalid short code");
        return StatusCode::BAD_REQUEST.into_response();
    }

    match state.links.read().await.get(&short_code) {
        Some(link) => {
            info!(short_code = %short_code, "Redirecting to original URL");
            Redirect::permanent(&link.original_url).into_response()
        }
        None => {
            error!(short_code = %short_code, "Short code not found");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

#[instrument(skip(state))]
pub async fn get_short_url_details(
    State(state): State<AppState>,
    Path(short_code): Path<String>,
) -> Result<Json<UrlDetailResponse>, StatusCode> {
    if !valid_short_code(&short_code) {
        error!(short_code = %short_code, "Invalid short code");
        return Err(StatusCode::BAD_REQUEST);
    }

    let links = state.links.read().await;
    let Some(link) = links.get(&short_code) else {
        error!(short_code = %short_code, "Short code not found");
        return Err(StatusCode::NOT_FOUND);
    };

    Ok(Json(UrlDetailResponse {
        short_url: join_short_link(&state.base_url, &short_code),
        short_code,
        original_url: link.original_url.clone(),
        created_at: link.created_at.to_rfc3339(),
    }))
}
