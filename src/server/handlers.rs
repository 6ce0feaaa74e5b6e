use super::errors::ApiError;
use super::form::INDEX_HTML;
use super::AppState;
use crate::analysis::{analyze, Summary, TextStatistics};
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::response::{Html, Json};
use serde::Serialize;
use serde_json::{Map, Value};
use url::Url;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct CleanResponse {
    pub success: bool,
    pub cleaned_text: String,
    pub statistics: TextStatistics,
    pub summary: Summary,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub statistics: TextStatistics,
}

pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        message: "Text preprocessing service is running",
    })
}

/// `POST /api/clean`: fetch a `.txt` URL and run the full pipeline
pub async fn clean_handler(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<CleanResponse>, ApiError> {
    let fields = parse_object(&body?)?;
    let url = required_string(&fields, "url", "No URL provided in request")?.trim();
    if url.is_empty() {
        return Err(ApiError::Validation("No URL provided in request".to_string()));
    }
    validate_txt_url(url)?;

    tracing::info!("Cleaning text from {}", url);
    let document = state.preprocessor.process_url(url).await?;

    Ok(Json(CleanResponse {
        success: true,
        cleaned_text: document.cleaned_text,
        statistics: document.statistics,
        summary: document.summary,
    }))
}

/// `POST /api/analyze`: statistics for the submitted text, taken as-is
pub async fn analyze_handler(
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let fields = parse_object(&body?)?;
    let text = required_string(&fields, "text", "No text provided in request")?;

    tracing::info!("Analyzing {} bytes of submitted text", text.len());
    let statistics = analyze(text);

    Ok(Json(AnalyzeResponse {
        success: true,
        statistics,
    }))
}

pub async fn not_found_handler() -> ApiError {
    ApiError::NotFound
}

pub async fn method_not_allowed_handler() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Parses the request body as a JSON object
fn parse_object(body: &[u8]) -> Result<Map<String, Value>, ApiError> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(fields)) => Ok(fields),
        _ => Err(ApiError::Validation("No JSON data provided".to_string())),
    }
}

/// Returns a non-empty string field, or a validation error with `missing_message`
fn required_string<'a>(
    fields: &'a Map<String, Value>,
    name: &str,
    missing_message: &str,
) -> Result<&'a str, ApiError> {
    match fields.get(name) {
        None | Some(Value::Null) => Err(ApiError::Validation(missing_message.to_string())),
        Some(Value::String(s)) if s.is_empty() => {
            Err(ApiError::Validation(missing_message.to_string()))
        }
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(_) => Err(ApiError::Validation(format!("Field '{}' must be a string", name))),
    }
}

/// Accepts only http(s) URLs whose path ends in `.txt`
fn validate_txt_url(raw: &str) -> Result<(), ApiError> {
    let url = Url::parse(raw)
        .map_err(|e| ApiError::Validation(format!("Invalid URL: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ApiError::Validation(
            "URL must use http or https".to_string(),
        ));
    }

    if !url.path().to_ascii_lowercase().ends_with(".txt") {
        return Err(ApiError::Validation(
            "URL must point to a .txt file".to_string(),
        ));
    }

    Ok(())
}
