//! Number classification endpoint

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::api::types::ApiError;
use crate::domain::facts::FactProvider;
use crate::domain::number::{Classification, NumberValue};

#[derive(Clone)]
pub struct ClassifyApiState {
    pub facts: Arc<dyn FactProvider>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ClassifyQuery {
    /// The number to classify
    pub number: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ClassifyResponse {
    /// Echo of the parsed input: an int stays an int, a float stays a float
    #[schema(value_type = f64)]
    pub number: NumberValue,
    pub is_prime: bool,
    pub is_perfect: bool,
    #[schema(value_type = Vec<String>)]
    pub properties: Vec<&'static str>,
    pub digit_sum: u32,
    pub fun_fact: String,
}

pub fn routes(facts: Arc<dyn FactProvider>) -> Router<()> {
    let state = ClassifyApiState { facts };
    Router::new()
        .route("/api/classify-number", get(classify_number))
        .with_state(state)
}

/// Classify a number by its mathematical properties
#[utoipa::path(
    get,
    path = "/api/classify-number",
    tag = "classify",
    params(ClassifyQuery),
    responses(
        (status = 200, description = "Classification result", body = ClassifyResponse),
        (status = 400, description = "Missing or malformed number parameter", body = crate::api::types::ErrorBody)
    )
)]
pub async fn classify_number(
    State(state): State<ClassifyApiState>,
    Query(query): Query<ClassifyQuery>,
) -> Result<Json<ClassifyResponse>, ApiError> {
    let raw = match query.number.as_deref() {
        Some(s) if !s.is_empty() => s,
        _ => return Err(ApiError::MissingNumber),
    };

    let value = NumberValue::parse(raw).ok_or(ApiError::InvalidNumber)?;
    let classification = Classification::of(value);

    // Best-effort: provider failures are absorbed into fallback text inside
    // the provider, never into an API error
    let fun_fact = state.facts.fun_fact(&value).await;

    Ok(Json(ClassifyResponse {
        number: classification.value,
        is_prime: classification.is_prime,
        is_perfect: classification.is_perfect,
        properties: classification.properties,
        digit_sum: classification.digit_sum,
        fun_fact,
    }))
}
