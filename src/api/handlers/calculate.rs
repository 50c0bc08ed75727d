use crate::api::responses::CalculateRequest;
use crate::api::ApiError;
use crate::sizing::SearchResult;
use crate::AppState;
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn calculate(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CalculateRequest>, JsonRejection>,
) -> Result<Json<SearchResult>, ApiError> {
    let Json(req) = body?;
    let params = req.into_params(state.config.default_params())?;

    info!(
        "Received calculation request: cabinet={} RU / {} kW, RU %={}, Power %={}",
        params.cabinet_ru, params.cabinet_power_kw, params.ru_percent, params.power_percent
    );

    // The search is CPU-bound; keep it off the async workers.
    let engine = state.engine.clone();
    let result = tokio::task::spawn_blocking(move || engine.search(&params)).await??;

    Ok(Json(result))
}
