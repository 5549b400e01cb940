use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{debug, error, instrument};

use super::dto::{CreatePlantRequest, ErrorResponse, PlantQuery, PlantResponse};
use super::repo_types::PlantFilter;
use super::services;
use crate::state::AppState;

type ApiError = (StatusCode, Json<ErrorResponse>);

pub fn plant_routes() -> Router<AppState> {
    Router::new()
        .route("/plants", get(list_plants).post(create_plant))
        // path used by the first version of the browser client
        .route("/plantas", get(list_plants).post(create_plant))
}

#[instrument(skip(state))]
pub async fn list_plants(
    State(state): State<AppState>,
    query: Result<Query<PlantQuery>, QueryRejection>,
) -> Result<Json<Vec<PlantResponse>>, ApiError> {
    let Query(query) = query.map_err(|e| {
        error!(error = %e, "list plants query rejected");
        envelope(StatusCode::BAD_REQUEST, "Invalid plant filters", e)
    })?;
    let filter = PlantFilter::from(query);
    match services::list_plants(state.plants.as_ref(), &filter).await {
        Ok(plants) => Ok(Json(plants.into_iter().map(PlantResponse::from).collect())),
        Err(e) => {
            error!(error = %e, "list plants failed");
            Err(envelope(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch plants", e))
        }
    }
}

#[instrument(skip(state, payload))]
pub async fn create_plant(
    State(state): State<AppState>,
    payload: Result<Json<CreatePlantRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<PlantResponse>), ApiError> {
    let Json(body) = payload.map_err(|e| {
        error!(error = %e, "create plant body rejected");
        bad_request(e)
    })?;
    debug!(?body, "create plant request");

    match services::create_plant(state.plants.as_ref(), body).await {
        Ok(plant) => Ok((StatusCode::CREATED, Json(plant.into()))),
        Err(e) => {
            error!(error = %e, "create plant failed");
            Err(bad_request(e))
        }
    }
}

fn envelope<E: std::fmt::Display>(status: StatusCode, message: &str, e: E) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            message: message.into(),
            error: e.to_string(),
        }),
    )
}

fn bad_request<E: std::fmt::Display>(e: E) -> ApiError {
    envelope(StatusCode::BAD_REQUEST, "Failed to create plant", e)
}
