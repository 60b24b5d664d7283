use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use avalans_core::{CommandHandler, QueryHandler};
use avalans_locations::{
    ActivateLocation, DeactivateLocation, GetAllLocations, GetLocationById, LocationId,
};

use crate::app::services::LocationServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_location).get(list_locations))
        .route("/:id", get(get_location).put(update_location))
        .route("/:id/activate", post(activate_location))
        .route("/:id/deactivate", post(deactivate_location))
}

fn location_id(raw: &str) -> Result<LocationId, axum::response::Response> {
    errors::parse_id(raw, "location")
}

pub async fn create_location(
    Extension(services): Extension<Arc<LocationServices>>,
    Json(body): Json<dto::LocationRequest>,
) -> axum::response::Response {
    match services.create.handle(body.into_create()).await {
        Ok(created) => (
            StatusCode::CREATED,
            [(header::LOCATION, format!("/locations/{}", created.location_id))],
            Json(created),
        )
            .into_response(),
        Err(e) => errors::handler_error_to_response(e),
    }
}

pub async fn list_locations(
    Extension(services): Extension<Arc<LocationServices>>,
    Query(params): Query<dto::ListLocationsParams>,
) -> axum::response::Response {
    let query = GetAllLocations {
        include_inactive: params.include_inactive,
    };
    match services.get_all.handle(query).await {
        Ok(locations) => (StatusCode::OK, Json(locations)).into_response(),
        Err(e) => errors::handler_error_to_response(e),
    }
}

pub async fn get_location(
    Extension(services): Extension<Arc<LocationServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match location_id(&id) {
        Ok(v) => v,
        Err(res) => return res,
    };

    match services.get_by_id.handle(GetLocationById { id }).await {
        Ok(Some(location)) => (StatusCode::OK, Json(location)).into_response(),
        Ok(None) => errors::json_error(
            StatusCode::NOT_FOUND,
            "not_found",
            format!("Location with ID {id} not found"),
        ),
        Err(e) => errors::handler_error_to_response(e),
    }
}

pub async fn update_location(
    Extension(services): Extension<Arc<LocationServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::LocationRequest>,
) -> axum::response::Response {
    let id = match location_id(&id) {
        Ok(v) => v,
        Err(res) => return res,
    };

    match services.update.handle(body.into_update(id)).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::handler_error_to_response(e),
    }
}

pub async fn activate_location(
    Extension(services): Extension<Arc<LocationServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match location_id(&id) {
        Ok(v) => v,
        Err(res) => return res,
    };

    match services.activate.handle(ActivateLocation { id }).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::handler_error_to_response(e),
    }
}

pub async fn deactivate_location(
    Extension(services): Extension<Arc<LocationServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match location_id(&id) {
        Ok(v) => v,
        Err(res) => return res,
    };

    match services.deactivate.handle(DeactivateLocation { id }).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::handler_error_to_response(e),
    }
}
