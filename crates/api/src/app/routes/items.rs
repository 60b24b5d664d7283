use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use avalans_core::{CommandHandler, QueryHandler};
use avalans_items::{DeleteItem, GetAllItems, GetItemById, ItemId};

use crate::app::services::ItemServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_item).get(list_items))
        .route("/:id", get(get_item).put(update_item).delete(delete_item))
}

pub async fn create_item(
    Extension(services): Extension<Arc<ItemServices>>,
    Json(body): Json<dto::ItemRequest>,
) -> axum::response::Response {
    match services.create.handle(body.into_create()).await {
        Ok(created) => (
            StatusCode::CREATED,
            [(header::LOCATION, format!("/items/{}", created.item_id))],
            Json(created),
        )
            .into_response(),
        Err(e) => errors::handler_error_to_response(e),
    }
}

pub async fn list_items(Extension(services): Extension<Arc<ItemServices>>) -> axum::response::Response {
    match services.get_all.handle(GetAllItems).await {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(e) => errors::handler_error_to_response(e),
    }
}

pub async fn get_item(
    Extension(services): Extension<Arc<ItemServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ItemId = match errors::parse_id(&id, "item") {
        Ok(v) => v,
        Err(res) => return res,
    };

    match services.get_by_id.handle(GetItemById { id }).await {
        Ok(Some(item)) => (StatusCode::OK, Json(item)).into_response(),
        Ok(None) => errors::json_error(
            StatusCode::NOT_FOUND,
            "not_found",
            format!("Item with ID {id} not found"),
        ),
        Err(e) => errors::handler_error_to_response(e),
    }
}

pub async fn update_item(
    Extension(services): Extension<Arc<ItemServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::ItemRequest>,
) -> axum::response::Response {
    let id: ItemId = match errors::parse_id(&id, "item") {
        Ok(v) => v,
        Err(res) => return res,
    };

    match services.update.handle(body.into_update(id)).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::handler_error_to_response(e),
    }
}

pub async fn delete_item(
    Extension(services): Extension<Arc<ItemServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ItemId = match errors::parse_id(&id, "item") {
        Ok(v) => v,
        Err(res) => return res,
    };

    match services.delete.handle(DeleteItem { id }).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::handler_error_to_response(e),
    }
}
