use actix_web::{delete, get, web};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::item::ItemCard;
use crate::types::response::{ApiResponse, ApiResult};

// The gate middleware on /admin has already run; handlers here only ever
// see admin sessions.

#[derive(Serialize, Deserialize)]
pub struct Response {}

#[get("")]
async fn list(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
) -> ApiResult<Vec<ItemCard>> {
    let items = db.list_items().await?;
    Ok(ApiResponse::Ok(
        items.into_iter().map(ItemCard::from).collect(),
    ))
}

#[delete("/{id}")]
async fn delete(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
) -> ApiResult<Response> {
    let id = path.into_inner();
    db.delete_item(id).await?;
    info!("Item deleted: {}", id);

    Ok(ApiResponse::NoContent)
}
