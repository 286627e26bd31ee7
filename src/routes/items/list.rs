use actix_web::{get, web};
use serde::Deserialize;
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::search::filter_by_name;
use crate::types::item::ItemCard;
use crate::types::response::{ApiResponse, ApiResult};

#[derive(Deserialize)]
pub struct ListQuery {
    pub q: Option<String>,
}

/// Public listing feed. Fetches the full snapshot (created_at descending)
/// and applies the name filter in memory; result order follows the
/// snapshot.
#[get("")]
async fn list(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    query: web::Query<ListQuery>,
) -> ApiResult<Vec<ItemCard>> {
    let items = db.list_items().await?;
    let items = filter_by_name(items, query.q.as_deref().unwrap_or(""));

    Ok(ApiResponse::Ok(
        items.into_iter().map(ItemCard::from).collect(),
    ))
}
