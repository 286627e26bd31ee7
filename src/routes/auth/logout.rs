use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::token::extract_token_parts;

#[derive(Serialize, Deserialize)]
pub struct Response {}

#[post("")]
async fn logout(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
) -> ApiResult<Response> {
    let Some((user_id, secret)) = extract_token_parts(auth.token()) else {
        return Err(AppError::Unauthorized);
    };
    if db.session_user(&user_id, &secret).await?.is_none() {
        return Err(AppError::Unauthorized);
    }

    db.close_session(&user_id).await?;
    info!("Session closed for {}", user_id);

    Ok(ApiResponse::EmptyOk)
}
