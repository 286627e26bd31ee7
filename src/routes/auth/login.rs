use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::RLogin;
use crate::utils::token::construct_token;

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub token: String,
}

#[post("")]
async fn login(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RLogin>,
) -> ApiResult<Response> {
    let (user_id, secret) = db.open_session(&body.email, &body.password).await?;
    info!("Session opened for {}", user_id);

    Ok(ApiResponse::Ok(Response {
        token: construct_token(&user_id.to_string(), &secret),
    }))
}
