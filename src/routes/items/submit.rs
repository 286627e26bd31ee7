use actix_multipart::{Field, Multipart};
use actix_web::{post, web};
use chrono::NaiveDate;
use futures_util::StreamExt as _;
use std::sync::Arc;
use tracing::{error, info};

use crate::db::postgres_service::PostgresService;
use crate::storage::ImageStore;
use crate::types::error::AppError;
use crate::types::item::{DBItemCreate, ItemCard, SubmitItem};
use crate::types::response::{ApiResponse, ApiResult};

const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;
const MAX_TEXT_BYTES: usize = 1024;

struct ImagePart {
    bytes: Vec<u8>,
    original_name: String,
}

/// Submission endpoint: multipart with name/location/date_found/contact
/// text parts and an optional "image" file part.
///
/// Order matters: validate, then store the image, then insert the record.
/// A failed image store aborts before any record exists. The reverse
/// failure (stored image, failed insert) leaves the file orphaned with no
/// compensating delete.
#[post("")]
async fn submit(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    store: web::Data<ImageStore>,
    mut payload: Multipart,
) -> ApiResult<ItemCard> {
    let mut form = SubmitItem::default();
    let mut image: Option<ImagePart> = None;

    while let Some(part) = payload.next().await {
        let mut field =
            part.map_err(|e| AppError::BadRequest(format!("invalid multipart body: {e}")))?;
        match field.name() {
            "name" => form.name = read_text(&mut field).await?,
            "location" => form.location = read_text(&mut field).await?,
            "contact" => form.contact = read_text(&mut field).await?,
            "date_found" => {
                let raw = read_text(&mut field).await?;
                let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
                    AppError::Validation("date_found must be YYYY-MM-DD".to_string())
                })?;
                form.date_found = Some(date);
            }
            "image" => {
                let original_name = field
                    .content_disposition()
                    .get_filename()
                    .unwrap_or("")
                    .to_string();
                let bytes = read_bytes(&mut field, MAX_IMAGE_BYTES).await?;
                // an empty file input still posts a zero-byte part
                if !bytes.is_empty() {
                    image = Some(ImagePart {
                        bytes,
                        original_name,
                    });
                }
            }
            other => {
                return Err(AppError::BadRequest(format!("unexpected field: {other}")));
            }
        }
    }

    let date_found = form.validate()?;

    let image_url = match image {
        Some(img) => {
            let stored = store
                .store(&img.bytes, &img.original_name)
                .await
                .map_err(|e| {
                    error!("Image store failed: {}", e);
                    AppError::Storage(e)
                })?;
            Some(stored.public_url)
        }
        None => None,
    };

    let item = db
        .create_item(DBItemCreate {
            name: form.name,
            image_url,
            location: Some(form.location),
            date_found,
            contact: form.contact,
        })
        .await?;

    info!("Item listed: {} ({})", item.name, item.id);
    Ok(ApiResponse::Created(ItemCard::from(item)))
}

async fn read_text(field: &mut Field) -> Result<String, AppError> {
    let bytes = read_bytes(field, MAX_TEXT_BYTES).await?;
    String::from_utf8(bytes)
        .map_err(|_| AppError::BadRequest("field must be valid UTF-8".to_string()))
}

async fn read_bytes(field: &mut Field, limit: usize) -> Result<Vec<u8>, AppError> {
    let mut buf = Vec::new();
    while let Some(chunk) = field.next().await {
        let chunk =
            chunk.map_err(|e| AppError::BadRequest(format!("invalid multipart body: {e}")))?;
        if buf.len() + chunk.len() > limit {
            return Err(AppError::Validation("field too large".to_string()));
        }
        buf.extend_from_slice(&chunk);
    }
    Ok(buf)
}
