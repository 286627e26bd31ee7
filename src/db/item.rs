use crate::db::postgres_service::PostgresService;
use crate::types::{error::AppError, item::DBItemCreate};
use chrono::Utc;
use entity::item::{ActiveModel as ItemActive, Column, Entity as Item, Model as ItemModel};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

impl PostgresService {
    /// Full snapshot, newest first. No pagination; the search filter runs
    /// over this in memory. Id is a stable tie-break so equal timestamps
    /// cannot flip between reads.
    pub async fn list_items(&self) -> Result<Vec<ItemModel>, AppError> {
        Ok(Item::find()
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await?)
    }

    /// Id and created_at are store-assigned here, never taken from the
    /// submitter.
    pub async fn create_item(&self, payload: DBItemCreate) -> Result<ItemModel, AppError> {
        let item = ItemActive {
            id: Set(Uuid::new_v4()),
            name: Set(payload.name),
            image_url: Set(payload.image_url),
            location: Set(payload.location),
            date_found: Set(payload.date_found),
            contact: Set(payload.contact),
            created_at: Set(Utc::now()),
        };
        Ok(item.insert(&self.db).await?)
    }

    pub async fn delete_item(&self, id: Uuid) -> Result<(), AppError> {
        let res = Item::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}
