// db/rentaldb.rs
use async_trait::async_trait;

use super::db::DBClient;
use super::seed;
use super::store::{Collection, StoreError};
use crate::dtos::rentaldtos::CreateItemDto;
use crate::models::rentalmodel::{ItemStatus, RentalItem};
use crate::models::usermodel::User;
use crate::utils::{id, images};

#[async_trait]
pub trait RentalExt {
    async fn get_items(&self) -> Result<Vec<RentalItem>, StoreError>;

    async fn create_item(&self, dto: CreateItemDto, creator: &User)
        -> Result<RentalItem, StoreError>;

    /// available -> rented, exactly once. False when the item is already
    /// rented or missing — an expected outcome, not an error.
    async fn book_item(&self, item_id: &str) -> Result<bool, StoreError>;
}

#[async_trait]
impl RentalExt for DBClient {
    async fn get_items(&self) -> Result<Vec<RentalItem>, StoreError> {
        self.load_collection(Collection::Items, seed::seed_items)
            .await
    }

    async fn create_item(
        &self,
        dto: CreateItemDto,
        creator: &User,
    ) -> Result<RentalItem, StoreError> {
        let _guard = self.transition().await;

        let item = RentalItem {
            id: id::generate(),
            owner: creator.clone(),
            image: images::item_image(&dto.title),
            title: dto.title,
            category: dto.category,
            price: dto.price,
            rate_unit: dto.rate_unit,
            status: ItemStatus::Available,
            mode: dto.mode,
        };

        let mut items = self
            .load_collection(Collection::Items, seed::seed_items)
            .await?;
        items.insert(0, item.clone());
        self.save_collection(Collection::Items, &items).await?;

        Ok(item)
    }

    async fn book_item(&self, item_id: &str) -> Result<bool, StoreError> {
        let _guard = self.transition().await;

        let mut items = self
            .load_collection(Collection::Items, seed::seed_items)
            .await?;

        let item = match items.iter_mut().find(|i| i.id == item_id) {
            Some(item) => item,
            None => return Ok(false),
        };
        if item.status != ItemStatus::Available {
            return Ok(false);
        }

        item.status = ItemStatus::Rented;
        self.save_collection(Collection::Items, &items).await?;

        Ok(true)
    }
}
