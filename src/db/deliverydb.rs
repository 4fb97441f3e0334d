// db/deliverydb.rs
use async_trait::async_trait;

use super::db::DBClient;
use super::seed;
use super::store::{Collection, StoreError};
use crate::dtos::deliverydtos::CreateTaskDto;
use crate::models::deliverymodel::{DeliveryTask, TaskStatus};
use crate::models::usermodel::User;
use crate::utils::id;

#[async_trait]
pub trait DeliveryExt {
    async fn get_tasks(&self) -> Result<Vec<DeliveryTask>, StoreError>;

    async fn create_task(
        &self,
        dto: CreateTaskDto,
        creator: &User,
    ) -> Result<DeliveryTask, StoreError>;

    /// open -> assigned, exactly once. False once assigned or completed,
    /// or when the id is unknown.
    async fn accept_task(&self, task_id: &str) -> Result<bool, StoreError>;
}

#[async_trait]
impl DeliveryExt for DBClient {
    async fn get_tasks(&self) -> Result<Vec<DeliveryTask>, StoreError> {
        self.load_collection(Collection::Tasks, seed::seed_tasks)
            .await
    }

    async fn create_task(
        &self,
        dto: CreateTaskDto,
        creator: &User,
    ) -> Result<DeliveryTask, StoreError> {
        let _guard = self.transition().await;

        let task = DeliveryTask {
            id: id::generate(),
            requester: creator.clone(),
            title: dto.title,
            description: dto.description,
            pickup: dto.pickup,
            dropoff: dto.dropoff,
            offer_amount: dto.offer_amount,
            status: TaskStatus::Open,
            deadline: dto.deadline,
            mode: dto.mode,
        };

        let mut tasks = self
            .load_collection(Collection::Tasks, seed::seed_tasks)
            .await?;
        tasks.insert(0, task.clone());
        self.save_collection(Collection::Tasks, &tasks).await?;

        Ok(task)
    }

    async fn accept_task(&self, task_id: &str) -> Result<bool, StoreError> {
        let _guard = self.transition().await;

        let mut tasks = self
            .load_collection(Collection::Tasks, seed::seed_tasks)
            .await?;

        let task = match tasks.iter_mut().find(|t| t.id == task_id) {
            Some(task) => task,
            None => return Ok(false),
        };
        if task.status != TaskStatus::Open {
            return Ok(false);
        }

        task.status = TaskStatus::Assigned;
        self.save_collection(Collection::Tasks, &tasks).await?;

        Ok(true)
    }
}
