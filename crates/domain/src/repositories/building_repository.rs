use crate::entities::Building;
use crate::errors::DomainError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BuildingRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<Building>, DomainError>;
    async fn find_all(&self) -> Result<Vec<Building>, DomainError>;
    async fn save(&self, building: &Building) -> Result<Building, DomainError>;
}
