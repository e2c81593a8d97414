use crate::entities::HousingUnit;
use crate::errors::DomainError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HousingUnitRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<HousingUnit>, DomainError>;
    /// Units of one building, ordered by id.
    async fn find_by_building_id(&self, building_id: i32) -> Result<Vec<HousingUnit>, DomainError>;
    async fn save(&self, unit: &HousingUnit) -> Result<HousingUnit, DomainError>;
}
