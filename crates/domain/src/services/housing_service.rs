use crate::entities::{Building, HousingUnit};
use crate::errors::DomainError;
use crate::repositories::{BuildingRepository, HousingUnitRepository};
use std::sync::Arc;

/// Buildings and the housing units inside them.
pub struct HousingService {
    building_repository: Arc<dyn BuildingRepository>,
    housing_unit_repository: Arc<dyn HousingUnitRepository>,
}

impl HousingService {
    pub fn new(
        building_repository: Arc<dyn BuildingRepository>,
        housing_unit_repository: Arc<dyn HousingUnitRepository>,
    ) -> Self {
        Self {
            building_repository,
            housing_unit_repository,
        }
    }

    pub async fn get_building(&self, building_id: i32) -> Result<Building, DomainError> {
        self.building_repository
            .find_by_id(building_id)
            .await?
            .ok_or(DomainError::BuildingNotFound(building_id))
    }

    /// Units in a building; the building itself must exist.
    pub async fn list_units_for_building(
        &self,
        building_id: i32,
    ) -> Result<Vec<HousingUnit>, DomainError> {
        self.get_building(building_id).await?;
        self.housing_unit_repository
            .find_by_building_id(building_id)
            .await
    }

    pub async fn get_housing_unit(&self, id: i32) -> Result<HousingUnit, DomainError> {
        self.housing_unit_repository
            .find_by_id(id)
            .await?
            .ok_or(DomainError::HousingUnitNotFound(id))
    }

    pub async fn add_building(&self, name: String, address: String) -> Result<Building, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "Building name cannot be empty".to_string(),
            ));
        }
        self.building_repository
            .save(&Building::new(name, address))
            .await
    }

    /// Adds a unit to an existing building.
    pub async fn add_housing_unit(
        &self,
        building_id: i32,
        unit_number: String,
    ) -> Result<HousingUnit, DomainError> {
        self.get_building(building_id).await?;
        self.housing_unit_repository
            .save(&HousingUnit::new(building_id, unit_number))
            .await
    }
}
