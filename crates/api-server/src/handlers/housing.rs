//! Housing lookup endpoints. Bodies are JSON.

use crate::error::HousingError;
use crate::AppState;
use axum::{
    extract::{OriginalUri, Path, State},
    response::Json,
};
use domain::{format_offset_datetime, DomainError, HousingUnit};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HousingUnitSummary {
    id: Option<i32>,
    unit_number: String,
}

impl From<HousingUnit> for HousingUnitSummary {
    fn from(unit: HousingUnit) -> Self {
        Self {
            id: unit.id,
            unit_number: unit.unit_number,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HousingUnitDetail {
    id: Option<i32>,
    building_id: i32,
    unit_number: String,
    created_datetime: String,
    modified_datetime: String,
}

impl From<HousingUnit> for HousingUnitDetail {
    fn from(unit: HousingUnit) -> Self {
        Self {
            id: unit.id,
            building_id: unit.building_id,
            created_datetime: format_offset_datetime(&unit.created_datetime),
            modified_datetime: format_offset_datetime(&unit.modified_datetime),
            unit_number: unit.unit_number,
        }
    }
}

fn housing_error(uri: &OriginalUri) -> impl FnOnce(DomainError) -> HousingError + '_ {
    move |err| HousingError::new(err, uri.0.path())
}

pub async fn list_building_units(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    uri: OriginalUri,
) -> Result<Json<Vec<HousingUnitSummary>>, HousingError> {
    let units = state
        .app
        .housing_service
        .list_units_for_building(id)
        .await
        .map_err(housing_error(&uri))?;
    Ok(Json(units.into_iter().map(Into::into).collect()))
}

pub async fn get_housing_unit(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    uri: OriginalUri,
) -> Result<Json<HousingUnitDetail>, HousingError> {
    let unit = state
        .app
        .housing_service
        .get_housing_unit(id)
        .await
        .map_err(housing_error(&uri))?;
    Ok(Json(unit.into()))
}
