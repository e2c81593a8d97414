use crate::database::{housing_units, last_insert_rowid, run_blocking, SqlitePool};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use domain::{DomainError, HousingUnit, HousingUnitRepository};

// Database model - timestamps are stored as naive UTC
#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = housing_units)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
struct HousingUnitModel {
    id: i32,
    building_id: i32,
    unit_number: String,
    created_datetime: NaiveDateTime,
    modified_datetime: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = housing_units)]
struct NewHousingUnitModel {
    building_id: i32,
    unit_number: String,
    created_datetime: NaiveDateTime,
    modified_datetime: NaiveDateTime,
}

impl From<HousingUnitModel> for HousingUnit {
    fn from(model: HousingUnitModel) -> Self {
        HousingUnit::with_id(
            model.id,
            model.building_id,
            model.unit_number,
            model.created_datetime.and_utc(),
            model.modified_datetime.and_utc(),
        )
    }
}

impl From<&HousingUnit> for NewHousingUnitModel {
    fn from(unit: &HousingUnit) -> Self {
        NewHousingUnitModel {
            building_id: unit.building_id,
            unit_number: unit.unit_number.clone(),
            created_datetime: unit.created_datetime.naive_utc(),
            modified_datetime: unit.modified_datetime.naive_utc(),
        }
    }
}

pub struct SqliteHousingUnitRepository {
    pool: SqlitePool,
}

impl SqliteHousingUnitRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HousingUnitRepository for SqliteHousingUnitRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<HousingUnit>, DomainError> {
        let result = run_blocking(&self.pool, move |conn| {
            housing_units::table
                .filter(housing_units::id.eq(id))
                .select(HousingUnitModel::as_select())
                .first::<HousingUnitModel>(conn)
                .optional()
        })
        .await?;

        Ok(result.map(Into::into))
    }

    async fn find_by_building_id(&self, building_id: i32) -> Result<Vec<HousingUnit>, DomainError> {
        let result = run_blocking(&self.pool, move |conn| {
            housing_units::table
                .filter(housing_units::building_id.eq(building_id))
                .order(housing_units::id.asc())
                .select(HousingUnitModel::as_select())
                .load::<HousingUnitModel>(conn)
        })
        .await?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn save(&self, unit: &HousingUnit) -> Result<HousingUnit, DomainError> {
        let new_unit = NewHousingUnitModel::from(unit);

        let result = run_blocking(&self.pool, move |conn| {
            conn.transaction::<_, diesel::result::Error, _>(|conn| {
                diesel::insert_into(housing_units::table)
                    .values(&new_unit)
                    .execute(conn)?;
                let id = last_insert_rowid(conn)?;

                housing_units::table
                    .filter(housing_units::id.eq(id))
                    .select(HousingUnitModel::as_select())
                    .first::<HousingUnitModel>(conn)
            })
        })
        .await?;

        Ok(result.into())
    }
}
