use crate::database::{buildings, last_insert_rowid, run_blocking, SqlitePool};
use async_trait::async_trait;
use diesel::prelude::*;
use domain::{Building, BuildingRepository, DomainError};

// Database model
#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = buildings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
struct BuildingModel {
    id: i32,
    name: String,
    address: String,
}

#[derive(Insertable)]
#[diesel(table_name = buildings)]
struct NewBuildingModel {
    name: String,
    address: String,
}

impl From<BuildingModel> for Building {
    fn from(model: BuildingModel) -> Self {
        Building::with_id(model.id, model.name, model.address)
    }
}

impl From<&Building> for NewBuildingModel {
    fn from(building: &Building) -> Self {
        NewBuildingModel {
            name: building.name.clone(),
            address: building.address.clone(),
        }
    }
}

pub struct SqliteBuildingRepository {
    pool: SqlitePool,
}

impl SqliteBuildingRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BuildingRepository for SqliteBuildingRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Building>, DomainError> {
        let result = run_blocking(&self.pool, move |conn| {
            buildings::table
                .filter(buildings::id.eq(id))
                .select(BuildingModel::as_select())
                .first::<BuildingModel>(conn)
                .optional()
        })
        .await?;

        Ok(result.map(Into::into))
    }

    async fn find_all(&self) -> Result<Vec<Building>, DomainError> {
        let result = run_blocking(&self.pool, |conn| {
            buildings::table
                .order(buildings::id.asc())
                .select(BuildingModel::as_select())
                .load::<BuildingModel>(conn)
        })
        .await?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn save(&self, building: &Building) -> Result<Building, DomainError> {
        let new_building = NewBuildingModel::from(building);

        let result = run_blocking(&self.pool, move |conn| {
            conn.transaction::<_, diesel::result::Error, _>(|conn| {
                diesel::insert_into(buildings::table)
                    .values(&new_building)
                    .execute(conn)?;
                let id = last_insert_rowid(conn)?;

                buildings::table
                    .filter(buildings::id.eq(id))
                    .select(BuildingModel::as_select())
                    .first::<BuildingModel>(conn)
            })
        })
        .await?;

        Ok(result.into())
    }
}
