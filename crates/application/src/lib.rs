use domain::*;
use infrastructure::*;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Campus Application - wires the registry and housing services to their stores
pub struct CampusApp {
    pub registry_service: RegistryService,
    pub housing_service: HousingService,
    pub user_service: UserService,
    department_repository: Arc<InMemoryDepartmentRepository>,
}

impl CampusApp {
    /// Opens the SQLite database and loads the registry from `registry_data_path`,
    /// falling back to the bundled seed when the file does not exist.
    pub async fn new(database_path: &str, registry_data_path: &Path) -> Result<Self, DomainError> {
        let database = Database::new(database_path)?;
        let departments = load_departments(registry_data_path).await?;
        Ok(Self::assemble(database, departments))
    }

    /// Private in-memory database plus the given departments.
    pub fn in_memory(departments: Vec<Department>) -> Result<Self, DomainError> {
        let database = Database::in_memory()?;
        Ok(Self::assemble(database, departments))
    }

    fn assemble(database: Database, departments: Vec<Department>) -> Self {
        let pool = database.get_pool().clone();

        // Create repository implementations
        let department_repository = Arc::new(InMemoryDepartmentRepository::new(departments));
        let building_repository: Arc<dyn BuildingRepository> =
            Arc::new(SqliteBuildingRepository::new(pool.clone()));
        let housing_unit_repository: Arc<dyn HousingUnitRepository> =
            Arc::new(SqliteHousingUnitRepository::new(pool.clone()));
        let user_repository: Arc<dyn UserRepository> =
            Arc::new(SqliteUserRepository::new(pool));

        info!(
            departments = department_repository.len(),
            "campus application ready"
        );

        // Domain services
        let registry_service = RegistryService::new(department_repository.clone());
        let housing_service = HousingService::new(building_repository, housing_unit_repository);
        let user_service = UserService::new(user_repository);

        Self {
            registry_service,
            housing_service,
            user_service,
            department_repository,
        }
    }

    /// Writes the current registry state back to disk.
    pub async fn persist_registry(&self, path: &Path) -> Result<(), DomainError> {
        save_departments(&self.department_repository, path).await
    }
}
