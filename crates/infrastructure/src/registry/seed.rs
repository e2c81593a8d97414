//! Loading and saving the course registry as JSON.
//!
//! The data file is a JSON array of departments. When the configured file is
//! missing the registry starts from the bundled seed.

use crate::registry::InMemoryDepartmentRepository;
use domain::{Department, DomainError};
use std::path::Path;
use tracing::{info, warn};

const BUNDLED_SEED: &str = include_str!("../../data/departments.json");

pub fn bundled_departments() -> Result<Vec<Department>, DomainError> {
    parse_departments(BUNDLED_SEED)
}

pub fn parse_departments(json: &str) -> Result<Vec<Department>, DomainError> {
    serde_json::from_str(json).map_err(|e| DomainError::SeedError(e.to_string()))
}

pub async fn load_departments(path: &Path) -> Result<Vec<Department>, DomainError> {
    match tokio::fs::read_to_string(path).await {
        Ok(json) => {
            let departments = parse_departments(&json)?;
            info!(path = %path.display(), count = departments.len(), "loaded registry data");
            Ok(departments)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "registry data file missing, using bundled seed");
            bundled_departments()
        }
        Err(e) => Err(DomainError::SeedError(format!(
            "failed to read {}: {}",
            path.display(),
            e
        ))),
    }
}

pub async fn save_departments(
    repository: &InMemoryDepartmentRepository,
    path: &Path,
) -> Result<(), DomainError> {
    let departments = repository.snapshot().await;
    let json = serde_json::to_string_pretty(&departments)
        .map_err(|e| DomainError::SeedError(e.to_string()))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| DomainError::SeedError(e.to_string()))?;
    }
    tokio::fs::write(path, json)
        .await
        .map_err(|e| DomainError::SeedError(e.to_string()))?;

    info!(path = %path.display(), count = departments.len(), "saved registry data");
    Ok(())
}
