use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Building {
    pub id: Option<i32>, // None until persisted
    pub name: String,
    pub address: String,
}

impl Building {
    pub fn new(name: String, address: String) -> Self {
        Self {
            id: None,
            name,
            address,
        }
    }

    pub fn with_id(id: i32, name: String, address: String) -> Self {
        Self {
            id: Some(id),
            name,
            address,
        }
    }
}
