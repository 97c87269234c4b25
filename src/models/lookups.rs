//! Static lookup records used by the profile editor.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct City {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hobby {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct School {
    pub id: u64,
    pub name: String,
}
