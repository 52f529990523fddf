use asset_architecture::model::AggregateRoot;
use serde::Serialize;

/// Organisational unit users and workstations belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Department {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

impl AggregateRoot for Department {}
