use asset_architecture::repository::DBRepository;

use crate::model::entity::Department;

pub trait DepartmentRepo: DBRepository<Department> + Send + Sync {}
