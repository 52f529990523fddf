use domain_helpdesk::model::entity::Department;
use sea_orm::{entity::prelude::*, NotSet, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "departments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user::Entity")]
    User,
    #[sea_orm(has_many = "super::workstation::Entity")]
    Workstation,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::workstation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Workstation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Department {
    fn from(model: Model) -> Self {
        Department {
            id: model.id,
            name: model.name,
            description: model.description,
        }
    }
}

impl From<&Department> for ActiveModel {
    fn from(department: &Department) -> Self {
        ActiveModel {
            id: NotSet,
            name: Set(department.name.to_owned()),
            description: Set(department.description.to_owned()),
        }
    }
}
