use domain_helpdesk::model::entity::Workstation;
use sea_orm::{entity::prelude::*, NotSet, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "workstations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub inventory_number: String,
    pub os_name: Option<String>,
    pub ip_address: Option<String>,
    pub mac_address: Option<String>,
    pub department_id: Option<i32>,
    pub responsible_id: Option<i32>,
    pub status: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::department::Entity",
        from = "Column::DepartmentId",
        to = "super::department::Column::Id"
    )]
    Department,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::ResponsibleId",
        to = "super::user::Column::Id"
    )]
    Responsible,
    #[sea_orm(has_many = "super::software::Entity")]
    Software,
}

impl Related<super::department::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl Related<super::software::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Software.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Workstation {
    fn from(model: Model) -> Self {
        Workstation {
            id: model.id,
            inventory_number: model.inventory_number,
            os_name: model.os_name,
            ip_address: model.ip_address,
            mac_address: model.mac_address,
            department_id: model.department_id,
            responsible_id: model.responsible_id,
            status: model.status,
            notes: model.notes,
        }
    }
}

impl From<&Workstation> for ActiveModel {
    fn from(workstation: &Workstation) -> Self {
        ActiveModel {
            id: NotSet,
            inventory_number: Set(workstation.inventory_number.to_owned()),
            os_name: Set(workstation.os_name.to_owned()),
            ip_address: Set(workstation.ip_address.to_owned()),
            mac_address: Set(workstation.mac_address.to_owned()),
            department_id: Set(workstation.department_id),
            responsible_id: Set(workstation.responsible_id),
            status: Set(workstation.status.to_owned()),
            notes: Set(workstation.notes.to_owned()),
        }
    }
}
