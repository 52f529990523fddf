use domain_helpdesk::model::entity::Software;
use sea_orm::{entity::prelude::*, NotSet, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "software")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub version: Option<String>,
    pub license_key: Option<String>,
    pub install_date: Option<Date>,
    pub workstation_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::workstation::Entity",
        from = "Column::WorkstationId",
        to = "super::workstation::Column::Id",
        on_delete = "Cascade"
    )]
    Workstation,
}

impl Related<super::workstation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Workstation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Software {
    fn from(model: Model) -> Self {
        Software {
            id: model.id,
            name: model.name,
            version: model.version,
            license_key: model.license_key,
            install_date: model.install_date,
            workstation_id: model.workstation_id,
        }
    }
}

impl From<&Software> for ActiveModel {
    fn from(software: &Software) -> Self {
        ActiveModel {
            id: NotSet,
            name: Set(software.name.to_owned()),
            version: Set(software.version.to_owned()),
            license_key: Set(software.license_key.to_owned()),
            install_date: Set(software.install_date),
            workstation_id: Set(software.workstation_id),
        }
    }
}
