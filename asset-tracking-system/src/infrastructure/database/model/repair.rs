use domain_helpdesk::model::entity::Repair;
use sea_orm::{entity::prelude::*, NotSet, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "repairs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub workstation_id: i32,
    pub technician_id: Option<i32>,
    pub repair_date: Date,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))", nullable)]
    pub cost: Option<Decimal>,
    pub status: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::workstation::Entity",
        from = "Column::WorkstationId",
        to = "super::workstation::Column::Id"
    )]
    Workstation,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::TechnicianId",
        to = "super::user::Column::Id"
    )]
    Technician,
}

impl Related<super::workstation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Workstation.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Technician.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Repair {
    type Error = anyhow::Error;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Repair {
            id: model.id,
            description: model.description,
            workstation_id: model.workstation_id,
            technician_id: model.technician_id,
            repair_date: model.repair_date,
            cost: model.cost,
            status: model.status.parse()?,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

impl From<&Repair> for ActiveModel {
    fn from(repair: &Repair) -> Self {
        ActiveModel {
            id: NotSet,
            description: Set(repair.description.to_owned()),
            workstation_id: Set(repair.workstation_id),
            technician_id: Set(repair.technician_id),
            repair_date: Set(repair.repair_date),
            cost: Set(repair.cost),
            status: Set(repair.status.to_string()),
            created_at: Set(repair.created_at),
            updated_at: Set(repair.updated_at),
        }
    }
}
