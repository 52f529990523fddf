use domain_helpdesk::model::entity::Ticket;
use sea_orm::{entity::prelude::*, NotSet, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tickets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_name = "type")]
    pub ticket_type: Option<String>,
    pub status: String,
    pub priority: String,
    pub user_id: i32,
    pub assigned_to: Option<i32>,
    pub workstation_id: Option<i32>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    Reporter,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AssignedTo",
        to = "super::user::Column::Id"
    )]
    Assignee,
    #[sea_orm(
        belongs_to = "super::workstation::Entity",
        from = "Column::WorkstationId",
        to = "super::workstation::Column::Id"
    )]
    Workstation,
}

impl Related<super::workstation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Workstation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Ticket {
    type Error = anyhow::Error;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Ticket {
            id: model.id,
            title: model.title,
            description: model.description,
            ticket_type: model.ticket_type,
            status: model.status.parse()?,
            priority: model.priority.parse()?,
            user_id: model.user_id,
            assigned_to: model.assigned_to,
            workstation_id: model.workstation_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

impl From<&Ticket> for ActiveModel {
    fn from(ticket: &Ticket) -> Self {
        ActiveModel {
            id: NotSet,
            title: Set(ticket.title.to_owned()),
            description: Set(ticket.description.to_owned()),
            ticket_type: Set(ticket.ticket_type.to_owned()),
            status: Set(ticket.status.to_string()),
            priority: Set(ticket.priority.to_string()),
            user_id: Set(ticket.user_id),
            assigned_to: Set(ticket.assigned_to),
            workstation_id: Set(ticket.workstation_id),
            created_at: Set(ticket.created_at),
            updated_at: Set(ticket.updated_at),
        }
    }
}
