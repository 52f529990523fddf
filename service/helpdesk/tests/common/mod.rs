#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use domain_helpdesk::model::{
    entity::{Ticket, User, UserView, Workstation},
    vo::{Role, TicketPriority, TicketStatus},
};

pub fn user(id: i32, username: &str) -> User {
    User {
        id,
        username: username.to_string(),
        full_name: format!("{username} full name"),
        password_hash: format!("hash-of-{username}"),
        email: None,
        role: Role::User,
        department_id: Some(1),
    }
}

pub fn user_view(user: &User) -> UserView {
    UserView::new(user.clone(), Some("IT".to_string()))
}

pub fn workstation(id: i32, inventory_number: &str) -> Workstation {
    Workstation {
        id,
        inventory_number: inventory_number.to_string(),
        os_name: Some("Windows 11".to_string()),
        ip_address: None,
        mac_address: None,
        department_id: Some(1),
        responsible_id: Some(2),
        status: "operational".to_string(),
        notes: None,
    }
}

pub fn ticket(id: i32) -> Ticket {
    let opened = Utc.with_ymd_and_hms(2024, 1, 10, 8, 0, 0).unwrap();
    Ticket {
        id,
        title: "no boot".to_string(),
        description: "no boot".to_string(),
        ticket_type: Some("hardware".to_string()),
        status: TicketStatus::New,
        priority: TicketPriority::High,
        user_id: 2,
        assigned_to: Some(3),
        workstation_id: Some(5),
        created_at: opened,
        updated_at: opened,
    }
}
