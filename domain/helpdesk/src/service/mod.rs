mod auth;
mod department;
mod repair;
mod software;
mod statistics;
mod ticket;
mod user;
mod workstation;

#[rustfmt::skip]
pub use {
    auth::{AuthService, CredentialHasher},
    department::DepartmentService,
    repair::RepairService,
    software::SoftwareService,
    statistics::StatisticsService,
    ticket::TicketService,
    user::UserService,
    workstation::WorkstationService,
};
