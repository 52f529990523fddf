mod auth;
mod credential;
mod department;
mod reference;
mod repair;
mod software;
mod statistics;
mod ticket;
mod user;
mod workstation;

#[rustfmt::skip]
pub use {
    auth::AuthServiceImpl,
    credential::Argon2CredentialHasher,
    department::DepartmentServiceImpl,
    repair::RepairServiceImpl,
    software::SoftwareServiceImpl,
    statistics::StatisticsServiceImpl,
    ticket::TicketServiceImpl,
    user::UserServiceImpl,
    workstation::WorkstationServiceImpl,
};
