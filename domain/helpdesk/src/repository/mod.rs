mod department;
mod repair;
mod software;
mod statistics;
mod ticket;
mod user;
mod workstation;

#[rustfmt::skip]
pub use {
    department::DepartmentRepo,
    repair::RepairRepo,
    software::SoftwareRepo,
    statistics::StatisticsRepo,
    ticket::TicketRepo,
    user::UserRepo,
    workstation::WorkstationRepo,
};
