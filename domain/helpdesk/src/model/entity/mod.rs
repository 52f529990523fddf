mod department;
mod repair;
mod software;
mod ticket;
mod user;
mod workstation;

#[rustfmt::skip]
pub use {
    department::Department,
    repair::{Repair, RepairView},
    software::{Software, SoftwareView},
    ticket::{Ticket, TicketView},
    user::{User, UserView, BOOTSTRAP_ADMIN_ID},
    workstation::{Workstation, WorkstationView},
};
