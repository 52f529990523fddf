//! Table definitions. The schema is created from these on start-up.
pub mod department;
pub mod repair;
pub mod software;
pub mod ticket;
pub mod user;
pub mod workstation;
