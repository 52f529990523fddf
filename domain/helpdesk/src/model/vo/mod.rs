/// Closed set of values persisted as their snake_case text form.
macro_rules! text_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = anyhow::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    other => anyhow::bail!(concat!("unknown ", stringify!($name), ": {}"), other),
                }
            }
        }
    };
}

mod clock;
mod filter;
pub mod payload;
mod reference;
mod role;
mod stats;
mod status;

#[rustfmt::skip]
pub use {
    clock::{advance_timestamp, now},
    filter::{RepairFilter, SoftwareFilter, TicketFilter, WorkstationFilter},
    payload::{
        DepartmentPayload, RepairPayload, SoftwarePayload, TicketPayload, UserPayload,
        WorkstationPayload,
    },
    reference::{BlockingReference, Deletion, UserReferences, WorkstationReferences},
    role::Role,
    stats::{DashboardStats, DepartmentCount, NameCount, WorkstationStatusCount},
    status::{RepairStatus, TicketPriority, TicketStatus},
};
