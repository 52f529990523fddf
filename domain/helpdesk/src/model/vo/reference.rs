use std::fmt;

use serde::Serialize;

/// A relation that still points at a row which is about to be deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockingReference {
    /// `table.column` holding the reference.
    pub relation: &'static str,
    pub count: u64,
}

impl fmt::Display for BlockingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.relation, self.count)
    }
}

/// Outcome of an integrity-checked delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deletion {
    Deleted,
    NotFound,
    /// Nothing was removed.
    Blocked(Vec<BlockingReference>),
}

/// How often a user is referenced by other records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserReferences {
    pub responsible_workstations: u64,
    pub reported_tickets: u64,
    pub assigned_tickets: u64,
    pub repairs: u64,
}

impl UserReferences {
    pub fn blocking(&self) -> Vec<BlockingReference> {
        collect_blocking(&[
            ("workstations.responsible_id", self.responsible_workstations),
            ("tickets.user_id", self.reported_tickets),
            ("tickets.assigned_to", self.assigned_tickets),
            ("repairs.technician_id", self.repairs),
        ])
    }
}

/// How often a workstation is referenced by tickets and repairs. Software is
/// owned by the workstation and never blocks its deletion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkstationReferences {
    pub tickets: u64,
    pub repairs: u64,
}

impl WorkstationReferences {
    pub fn blocking(&self) -> Vec<BlockingReference> {
        collect_blocking(&[
            ("tickets.workstation_id", self.tickets),
            ("repairs.workstation_id", self.repairs),
        ])
    }
}

fn collect_blocking(counts: &[(&'static str, u64)]) -> Vec<BlockingReference> {
    counts
        .iter()
        .filter(|(_, count)| *count > 0)
        .map(|&(relation, count)| BlockingReference { relation, count })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreferenced_user_has_nothing_blocking() {
        assert!(UserReferences::default().blocking().is_empty());
    }

    #[test]
    fn only_nonzero_relations_block() {
        let refs = UserReferences {
            assigned_tickets: 2,
            repairs: 1,
            ..Default::default()
        };
        assert_eq!(
            refs.blocking(),
            vec![
                BlockingReference {
                    relation: "tickets.assigned_to",
                    count: 2
                },
                BlockingReference {
                    relation: "repairs.technician_id",
                    count: 1
                },
            ]
        );
    }
}
