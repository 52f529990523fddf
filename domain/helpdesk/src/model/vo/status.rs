text_enum! {
    /// Lifecycle of a ticket.
    TicketStatus {
        New => "new",
        Assigned => "assigned",
        InProgress => "in_progress",
        NeedRepair => "need_repair",
        RepairInProgress => "repair_in_progress",
        Resolved => "resolved",
        Closed => "closed",
    }
}

text_enum! {
    TicketPriority {
        Low => "low",
        Medium => "medium",
        High => "high",
        Critical => "critical",
    }
}

text_enum! {
    /// Lifecycle of a repair.
    RepairStatus {
        Pending => "pending",
        InProgress => "in_progress",
        Completed => "completed",
        Cancelled => "cancelled",
    }
}

impl Default for TicketStatus {
    fn default() -> Self {
        Self::New
    }
}

impl Default for TicketPriority {
    fn default() -> Self {
        Self::Medium
    }
}

impl Default for RepairStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl TicketStatus {
    /// Resolved and closed tickets no longer need attention.
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Resolved | Self::Closed)
    }

    /// Transition table used when strict status transitions are enabled.
    /// Staying in the same status is always allowed.
    pub fn can_transition_to(&self, next: TicketStatus) -> bool {
        use TicketStatus::*;
        if *self == next {
            return true;
        }
        match self {
            New => matches!(next, Assigned | InProgress | Resolved | Closed),
            Assigned => matches!(next, New | InProgress | Resolved | Closed),
            InProgress => matches!(next, Assigned | NeedRepair | Resolved),
            NeedRepair => matches!(next, InProgress | RepairInProgress),
            RepairInProgress => matches!(next, InProgress | Resolved),
            Resolved => matches!(next, InProgress | Closed),
            Closed => matches!(next, InProgress),
        }
    }
}

impl RepairStatus {
    pub fn can_transition_to(&self, next: RepairStatus) -> bool {
        use RepairStatus::*;
        if *self == next {
            return true;
        }
        match self {
            Pending => matches!(next, InProgress | Cancelled),
            InProgress => matches!(next, Pending | Completed | Cancelled),
            Completed => false,
            Cancelled => matches!(next, Pending),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn text_form_round_trips_through_serde_and_from_str() {
        for status in TicketStatus::ALL {
            let json = serde_json::to_string(status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            assert_eq!(TicketStatus::from_str(status.as_str()).unwrap(), *status);
        }
        assert!(RepairStatus::from_str("finished").is_err());
    }

    #[test]
    fn ticket_repair_branch_is_reachable() {
        use TicketStatus::*;
        let path = [New, Assigned, InProgress, NeedRepair, RepairInProgress, Resolved, Closed];
        for pair in path.windows(2) {
            assert!(pair[0].can_transition_to(pair[1]), "{} -> {}", pair[0], pair[1]);
        }
        assert!(!Closed.can_transition_to(NeedRepair));
        assert!(!New.can_transition_to(RepairInProgress));
    }

    #[test]
    fn completed_repair_is_final() {
        for next in RepairStatus::ALL {
            assert_eq!(
                RepairStatus::Completed.can_transition_to(*next),
                *next == RepairStatus::Completed
            );
        }
    }

    #[test]
    fn open_tickets() {
        assert!(TicketStatus::NeedRepair.is_open());
        assert!(!TicketStatus::Resolved.is_open());
        assert!(!TicketStatus::Closed.is_open());
    }
}
