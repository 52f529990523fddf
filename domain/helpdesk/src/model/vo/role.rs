text_enum! {
    /// Access role of a user account.
    Role {
        Admin => "admin",
        Manager => "manager",
        Technician => "technician",
        User => "user",
    }
}

impl Default for Role {
    fn default() -> Self {
        Self::User
    }
}
