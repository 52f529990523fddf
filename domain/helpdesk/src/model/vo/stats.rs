use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkstationStatusCount {
    pub status: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentCount {
    /// `None` buckets workstations without a department.
    pub department: Option<String>,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameCount {
    pub name: String,
    pub count: i64,
}

/// Figures shown on the dashboard landing page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_workstations: i64,
    pub total_software: i64,
    pub total_tickets: i64,
    pub open_tickets: i64,
    pub total_repairs: i64,
    pub workstations_by_department: Vec<DepartmentCount>,
    pub software_by_name: Vec<NameCount>,
}
