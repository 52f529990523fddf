use crate::{
    model::{
        entity::{
            Department, Repair, RepairView, Software, SoftwareView, Ticket, TicketView, User,
            UserView, Workstation, WorkstationView,
        },
        vo::{
            DashboardStats, Deletion, RepairFilter, SoftwareFilter, TicketFilter,
            WorkstationFilter, WorkstationStatusCount,
        },
    },
    repository::{
        DepartmentRepo, RepairRepo, SoftwareRepo, StatisticsRepo, TicketRepo, UserRepo,
        WorkstationRepo,
    },
    service::CredentialHasher,
};
use asset_architecture::repository::{DBRepository, MutableRepository, ReadOnlyRepository};
use async_trait::async_trait;
use mockall::mock;

mock! {
    pub DepartmentRepo {}
    impl DepartmentRepo for DepartmentRepo {}
    impl DBRepository<Department> for DepartmentRepo {}
    #[async_trait]
    impl ReadOnlyRepository<Department> for DepartmentRepo {
        async fn get_by_id(&self, id: i32) -> anyhow::Result<Option<Department>>;
        async fn get_all(&self) -> anyhow::Result<Vec<Department>>;
    }
    #[async_trait]
    impl MutableRepository<Department> for DepartmentRepo {
        async fn insert(&self, entity: &Department) -> anyhow::Result<i32>;
        async fn update(&self, entity: &Department) -> anyhow::Result<bool>;
        async fn delete_by_id(&self, id: i32) -> anyhow::Result<bool>;
    }
}

mock! {
    pub UserRepo {}
    #[async_trait]
    impl UserRepo for UserRepo {
        async fn get_by_username(&self, username: &str) -> anyhow::Result<Option<User>>;
        async fn get_view(&self, id: i32) -> anyhow::Result<Option<UserView>>;
        async fn list_views(&self) -> anyhow::Result<Vec<UserView>>;
        async fn delete_unreferenced(&self, id: i32) -> anyhow::Result<Deletion>;
    }
    impl DBRepository<User> for UserRepo {}
    #[async_trait]
    impl ReadOnlyRepository<User> for UserRepo {
        async fn get_by_id(&self, id: i32) -> anyhow::Result<Option<User>>;
        async fn get_all(&self) -> anyhow::Result<Vec<User>>;
    }
    #[async_trait]
    impl MutableRepository<User> for UserRepo {
        async fn insert(&self, entity: &User) -> anyhow::Result<i32>;
        async fn update(&self, entity: &User) -> anyhow::Result<bool>;
        async fn delete_by_id(&self, id: i32) -> anyhow::Result<bool>;
    }
}

mock! {
    pub WorkstationRepo {}
    #[async_trait]
    impl WorkstationRepo for WorkstationRepo {
        async fn get_by_inventory_number(
            &self,
            inventory_number: &str,
        ) -> anyhow::Result<Option<Workstation>>;
        async fn get_view(&self, id: i32) -> anyhow::Result<Option<WorkstationView>>;
        async fn list_views(
            &self,
            filter: &WorkstationFilter,
        ) -> anyhow::Result<Vec<WorkstationView>>;
        async fn count_by_status(&self) -> anyhow::Result<Vec<WorkstationStatusCount>>;
        async fn delete_unreferenced(&self, id: i32) -> anyhow::Result<Deletion>;
    }
    impl DBRepository<Workstation> for WorkstationRepo {}
    #[async_trait]
    impl ReadOnlyRepository<Workstation> for WorkstationRepo {
        async fn get_by_id(&self, id: i32) -> anyhow::Result<Option<Workstation>>;
        async fn get_all(&self) -> anyhow::Result<Vec<Workstation>>;
    }
    #[async_trait]
    impl MutableRepository<Workstation> for WorkstationRepo {
        async fn insert(&self, entity: &Workstation) -> anyhow::Result<i32>;
        async fn update(&self, entity: &Workstation) -> anyhow::Result<bool>;
        async fn delete_by_id(&self, id: i32) -> anyhow::Result<bool>;
    }
}

mock! {
    pub SoftwareRepo {}
    #[async_trait]
    impl SoftwareRepo for SoftwareRepo {
        async fn get_view(&self, id: i32) -> anyhow::Result<Option<SoftwareView>>;
        async fn list_views(&self, filter: &SoftwareFilter) -> anyhow::Result<Vec<SoftwareView>>;
    }
    impl DBRepository<Software> for SoftwareRepo {}
    #[async_trait]
    impl ReadOnlyRepository<Software> for SoftwareRepo {
        async fn get_by_id(&self, id: i32) -> anyhow::Result<Option<Software>>;
        async fn get_all(&self) -> anyhow::Result<Vec<Software>>;
    }
    #[async_trait]
    impl MutableRepository<Software> for SoftwareRepo {
        async fn insert(&self, entity: &Software) -> anyhow::Result<i32>;
        async fn update(&self, entity: &Software) -> anyhow::Result<bool>;
        async fn delete_by_id(&self, id: i32) -> anyhow::Result<bool>;
    }
}

mock! {
    pub TicketRepo {}
    #[async_trait]
    impl TicketRepo for TicketRepo {
        async fn get_view(&self, id: i32) -> anyhow::Result<Option<TicketView>>;
        async fn list_views(&self, filter: &TicketFilter) -> anyhow::Result<Vec<TicketView>>;
    }
    impl DBRepository<Ticket> for TicketRepo {}
    #[async_trait]
    impl ReadOnlyRepository<Ticket> for TicketRepo {
        async fn get_by_id(&self, id: i32) -> anyhow::Result<Option<Ticket>>;
        async fn get_all(&self) -> anyhow::Result<Vec<Ticket>>;
    }
    #[async_trait]
    impl MutableRepository<Ticket> for TicketRepo {
        async fn insert(&self, entity: &Ticket) -> anyhow::Result<i32>;
        async fn update(&self, entity: &Ticket) -> anyhow::Result<bool>;
        async fn delete_by_id(&self, id: i32) -> anyhow::Result<bool>;
    }
}

mock! {
    pub RepairRepo {}
    #[async_trait]
    impl RepairRepo for RepairRepo {
        async fn get_view(&self, id: i32) -> anyhow::Result<Option<RepairView>>;
        async fn list_views(&self, filter: &RepairFilter) -> anyhow::Result<Vec<RepairView>>;
    }
    impl DBRepository<Repair> for RepairRepo {}
    #[async_trait]
    impl ReadOnlyRepository<Repair> for RepairRepo {
        async fn get_by_id(&self, id: i32) -> anyhow::Result<Option<Repair>>;
        async fn get_all(&self) -> anyhow::Result<Vec<Repair>>;
    }
    #[async_trait]
    impl MutableRepository<Repair> for RepairRepo {
        async fn insert(&self, entity: &Repair) -> anyhow::Result<i32>;
        async fn update(&self, entity: &Repair) -> anyhow::Result<bool>;
        async fn delete_by_id(&self, id: i32) -> anyhow::Result<bool>;
    }
}

mock! {
    pub StatisticsRepo {}
    #[async_trait]
    impl StatisticsRepo for StatisticsRepo {
        async fn collect(&self) -> anyhow::Result<DashboardStats>;
    }
}

mock! {
    pub CredentialHasher {}
    impl CredentialHasher for CredentialHasher {
        fn hash_password(&self, password: &str) -> anyhow::Result<String>;
        fn verify_password(&self, password: &str, stored_hash: &str) -> bool;
        fn verify_unknown(&self, password: &str);
    }
}
