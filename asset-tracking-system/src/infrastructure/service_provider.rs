use std::sync::Arc;

use domain_helpdesk::service::*;
use service_helpdesk::*;

use super::{
    config::AppConfig,
    database::{schema, Database, OrmRepo},
};

/// Every service the HTTP handlers reach, wired once at start-up. Handlers
/// only see the service traits, so tests can swap any of them.
#[derive(Clone)]
pub struct ServiceProvider {
    pub config: AppConfig,
    pub database: Arc<Database>,
    pub auth_service: Arc<dyn AuthService>,
    pub department_service: Arc<dyn DepartmentService>,
    pub user_service: Arc<dyn UserService>,
    pub workstation_service: Arc<dyn WorkstationService>,
    pub software_service: Arc<dyn SoftwareService>,
    pub ticket_service: Arc<dyn TicketService>,
    pub repair_service: Arc<dyn RepairService>,
    pub statistics_service: Arc<dyn StatisticsService>,
}

impl ServiceProvider {
    pub async fn build(config: AppConfig) -> anyhow::Result<Self> {
        let database = Arc::new(Database::connect(&config.db).await?);
        Self::with_database(config, database).await
    }

    /// Creates the schema if needed, seeds the administrator and wires the
    /// services on top of `database`.
    pub async fn with_database(config: AppConfig, database: Arc<Database>) -> anyhow::Result<Self> {
        let hasher: Arc<dyn CredentialHasher> = Arc::new(Argon2CredentialHasher::default());
        schema::bootstrap(&database, &config.bootstrap, hasher.as_ref()).await?;

        let repo = Arc::new(OrmRepo::builder().db(database.clone()).build());
        let strict = config.helpdesk.strict_status_transitions;

        Ok(Self {
            auth_service: Arc::new(
                AuthServiceImpl::builder()
                    .user_repo(repo.clone())
                    .hasher(hasher.clone())
                    .build(),
            ),
            department_service: Arc::new(
                DepartmentServiceImpl::builder()
                    .department_repo(repo.clone())
                    .build(),
            ),
            user_service: Arc::new(
                UserServiceImpl::builder()
                    .user_repo(repo.clone())
                    .department_repo(repo.clone())
                    .hasher(hasher)
                    .build(),
            ),
            workstation_service: Arc::new(
                WorkstationServiceImpl::builder()
                    .workstation_repo(repo.clone())
                    .software_repo(repo.clone())
                    .department_repo(repo.clone())
                    .user_repo(repo.clone())
                    .build(),
            ),
            software_service: Arc::new(
                SoftwareServiceImpl::builder()
                    .software_repo(repo.clone())
                    .workstation_repo(repo.clone())
                    .build(),
            ),
            ticket_service: Arc::new(
                TicketServiceImpl::builder()
                    .ticket_repo(repo.clone())
                    .user_repo(repo.clone())
                    .workstation_repo(repo.clone())
                    .strict_status_transitions(strict)
                    .build(),
            ),
            repair_service: Arc::new(
                RepairServiceImpl::builder()
                    .repair_repo(repo.clone())
                    .workstation_repo(repo.clone())
                    .user_repo(repo.clone())
                    .strict_status_transitions(strict)
                    .build(),
            ),
            statistics_service: Arc::new(
                StatisticsServiceImpl::builder()
                    .statistics_repo(repo)
                    .build(),
            ),
            config,
            database,
        })
    }
}
