use crate::{
    abstract_trait::{gateway::DynHttpGateway, navigator::DynNavigator},
    di::DependenciesInject,
    gateway::{HttpGateway, SessionContext},
    guard::{RouteGuard, RouteTable},
    navigation::HistoryNavigator,
    store::{AccountStore, AlertStore, SchoolStore, SessionStore, UserDirectoryStore},
};
use anyhow::{Context, Result};
use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::{DynJwtService, DynTokenStorage},
    cache::FileStorage,
    config::{Config, JwtConfig},
    utils::Metrics,
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub navigator: DynNavigator,
    pub session_context: Arc<SessionContext>,
    pub gateway: DynHttpGateway,
    pub di_container: DependenciesInject,
    pub alerts: Arc<AlertStore>,
    pub session: Arc<SessionStore>,
    pub directory: Arc<UserDirectoryStore>,
    pub accounts: Arc<AccountStore>,
    pub schools: Arc<SchoolStore>,
    pub guard: RouteGuard,
    pub registry: Arc<Mutex<Registry>>,
    pub metrics: Arc<Mutex<Metrics>>,
}

impl AppState {
    /// Opens the file-backed storage named in the config.
    pub async fn new(config: Config) -> Result<Self> {
        let storage = FileStorage::open(&config.storage_path)
            .await
            .with_context(|| format!("Failed to open storage at {:?}", config.storage_path))?;

        info!("Using storage file {:?}", storage.path());

        Self::with_parts(
            config,
            Arc::new(storage) as DynTokenStorage,
            Arc::new(HistoryNavigator::default()) as DynNavigator,
        )
        .await
    }

    pub async fn with_parts(
        config: Config,
        storage: DynTokenStorage,
        navigator: DynNavigator,
    ) -> Result<Self> {
        let registry = Arc::new(Mutex::new(Registry::default()));
        let metrics = Arc::new(Mutex::new(Metrics::new()));
        metrics.lock().await.register(&mut *registry.lock().await);

        let jwt = Arc::new(JwtConfig::default()) as DynJwtService;
        let routes = RouteTable::default();

        let session_context = Arc::new(SessionContext::new(storage, config.default_school.clone()));

        let gateway = Arc::new(
            HttpGateway::new(
                &config,
                session_context.clone(),
                navigator.clone(),
                metrics.clone(),
            )
            .context("Failed to build HTTP gateway")?,
        ) as DynHttpGateway;

        let di_container = DependenciesInject::new(gateway.clone());
        let alerts = Arc::new(AlertStore::new());

        let session = Arc::new(SessionStore::new(
            session_context.clone(),
            di_container.auth_service.clone(),
            di_container.profile_service.clone(),
            jwt,
            alerts.clone(),
            navigator.clone(),
            routes,
        ));

        let directory = Arc::new(UserDirectoryStore::new(
            di_container.user_service.clone(),
            di_container.profile_service.clone(),
            alerts.clone(),
            config.user_list_limit,
        ));

        let accounts = Arc::new(AccountStore::new(di_container.account_service.clone()));
        let schools = Arc::new(SchoolStore::new(di_container.school_service.clone()));
        let guard = RouteGuard::new(routes, session_context.clone(), navigator.clone());

        Ok(Self {
            config,
            navigator,
            session_context,
            gateway,
            di_container,
            alerts,
            session,
            directory,
            accounts,
            schools,
            guard,
            registry,
            metrics,
        })
    }
}
