use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use common::database::{self, DatabaseConfig};
use users::{
    MIGRATOR,
    config::{ServerConfig, SuperuserConfig},
    manager::UserManager,
    models::UserFields,
    passengers::PassengerService,
    repositories::{PassengerRepository, UserRepository},
    routes,
    state::AppState,
};

/// Create the configured superuser unless one already uses that email
async fn bootstrap_superuser(manager: &UserManager, config: &SuperuserConfig) -> Result<()> {
    if manager.get_by_natural_key(&config.email).await?.is_some() {
        info!("Superuser {} already exists", config.email);
        return Ok(());
    }

    let user = manager
        .create_superuser(&config.email, Some(config.password.as_str()), UserFields::default())
        .await?;
    info!("Created superuser {}", user);

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting users service");

    // Initialize database connection pool
    let db_config = DatabaseConfig::from_env()?;
    let pool = database::init_pool(&db_config).await?;

    // Check database connectivity
    if database::health_check(&pool).await? {
        info!("Database connection successful");
    } else {
        anyhow::bail!("Failed to connect to database");
    }

    database::run_migrations(&pool, &MIGRATOR).await?;

    let user_manager = UserManager::new(Arc::new(UserRepository::new(pool.clone())));
    if let Some(superuser) = SuperuserConfig::from_env() {
        bootstrap_superuser(&user_manager, &superuser).await?;
    }

    let app_state = AppState {
        passengers: PassengerService::new(Arc::new(PassengerRepository::new(pool))),
    };

    info!("Users service initialized successfully");

    // Start the web server
    let server_config = ServerConfig::from_env()?;
    let app = routes::create_router(app_state);

    let listener = tokio::net::TcpListener::bind(server_config.bind_address()).await?;
    info!("Users service listening on {}", server_config.bind_address());

    axum::serve(listener, app).await?;

    Ok(())
}
