use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config, data::user::UserRepository, error::AppError,
    service::auth::code::LoginCodeService,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// Sessions are stored in the same Sqlite database as the rest of the
/// application state and expire after seven days of inactivity.
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store
        .migrate()
        .await
        .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

    Ok(SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::days(7))))
}

/// Builds the HTTP client used for all outbound provider and webhook calls.
///
/// Redirects are disabled so that admin-configured endpoints cannot bounce
/// requests to arbitrary internal addresses.
pub fn setup_reqwest_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap_or_default()
}

/// Checks whether any admin user exists and logs a bootstrap login link if not.
///
/// On a fresh deployment there is no way to log in because login codes are
/// issued by admins. This generates a one-time bootstrap code (60 second TTL)
/// and logs a login link; the first user to redeem it is created as an admin.
///
/// # Arguments
/// - `db` - Database connection
/// - `config` - Application configuration containing the app URL
/// - `login_code_service` - Service holding the bootstrap code
///
/// # Returns
/// - `Ok(())` - Admin exists, or a bootstrap code was generated and logged
/// - `Err(AppError)` - Database error while checking for admins
pub async fn check_for_admin(
    db: &DatabaseConnection,
    config: &Config,
    login_code_service: &LoginCodeService,
) -> Result<(), AppError> {
    let user_repo = UserRepository::new(db);

    if user_repo.admin_exists().await? {
        return Ok(());
    }

    let code = login_code_service.generate_bootstrap().await;

    tracing::warn!(
        "No admin user found. Log in within 60 seconds using: {}/login?code={}",
        config.app_url,
        code
    );

    Ok(())
}
