mod model;
mod server;

use std::net::SocketAddr;

use server::{
    config::Config, error::AppError, scheduler::station_conditions,
    service::auth::code::LoginCodeService, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "caffe=info,tower_http=warn".into()),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;
    let http_client = startup::setup_reqwest_client();

    let login_code_service = LoginCodeService::new();

    tracing::info!("Starting server");

    // Check for admin users and generate a bootstrap login link if none exist
    startup::check_for_admin(&db, &config, &login_code_service).await?;

    // Start the polling-station conditions collector
    let scheduler_db = db.clone();
    let scheduler_http = http_client.clone();
    tokio::spawn(async move {
        if let Err(e) = station_conditions::start_scheduler(scheduler_db, scheduler_http).await {
            tracing::error!("Station conditions scheduler error: {}", e);
        }
    });

    let router = server::router::router()
        .with_state(AppState::new(
            db,
            http_client,
            login_code_service,
            config.app_url.clone(),
        ))
        .layer(session)
        .layer(tower_http::cors::CorsLayer::permissive());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
