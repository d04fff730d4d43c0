use climate_api::config::{Config, REQUIRED_VARIABLES};
use climate_api::db::Database;
use climate_api::schema::SCHEMA;

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(e) = run().await {
        log::error!("{e}");
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Config::env().inspect_err(|e| {
        log::error!(
            "config: {e}. Check all required environment variables ({}) are set.",
            REQUIRED_VARIABLES.join(", ")
        );
    })?;

    config.log();

    let database = Database::connect(&config.database_url).await?;
    log::info!("Connected to database ({})", config.database_url);

    sqlx::raw_sql(SCHEMA).execute(&database.pool).await?;
    log::info!("Successfully ran init query");

    let state = climate_api::api::service::State::new(database);

    let listen_addr = format!("0.0.0.0:{}", config.listen_port);
    let listener = tokio::net::TcpListener::bind(&listen_addr).await?;

    let router = climate_api::api::service::router::router(state);

    log::info!("Listening on {listen_addr}");
    axum::serve(listener, router).await?;

    Ok(())
}
