use clap::Parser;
use dotenvy::dotenv;
use pos_ledger::{
    cli::{self, AppContext, Cli},
    config,
    errors::Result,
};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // 1. Initialize tracing (as early as possible); logs go to stderr, views to stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();

    let args = Cli::parse();

    // 3. Load the application configuration
    let app_config = config::app::load_app_configuration(args.config.as_deref())?;

    // 4. Open the store once and hand it to every view
    let database_url = config::database::resolve_database_url(
        args.database_url.as_deref(),
        app_config.database_url.as_deref(),
    );
    let database = config::database::create_connection(&database_url)
        .await
        .inspect_err(|e| error!("Failed to initialize database: {}", e))?;
    let ctx = AppContext::new(database, app_config);

    // 5. Render the requested view
    let output = cli::run(&ctx, args.command).await?;
    print!("{output}");

    ctx.database.close().await?;
    info!("Database closed.");
    Ok(())
}
