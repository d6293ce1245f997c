use anyhow::Result;
use clap::Parser;
use config::Config;
use log::{error, info};
use persistence::get_db_context;
use service::{create_service_context, ServiceContext};

mod config;
mod constants;
mod error;
mod persistence;
mod service;
mod web;

// MAIN
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    // Parse command line arguments and env vars with clap
    let conf = Config::parse();

    let service_context = init_context(conf).await?;

    if let Err(e) = web::rocket_main(service_context).launch().await {
        error!("Web server stopped with error: {e}");
        anyhow::bail!("web server stopped unexpectedly");
    }

    info!("Phonebook stopped");
    Ok(())
}

async fn init_context(conf: Config) -> error::Result<ServiceContext> {
    let db = get_db_context(&conf).await?;
    let service_context = create_service_context(conf, db).await?;
    Ok(service_context)
}
