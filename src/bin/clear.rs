use std::process::ExitCode;

use product_catalog_api::{
    config::AppConfig,
    db::create_orm_conn,
    store::{PgProductStore, ProductStore},
};

/// Drops and recreates the products table.
#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    match clear().await {
        Ok(()) => {
            println!("Database cleared");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn clear() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    let store = PgProductStore::new(create_orm_conn(&config.database_url).await?);
    store.authenticate().await?;
    store.sync(true).await?;
    Ok(())
}
