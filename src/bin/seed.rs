use product_catalog_api::{
    config::AppConfig,
    db::create_orm_conn,
    models::NewProduct,
    store::{PgProductStore, ProductStore},
};
use rust_decimal::Decimal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let store = PgProductStore::new(create_orm_conn(&config.database_url).await?);
    // Ensure the table exists.
    store.authenticate().await?;
    store.sync(false).await?;

    let products = [
        ("Curved Monitor 27\"", Decimal::new(29999, 2)),
        ("Mechanical Keyboard", Decimal::new(8950, 2)),
        ("Wireless Mouse", Decimal::new(2500, 2)),
        ("USB-C Dock", Decimal::new(14900, 2)),
    ];

    for (name, price) in products {
        let product = store
            .create(NewProduct {
                name: name.to_string(),
                price,
            })
            .await?;
        println!("Seeded product {} ({})", product.name, product.id);
    }

    println!("Seed completed");
    Ok(())
}
