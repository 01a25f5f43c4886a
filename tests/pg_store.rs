use product_catalog_api::{
    db::create_orm_conn,
    models::NewProduct,
    store::{PgProductStore, ProductStore},
};
use rust_decimal::Decimal;

// Round trip against a real Postgres: sync -> create -> update -> list -> delete.
#[tokio::test]
async fn postgres_store_lifecycle() -> anyhow::Result<()> {
    // Allow skipping when no DB is configured in the environment.
    let database_url = match std::env::var("TEST_DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("Skipping test: set TEST_DATABASE_URL to run the Postgres store test.");
            return Ok(());
        }
    };

    let store = PgProductStore::new(create_orm_conn(&database_url).await?);
    store.authenticate().await?;
    // Start from an empty table between runs.
    store.sync(true).await?;

    let first = store
        .create(NewProduct {
            name: "Keyboard".into(),
            price: Decimal::new(8950, 2),
        })
        .await?;
    assert!(first.availability);
    assert_eq!(first.price, Decimal::new(8950, 2));

    let second = store
        .create(NewProduct {
            name: "Monitor".into(),
            price: Decimal::new(30000, 2),
        })
        .await?;

    let mut toggled = first.clone();
    toggled.availability = false;
    let toggled = store.update(toggled).await?;
    assert!(!toggled.availability);
    assert_eq!(toggled.created_at, first.created_at);

    let listed: Vec<i64> = store.list().await?.iter().map(|p| p.id).collect();
    assert_eq!(listed, vec![second.id, first.id]);

    assert!(store.delete(first.id).await?);
    assert!(store.find(first.id).await?.is_none());
    assert!(!store.delete(first.id).await?);

    Ok(())
}
