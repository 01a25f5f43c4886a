use anyhow::Result;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, EntityName, Schema,
    Statement,
};

use crate::{entity::Products, error::AppResult, store::ProductStore};

/// Create a SeaORM connection.
///
/// The pool connects lazily, so an unreachable database only surfaces once
/// [`connect_db`] or a request touches it.
pub async fn create_orm_conn(database_url: &str) -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(database_url);
    options.connect_lazy(true);
    let conn = Database::connect(options).await?;
    Ok(conn)
}

/// Create the `products` table from the entity definition if it does not exist.
/// With `force`, the table is dropped and recreated empty.
pub async fn sync_schema(conn: &DatabaseConnection, force: bool) -> Result<(), DbErr> {
    let backend = conn.get_database_backend();
    if force {
        let drop = format!("DROP TABLE IF EXISTS \"{}\"", Products.table_name());
        conn.execute(Statement::from_string(backend, drop)).await?;
    }

    let schema = Schema::new(backend);
    let mut table = schema.create_table_from_entity(Products);
    table.if_not_exists();
    conn.execute(backend.build(&table)).await?;
    Ok(())
}

/// Verify the store and sync its schema. Failures are logged, not returned:
/// the server keeps starting without a working database.
pub async fn connect_db(store: &dyn ProductStore) -> bool {
    let result: AppResult<()> = async {
        store.authenticate().await?;
        store.sync(false).await
    }
    .await;

    match result {
        Ok(()) => {
            tracing::info!("Connected successfully to db");
            true
        }
        Err(err) => {
            tracing::error!(error = %err, "Failed to connect to db");
            false
        }
    }
}
