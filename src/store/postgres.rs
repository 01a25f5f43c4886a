use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set,
    ActiveValue::{NotSet, Unchanged},
};

use crate::{
    db::sync_schema,
    entity::products::{ActiveModel, Column, Entity as Products, Model as ProductModel},
    error::{AppError, AppResult},
    models::{NewProduct, Product},
    store::ProductStore,
};

/// SeaORM-backed store over the `products` table.
#[derive(Clone)]
pub struct PgProductStore {
    conn: DatabaseConnection,
}

impl PgProductStore {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn authenticate(&self) -> AppResult<()> {
        self.conn.ping().await?;
        Ok(())
    }

    async fn sync(&self, force: bool) -> AppResult<()> {
        sync_schema(&self.conn, force).await?;
        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<Product>> {
        let items = Products::find()
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&self.conn)
            .await?
            .into_iter()
            .map(product_from_entity)
            .collect();
        Ok(items)
    }

    async fn find(&self, id: i64) -> AppResult<Option<Product>> {
        let product = Products::find_by_id(id)
            .one(&self.conn)
            .await?
            .map(product_from_entity);
        Ok(product)
    }

    async fn create(&self, product: NewProduct) -> AppResult<Product> {
        let now = Utc::now().fixed_offset();
        let active = ActiveModel {
            id: NotSet,
            name: Set(product.name),
            price: Set(product.price),
            availability: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let model = active.insert(&self.conn).await?;
        Ok(product_from_entity(model))
    }

    async fn update(&self, product: Product) -> AppResult<Product> {
        let active = ActiveModel {
            id: Unchanged(product.id),
            name: Set(product.name),
            price: Set(product.price),
            availability: Set(product.availability),
            created_at: NotSet,
            updated_at: Set(Utc::now().fixed_offset()),
        };
        let model = active.update(&self.conn).await.map_err(|err| match err {
            DbErr::RecordNotUpdated => AppError::NotFound,
            other => AppError::OrmError(other),
        })?;
        Ok(product_from_entity(model))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = Products::delete_by_id(id).exec(&self.conn).await?;
        Ok(result.rows_affected > 0)
    }
}

fn product_from_entity(model: ProductModel) -> Product {
    Product {
        id: model.id,
        name: model.name,
        price: model.price,
        availability: model.availability,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}
