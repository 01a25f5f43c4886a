use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::{NewProduct, Product, normalize_price},
    store::ProductStore,
};

#[derive(Default)]
struct Inner {
    last_id: i64,
    rows: BTreeMap<i64, Product>,
}

/// Process-local store with the same ordering, id and price-scale semantics
/// as the database-backed one.
#[derive(Default)]
pub struct MemoryProductStore {
    inner: RwLock<Inner>,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn authenticate(&self) -> AppResult<()> {
        Ok(())
    }

    async fn sync(&self, force: bool) -> AppResult<()> {
        if force {
            *self.inner.write().await = Inner::default();
        }
        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<Product>> {
        let inner = self.inner.read().await;
        let mut products: Vec<Product> = inner.rows.values().cloned().collect();
        products.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(products)
    }

    async fn find(&self, id: i64) -> AppResult<Option<Product>> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn create(&self, product: NewProduct) -> AppResult<Product> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let now = Utc::now();
        let product = Product {
            id: inner.last_id,
            name: product.name,
            price: normalize_price(product.price),
            availability: true,
            created_at: now,
            updated_at: now,
        };
        inner.rows.insert(product.id, product.clone());
        Ok(product)
    }

    async fn update(&self, product: Product) -> AppResult<Product> {
        let mut inner = self.inner.write().await;
        let row = inner.rows.get_mut(&product.id).ok_or(AppError::NotFound)?;
        row.name = product.name;
        row.price = normalize_price(product.price);
        row.availability = product.availability;
        row.updated_at = Utc::now();
        Ok(row.clone())
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        Ok(self.inner.write().await.rows.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn new_product(name: &str, price: i64) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            price: Decimal::from(price),
        }
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = MemoryProductStore::new();
        let first = store.create(new_product("a", 1)).await.unwrap();
        assert!(store.delete(first.id).await.unwrap());

        let second = store.create(new_product("b", 2)).await.unwrap();
        assert!(second.id > first.id);
        assert!(store.find(first.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn prices_are_stored_with_two_decimals() {
        let store = MemoryProductStore::new();
        let product = store.create(new_product("a", 100)).await.unwrap();
        assert_eq!(product.price.to_string(), "100.00");

        let mut changed = product.clone();
        changed.price = Decimal::new(12345, 3);
        let updated = store.update(changed).await.unwrap();
        assert_eq!(updated.price.to_string(), "12.35");
    }

    #[tokio::test]
    async fn update_of_missing_row_is_not_found() {
        let store = MemoryProductStore::new();
        let product = store.create(new_product("a", 1)).await.unwrap();
        store.delete(product.id).await.unwrap();

        let result = store.update(product).await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn forced_sync_empties_the_store() {
        let store = MemoryProductStore::new();
        store.create(new_product("a", 1)).await.unwrap();
        store.sync(true).await.unwrap();
        assert!(store.list().await.unwrap().is_empty());
    }
}
