//! Persistence seam for products.
//!
//! Handlers only see [`ProductStore`]; the server wires in [`PgProductStore`]
//! and tests substitute [`MemoryProductStore`].

use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::{NewProduct, Product},
};

pub mod memory;
pub mod postgres;

pub use memory::MemoryProductStore;
pub use postgres::PgProductStore;

#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Verifies the backend is reachable.
    async fn authenticate(&self) -> AppResult<()>;

    /// Creates the products table if missing. `force` drops it first.
    async fn sync(&self, force: bool) -> AppResult<()>;

    /// All products, newest first.
    async fn list(&self) -> AppResult<Vec<Product>>;

    async fn find(&self, id: i64) -> AppResult<Option<Product>>;

    async fn create(&self, product: NewProduct) -> AppResult<Product>;

    /// Persists name, price and availability of an existing product.
    ///
    /// Fails with `AppError::NotFound` when the row no longer exists.
    async fn update(&self, product: Product) -> AppResult<Product>;

    /// Returns whether a row was removed.
    async fn delete(&self, id: i64) -> AppResult<bool>;
}
