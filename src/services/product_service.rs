use crate::{
    dto::products::{CreateProduct, ProductList, UpdateProduct},
    error::{AppError, AppResult},
    models::Product,
    response::{ApiResponse, MessageResponse},
    state::AppState,
};

pub async fn list_products(state: &AppState) -> AppResult<ApiResponse<ProductList>> {
    let items = state.products.list().await?;
    Ok(ApiResponse::success(ProductList { items }))
}

pub async fn get_product(state: &AppState, id: i64) -> AppResult<ApiResponse<Product>> {
    let product = find_existing(state, id).await?;
    Ok(ApiResponse::success(product))
}

pub async fn create_product(
    state: &AppState,
    payload: CreateProduct,
) -> AppResult<ApiResponse<Product>> {
    let product = state.products.create(payload.into()).await?;
    tracing::debug!(product_id = product.id, "product created");
    Ok(ApiResponse::success(product))
}

pub async fn update_product(
    state: &AppState,
    payload: UpdateProduct,
) -> AppResult<ApiResponse<Product>> {
    let mut product = find_existing(state, payload.id).await?;
    product.name = payload.name;
    product.price = payload.price;
    product.availability = payload.availability;

    let product = state.products.update(product).await?;
    tracing::debug!(product_id = product.id, "product updated");
    Ok(ApiResponse::success(product))
}

pub async fn toggle_availability(state: &AppState, id: i64) -> AppResult<ApiResponse<Product>> {
    let mut product = find_existing(state, id).await?;
    product.availability = !product.availability;

    let product = state.products.update(product).await?;
    tracing::debug!(
        product_id = product.id,
        availability = product.availability,
        "product availability toggled"
    );
    Ok(ApiResponse::success(product))
}

pub async fn delete_product(state: &AppState, id: i64) -> AppResult<MessageResponse> {
    find_existing(state, id).await?;
    if !state.products.delete(id).await? {
        return Err(AppError::NotFound);
    }
    tracing::debug!(product_id = id, "product deleted");
    Ok(MessageResponse::new("Product deleted"))
}

async fn find_existing(state: &AppState, id: i64) -> AppResult<Product> {
    match state.products.find(id).await? {
        Some(product) => Ok(product),
        None => Err(AppError::NotFound),
    }
}
