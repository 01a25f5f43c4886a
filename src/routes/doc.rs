use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::products::{CreateProductRequest, ProductList, UpdateProductRequest},
    models::Product,
    response::{ApiResponse, ErrorResponse, MessageResponse, ValidationErrorResponse},
    routes::{health, products},
    validation::{ErrorKind, FieldError, Location},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        products::list_products,
        products::get_product,
        products::create_product,
        products::update_product,
        products::toggle_availability,
        products::delete_product
    ),
    components(
        schemas(
            Product,
            ProductList,
            CreateProductRequest,
            UpdateProductRequest,
            health::HealthData,
            MessageResponse,
            ErrorResponse,
            ValidationErrorResponse,
            FieldError,
            ErrorKind,
            Location,
            ApiResponse<Product>,
            ApiResponse<ProductList>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Products", description = "Product endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
