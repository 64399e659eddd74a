//! HTTP handlers for Products API

use axum::{
    extract::{Path, State},
    http::header,
    middleware,
    response::IntoResponse,
    routing::{delete, get, post, put},
    Json, Router,
};
use axum_helpers::{
    attach_request_path,
    errors::responses::{BadRequestResponse, InternalServerErrorResponse, NotFoundResponse},
    ErrorResponse, IdPath, JsonBody,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::Product;
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        add_product,
        add_products,
        find_all_products,
        find_product_by_id,
        find_product_by_name,
        update_product,
        delete_product,
        export_csv,
    ),
    components(
        schemas(Product, ErrorResponse),
        responses(NotFoundResponse, BadRequestResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Products", description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router with all HTTP endpoints
///
/// Error bodies carry the request path through `attach_request_path`.
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/addProduct", post(add_product))
        .route("/addProducts", post(add_products))
        .route("/products", get(find_all_products))
        .route("/products/csv", get(export_csv))
        .route("/productById/{id}", get(find_product_by_id))
        .route("/product/{name}", get(find_product_by_name))
        .route("/update", put(update_product))
        .route("/delete/{id}", delete(delete_product))
        .layer(middleware::from_fn(attach_request_path))
        .with_state(shared_service)
}

/// Save a single product
#[utoipa::path(
    post,
    path = "/addProduct",
    tag = "Products",
    request_body = Product,
    responses(
        (status = 200, description = "Product saved", body = Product),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn add_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    JsonBody(product): JsonBody<Product>,
) -> ProductResult<Json<Product>> {
    let product = service.save(product).await?;
    Ok(Json(product))
}

/// Save a batch of products
#[utoipa::path(
    post,
    path = "/addProducts",
    tag = "Products",
    request_body = Vec<Product>,
    responses(
        (status = 200, description = "Products saved, in request order", body = Vec<Product>),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn add_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    JsonBody(products): JsonBody<Vec<Product>>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.save_all(products).await?;
    Ok(Json(products))
}

/// List every product
#[utoipa::path(
    get,
    path = "/products",
    tag = "Products",
    responses(
        (status = 200, description = "All products ordered by id", body = Vec<Product>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn find_all_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.list_all().await?;
    Ok(Json(products))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/productById/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn find_product_by_id<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
) -> ProductResult<Json<Product>> {
    let product = service.get_by_id(id).await?;
    Ok(Json(product))
}

/// Get a product by exact name
#[utoipa::path(
    get,
    path = "/product/{name}",
    tag = "Products",
    params(
        ("name" = String, Path, description = "Exact, case-sensitive product name")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn find_product_by_name<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(name): Path<String>,
) -> ProductResult<Json<Product>> {
    let product = service.get_by_name(&name).await?;
    Ok(Json(product))
}

/// Update an existing product
///
/// The body's `id` selects the product. A non-empty `name` replaces the
/// stored one; `quantity` and `price` are always replaced.
#[utoipa::path(
    put,
    path = "/update",
    tag = "Products",
    request_body = Product,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    JsonBody(product): JsonBody<Product>,
) -> ProductResult<Json<Product>> {
    let product = service.update(product).await?;
    Ok(Json(product))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/delete/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Confirmation message, e.g. \"product removed !! 1\"", body = String, content_type = "text/plain"),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
) -> ProductResult<String> {
    service.delete_by_id(id).await
}

/// Download the catalog as CSV
#[utoipa::path(
    get,
    path = "/products/csv",
    tag = "Products",
    responses(
        (status = 200, description = "products.csv attachment", body = String, content_type = "text/csv"),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn export_csv<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<impl IntoResponse> {
    let csv = service.generate_csv().await?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv"),
            (header::CONTENT_DISPOSITION, "attachment; filename=products.csv"),
        ],
        csv,
    ))
}
