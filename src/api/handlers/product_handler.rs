//! Product CRUD handlers. All routes sit behind the JWT middleware.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Extension, Router,
};
use uuid::Uuid;

use crate::api::extractors::AppJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::config::PRODUCTS_PATH;
use crate::domain::ProductRecord;
use crate::errors::{AppError, AppResult, OptionExt};
use crate::types::{Created, NoContent};

/// Create product routes
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}

/// List all products
#[utoipa::path(
    get,
    path = "/products",
    tag = "Products",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All products", body = Vec<ProductRecord>),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<Vec<ProductRecord>>> {
    let products = state.product_service.get_all_products().await?;
    Ok(Json(products))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "Products",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product found", body = ProductRecord),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ProductRecord>> {
    let product = state
        .product_service
        .get_product_by_id(id)
        .await?
        .ok_or_not_found()?;

    Ok(Json(product))
}

/// Create a new product. Any `id` in the body is ignored.
#[utoipa::path(
    post,
    path = "/products",
    tag = "Products",
    security(("bearer_auth" = [])),
    request_body = ProductRecord,
    responses(
        (status = 201, description = "Product created", body = ProductRecord),
        (status = 400, description = "Malformed request body"),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    AppJson(payload): AppJson<ProductRecord>,
) -> AppResult<Created<ProductRecord>> {
    let created = state.product_service.create_product(payload).await?;
    tracing::debug!(username = %user.username, product_id = %created.id, "Product created via API");

    Ok(Created::new(
        format!("{}/{}", PRODUCTS_PATH, created.id),
        created,
    ))
}

/// Update the price of an existing product
#[utoipa::path(
    put,
    path = "/products/{id}",
    tag = "Products",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Product ID")),
    request_body = ProductRecord,
    responses(
        (status = 204, description = "Product updated"),
        (status = 400, description = "Path and body IDs differ"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
    AppJson(payload): AppJson<ProductRecord>,
) -> AppResult<NoContent> {
    if id != payload.id {
        return Err(AppError::bad_request("Path id does not match body id"));
    }

    state.product_service.update_product(payload).await?;
    tracing::debug!(username = %user.username, product_id = %id, "Product updated via API");

    Ok(NoContent)
}

/// Delete a product. Succeeds whether or not it existed.
#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "Products",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> AppResult<NoContent> {
    state.product_service.delete_product(id).await?;
    tracing::debug!(username = %user.username, product_id = %id, "Product deleted via API");

    Ok(NoContent)
}
