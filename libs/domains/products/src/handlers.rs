//! HTTP handlers for Products API

use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{delete, get, post, put},
    Json, Router,
};
use axum_helpers::{
    require_api_key, ApiKeyConfig, ErrorResponse, MessageResponse, PathParam, QueryParams,
    ValidatedJson,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{Product, ProductInput, ProductQuery, SearchQuery};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        search_products,
        product_stats,
        get_product,
        update_product,
        delete_product,
    ),
    components(schemas(Product, ProductInput, ErrorResponse, MessageResponse)),
    tags(
        (name = "Products", description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router with all HTTP endpoints
///
/// Mutating routes sit behind the API-key check. Body validation runs after
/// it, inside the handler's extractor; the JSON syntax check that precedes
/// authentication is applied by the application around this router.
pub fn router<R: ProductRepository + 'static>(
    service: ProductService<R>,
    api_key: ApiKeyConfig,
) -> Router {
    let shared_service = Arc::new(service);
    let protected = || middleware::from_fn_with_state(api_key.clone(), require_api_key);

    Router::new()
        .route(
            "/",
            get(list_products).merge(post(create_product).route_layer(protected())),
        )
        .route("/search", get(search_products))
        .route("/stats", get(product_stats))
        .route(
            "/{id}",
            get(get_product)
                .merge(put(update_product).route_layer(protected()))
                .merge(delete(delete_product).route_layer(protected())),
        )
        .with_state(shared_service)
}

/// List products with optional category filter and pagination
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    params(ProductQuery),
    responses(
        (status = 200, description = "One page of products", body = Vec<Product>),
        (status = 500, description = "Internal error", body = ErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    QueryParams(query): QueryParams<ProductQuery>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.list_products(&query).await?;
    Ok(Json(products))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = ProductInput,
    params(
        ("x-api-key" = String, Header, description = "Shared API key")
    ),
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, description = "Malformed or invalid payload", body = ErrorResponse),
        (status = 401, description = "Missing or invalid API key", body = MessageResponse),
        (status = 500, description = "Internal error", body = ErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(input): ValidatedJson<ProductInput>,
) -> ProductResult<impl IntoResponse> {
    let product = service.create_product(input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Search products by name
#[utoipa::path(
    get,
    path = "/search",
    tag = "Products",
    params(SearchQuery),
    responses(
        (status = 200, description = "Products whose name contains the query", body = Vec<Product>),
        (status = 400, description = "Missing search query", body = MessageResponse),
        (status = 500, description = "Internal error", body = ErrorResponse)
    )
)]
async fn search_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    QueryParams(query): QueryParams<SearchQuery>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.search_products(query.q.as_deref()).await?;
    Ok(Json(products))
}

/// Count products per category
#[utoipa::path(
    get,
    path = "/stats",
    tag = "Products",
    responses(
        (status = 200, description = "Category to product count", body = BTreeMap<String, usize>),
        (status = 500, description = "Internal error", body = ErrorResponse)
    )
)]
async fn product_stats<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<BTreeMap<String, usize>>> {
    let stats = service.stats().await?;
    Ok(Json(stats))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 500, description = "Internal error", body = ErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    PathParam(id): PathParam<String>,
) -> ProductResult<Json<Product>> {
    let product = service.get_product(&id).await?;
    Ok(Json(product))
}

/// Update a product
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID"),
        ("x-api-key" = String, Header, description = "Shared API key")
    ),
    request_body = ProductInput,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 400, description = "Malformed or invalid payload", body = ErrorResponse),
        (status = 401, description = "Missing or invalid API key", body = MessageResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 500, description = "Internal error", body = ErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    PathParam(id): PathParam<String>,
    ValidatedJson(input): ValidatedJson<ProductInput>,
) -> ProductResult<Json<Product>> {
    let product = service.update_product(&id, input).await?;
    Ok(Json(product))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID"),
        ("x-api-key" = String, Header, description = "Shared API key")
    ),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 401, description = "Missing or invalid API key", body = MessageResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 500, description = "Internal error", body = ErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    PathParam(id): PathParam<String>,
) -> ProductResult<StatusCode> {
    service.delete_product(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
