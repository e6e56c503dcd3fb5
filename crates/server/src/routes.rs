//! Route table and request handlers.
//!
//! Handlers only translate: path and query into a [`Command`], the command
//! onto the blocking pool, the result into a response. No handler touches a
//! file or a record directly.

use axum::extract::{FromRequest, FromRequestParts, State};
use axum::http::StatusCode;
use axum::middleware::map_response;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use flatstore_executor::{Command, Executor, OrderFilter, ProductFilter, ProductSearch, UserFilter};
use serde_json::Value;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::NormalizePath;
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::response::{json_method_not_allowed, output_response, ApiError};

/// Query string extractor whose rejection is an [`ApiError`]
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

/// Path parameter extractor whose rejection is an [`ApiError`]
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

/// JSON body extractor whose rejection is an [`ApiError`]
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    executor: Executor,
}

impl AppState {
    /// State over an executor
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }

    /// Run `cmd` on the blocking pool and render the result.
    pub async fn run(&self, cmd: Command) -> Response {
        let failure = cmd.failure_message();
        let executor = self.executor.clone();
        match tokio::task::spawn_blocking(move || executor.execute(cmd)).await {
            Ok(Ok(output)) => output_response(output),
            Ok(Err(e)) => ApiError::from_command_error(e, failure).into_response(),
            Err(e) => {
                error!(target: "flatstore::server", error = %e, "Handler task failed");
                ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, failure).into_response()
            }
        }
    }
}

/// Normalize a mount prefix: leading slash, no trailing slash, `""` for root
pub fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

/// Build the application router, with every route mounted under `prefix`.
///
/// A trailing slash is ignored, so `/api/products/` is `/api/products`.
pub fn router(executor: Executor, prefix: &str) -> Router {
    let api = Router::new()
        // Products
        .route("/products", get(list_products).post(create_product))
        .route("/products/search", get(search_products))
        .route("/products/category/:category_id", get(products_by_category))
        .route(
            "/products/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
        // Categories
        .route("/categories", get(list_categories))
        .route("/categories/:id", get(get_category))
        // Users
        .route("/users", get(list_users).post(create_user))
        .route("/users/username/:username", get(get_user_by_username))
        .route("/users/email/:email", get(get_user_by_email))
        .route(
            "/users/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
        // Orders
        .route("/orders", get(list_orders))
        .route("/orders/:id", get(get_order))
        // Sales
        .route("/sales", get(list_sales));

    let prefix = normalize_prefix(prefix);
    let app = if prefix.is_empty() {
        api
    } else {
        Router::new().nest(&prefix, api)
    };

    let app = app
        .fallback(not_found)
        .with_state(AppState::new(executor))
        .layer(map_response(json_method_not_allowed));

    // Routing happens before `Router::layer` middleware runs, so the path is
    // normalized by a service in front of the whole router.
    Router::new()
        .fallback_service(NormalizePath::trim_trailing_slash(app))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn not_found() -> ApiError {
    ApiError::new(StatusCode::NOT_FOUND, "Not found")
}

// =============================================================================
// Products
// =============================================================================

async fn list_products(
    State(state): State<AppState>,
    ApiQuery(filter): ApiQuery<ProductFilter>,
) -> Response {
    state.run(Command::ProductList { filter }).await
}

async fn search_products(
    State(state): State<AppState>,
    ApiQuery(search): ApiQuery<ProductSearch>,
) -> Response {
    state.run(Command::ProductSearch { search }).await
}

async fn products_by_category(
    State(state): State<AppState>,
    ApiPath(category_id): ApiPath<String>,
) -> Response {
    state.run(Command::ProductsByCategory { category_id }).await
}

async fn get_product(State(state): State<AppState>, ApiPath(id): ApiPath<String>) -> Response {
    state.run(Command::ProductGet { id }).await
}

async fn create_product(State(state): State<AppState>, ApiJson(body): ApiJson<Value>) -> Response {
    state.run(Command::ProductCreate { body }).await
}

async fn update_product(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
    ApiJson(body): ApiJson<Value>,
) -> Response {
    state.run(Command::ProductUpdate { id, body }).await
}

async fn delete_product(State(state): State<AppState>, ApiPath(id): ApiPath<String>) -> Response {
    state.run(Command::ProductDelete { id }).await
}

// =============================================================================
// Categories
// =============================================================================

async fn list_categories(State(state): State<AppState>) -> Response {
    state.run(Command::CategoryList).await
}

async fn get_category(State(state): State<AppState>, ApiPath(id): ApiPath<String>) -> Response {
    state.run(Command::CategoryGet { id }).await
}

// =============================================================================
// Users
// =============================================================================

async fn list_users(
    State(state): State<AppState>,
    ApiQuery(filter): ApiQuery<UserFilter>,
) -> Response {
    state.run(Command::UserList { filter }).await
}

async fn get_user(State(state): State<AppState>, ApiPath(id): ApiPath<String>) -> Response {
    state.run(Command::UserGet { id }).await
}

async fn get_user_by_username(
    State(state): State<AppState>,
    ApiPath(username): ApiPath<String>,
) -> Response {
    state.run(Command::UserGetByUsername { username }).await
}

async fn get_user_by_email(
    State(state): State<AppState>,
    ApiPath(email): ApiPath<String>,
) -> Response {
    state.run(Command::UserGetByEmail { email }).await
}

async fn create_user(State(state): State<AppState>, ApiJson(body): ApiJson<Value>) -> Response {
    state.run(Command::UserCreate { body }).await
}

async fn update_user(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
    ApiJson(body): ApiJson<Value>,
) -> Response {
    state.run(Command::UserUpdate { id, body }).await
}

async fn delete_user(State(state): State<AppState>, ApiPath(id): ApiPath<String>) -> Response {
    state.run(Command::UserDelete { id }).await
}

// =============================================================================
// Orders and sales
// =============================================================================

async fn list_orders(
    State(state): State<AppState>,
    ApiQuery(filter): ApiQuery<OrderFilter>,
) -> Response {
    state.run(Command::OrderList { filter }).await
}

async fn get_order(State(state): State<AppState>, ApiPath(id): ApiPath<String>) -> Response {
    state.run(Command::OrderGet { id }).await
}

async fn list_sales(State(state): State<AppState>) -> Response {
    state.run(Command::SaleList).await
}
