use actix_web::{web, HttpResponse, Scope};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::order_service::OrderService;
use crate::domain::errors::DomainError;
use crate::domain::order::OrderView;
use crate::errors::AppError;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub address: String,
    pub city: String,
    pub country: String,
    pub phone: String,
    /// Free-form; defaults to "Pending" when omitted.
    pub status: Option<String>,
    pub total_price: f64,
    pub quantity: i32,
    /// User reference, by id.
    pub user: Uuid,
    /// Product references, by id, in the order the client wants them kept.
    pub products: Vec<Uuid>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStatusRequest {
    pub status: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserRefResponse {
    pub id: Uuid,
    pub name: String,
}

/// Product reference resolved to its name only (list route).
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductRefResponse {
    pub id: Uuid,
    pub name: String,
}

/// Fully resolved product (fetch-by-id route); the category stays a bare id.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub category_id: Uuid,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub id: Uuid,
    pub name: String,
    pub icon: Option<String>,
    pub color: Option<String>,
}

/// Product with its category nested (per-user listing route).
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductWithCategoryResponse {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub category: CategoryResponse,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderListItem {
    pub id: Uuid,
    pub address: String,
    pub city: String,
    pub country: String,
    pub phone: String,
    pub status: String,
    pub total_price: f64,
    pub quantity: i32,
    pub user: UserRefResponse,
    pub products: Vec<ProductRefResponse>,
    pub date_ordered: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetailResponse {
    pub id: Uuid,
    pub address: String,
    pub city: String,
    pub country: String,
    pub phone: String,
    pub status: String,
    pub total_price: f64,
    pub quantity: i32,
    pub user: UserRefResponse,
    pub products: Vec<ProductResponse>,
    pub date_ordered: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserOrderResponse {
    pub id: Uuid,
    pub address: String,
    pub city: String,
    pub country: String,
    pub phone: String,
    pub status: String,
    pub total_price: f64,
    pub quantity: i32,
    pub user: UserRefResponse,
    pub products: Vec<ProductWithCategoryResponse>,
    pub date_ordered: DateTime<Utc>,
}

impl From<OrderView> for OrderListItem {
    fn from(o: OrderView) -> Self {
        Self {
            id: o.id,
            address: o.address,
            city: o.city,
            country: o.country,
            phone: o.phone,
            status: o.status,
            total_price: o.total_price,
            quantity: o.quantity,
            user: UserRefResponse {
                id: o.user.id,
                name: o.user.name,
            },
            products: o
                .products
                .into_iter()
                .map(|p| ProductRefResponse {
                    id: p.id,
                    name: p.name,
                })
                .collect(),
            date_ordered: o.date_ordered,
        }
    }
}

impl From<OrderView> for OrderDetailResponse {
    fn from(o: OrderView) -> Self {
        Self {
            id: o.id,
            address: o.address,
            city: o.city,
            country: o.country,
            phone: o.phone,
            status: o.status,
            total_price: o.total_price,
            quantity: o.quantity,
            user: UserRefResponse {
                id: o.user.id,
                name: o.user.name,
            },
            products: o
                .products
                .into_iter()
                .map(|p| ProductResponse {
                    id: p.id,
                    name: p.name,
                    price: p.price,
                    category_id: p.category.id,
                })
                .collect(),
            date_ordered: o.date_ordered,
        }
    }
}

impl From<OrderView> for UserOrderResponse {
    fn from(o: OrderView) -> Self {
        Self {
            id: o.id,
            address: o.address,
            city: o.city,
            country: o.country,
            phone: o.phone,
            status: o.status,
            total_price: o.total_price,
            quantity: o.quantity,
            user: UserRefResponse {
                id: o.user.id,
                name: o.user.name,
            },
            products: o
                .products
                .into_iter()
                .map(|p| ProductWithCategoryResponse {
                    id: p.id,
                    name: p.name,
                    price: p.price,
                    category: CategoryResponse {
                        id: p.category.id,
                        name: p.category.name,
                        icon: p.category.icon,
                        color: p.category.color,
                    },
                })
                .collect(),
            date_ordered: o.date_ordered,
        }
    }
}

impl CreateOrderRequest {
    fn into_input(self) -> crate::domain::order::NewOrderInput {
        crate::domain::order::NewOrderInput {
            address: self.address,
            city: self.city,
            country: self.country,
            phone: self.phone,
            status: self.status,
            total_price: self.total_price,
            quantity: self.quantity,
            user_id: self.user,
            product_ids: self.products,
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

const UPDATE_FAILURE: &str = "the order cannot be updated!";

/// Runs a blocking repository call off the async executor.
async fn execute<T, F>(f: F) -> Result<T, DomainError>
where
    F: FnOnce() -> Result<T, DomainError> + Send + 'static,
    T: Send + 'static,
{
    web::block(f)
        .await
        .map_err(|e| DomainError::Internal(e.to_string()))?
}

/// GET /orders
///
/// All orders, newest first, with the user resolved to its name and each
/// product reference resolved to its name.
#[utoipa::path(
    get,
    path = "/orders",
    responses(
        (status = 200, description = "Orders wrapped in the success envelope", body = [OrderListItem]),
        (status = 500, description = "Store failure"),
    ),
    tag = "orders"
)]
pub async fn list_orders(svc: web::Data<OrderService>) -> Result<HttpResponse, AppError> {
    let svc = svc.into_inner();
    let orders = execute(move || svc.list_orders()).await?;

    let data: Vec<OrderListItem> = orders.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(json!({ "success": true, "data": data })))
}

/// GET /orders/{id}
///
/// One order with the user resolved to its name and products fully resolved.
#[utoipa::path(
    get,
    path = "/orders/{id}",
    params(("id" = Uuid, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order found", body = OrderDetailResponse),
        (status = 500, description = "Unknown id or store failure"),
    ),
    tag = "orders"
)]
pub async fn get_order(
    svc: web::Data<OrderService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let Ok(order_id) = Uuid::parse_str(&path) else {
        return Err(AppError::Internal(format!("invalid order id '{}'", path)));
    };

    let svc = svc.into_inner();
    let order = execute(move || svc.get_order(order_id)).await?;

    match order {
        Some(order) => Ok(HttpResponse::Ok()
            .json(json!({ "success": true, "data": OrderDetailResponse::from(order) }))),
        // Absent ids surface as 500, not 404; existing clients rely on it.
        None => Ok(HttpResponse::InternalServerError().json(json!({ "success": false }))),
    }
}

/// POST /orders
///
/// Inserts the order and its product reference list atomically.
#[utoipa::path(
    post,
    path = "/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Order created", body = OrderDetailResponse),
        (status = 400, description = "Rejected input or store failure"),
    ),
    tag = "orders"
)]
pub async fn create_order(
    svc: web::Data<OrderService>,
    body: web::Json<CreateOrderRequest>,
) -> Result<HttpResponse, AppError> {
    let input = body.into_inner().into_input();
    let svc = svc.into_inner();

    // Every creation failure is reported as a client error.
    let order = execute(move || svc.create_order(input))
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    Ok(HttpResponse::Ok().json(json!({ "success": true, "data": OrderDetailResponse::from(order) })))
}

/// PUT /orders/{id}
///
/// Overwrites only the `status` field. Any failure, not-found included,
/// collapses into one plain-text 400.
#[utoipa::path(
    put,
    path = "/orders/{id}",
    params(("id" = Uuid, Path, description = "Order id")),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Updated order", body = OrderDetailResponse),
        (status = 400, description = "Plain-text update failure"),
    ),
    tag = "orders"
)]
pub async fn update_status(
    svc: web::Data<OrderService>,
    path: web::Path<String>,
    body: web::Json<UpdateStatusRequest>,
) -> HttpResponse {
    let Ok(order_id) = Uuid::parse_str(&path) else {
        return update_failure();
    };

    let status = body.into_inner().status;
    let svc = svc.into_inner();
    match execute(move || svc.update_status(order_id, status)).await {
        Ok(order) => HttpResponse::Ok()
            .json(json!({ "success": true, "data": OrderDetailResponse::from(order) })),
        Err(_) => update_failure(),
    }
}

fn update_failure() -> HttpResponse {
    HttpResponse::BadRequest()
        .content_type("text/plain; charset=utf-8")
        .body(UPDATE_FAILURE)
}

/// DELETE /orders/{id}
#[utoipa::path(
    delete,
    path = "/orders/{id}",
    params(("id" = Uuid, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order deleted"),
        (status = 404, description = "No order with that id"),
        (status = 500, description = "Store failure"),
    ),
    tag = "orders"
)]
pub async fn delete_order(
    svc: web::Data<OrderService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let Ok(order_id) = Uuid::parse_str(&path) else {
        return Ok(HttpResponse::InternalServerError()
            .json(json!({ "success": false, "error": format!("invalid order id '{}'", path) })));
    };

    let svc = svc.into_inner();
    match execute(move || svc.delete_order(order_id)).await {
        Ok(()) => Ok(HttpResponse::Ok()
            .json(json!({ "success": true, "message": "the order is deleted!" }))),
        Err(DomainError::NotFound) => Err(AppError::NotFound),
        // Store failures carry an `error` key, not `message`.
        Err(e) => Ok(HttpResponse::InternalServerError()
            .json(json!({ "success": false, "error": e.to_string() }))),
    }
}

/// GET /orders/get/userorders/{userid}
///
/// All orders placed by one user, newest first, products resolved with their
/// category nested.
#[utoipa::path(
    get,
    path = "/orders/get/userorders/{userid}",
    params(("userid" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "The user's orders", body = [UserOrderResponse]),
        (status = 500, description = "Store failure"),
    ),
    tag = "orders"
)]
pub async fn list_user_orders(
    svc: web::Data<OrderService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let Ok(user_id) = Uuid::parse_str(&path) else {
        return Err(AppError::Internal(format!("invalid user id '{}'", path)));
    };

    let svc = svc.into_inner();
    let orders = execute(move || svc.list_user_orders(user_id)).await?;

    let data: Vec<UserOrderResponse> = orders.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(json!({ "success": true, "data": data })))
}

/// GET /orders/get/totalsales
///
/// Sum of `totalPrice` across every order; 0 when there are none. The
/// envelope key is the shipped misspelling "succes" on both branches.
#[utoipa::path(
    get,
    path = "/orders/get/totalsales",
    responses(
        (status = 200, description = "Aggregated sales total"),
        (status = 400, description = "Store failure"),
    ),
    tag = "orders"
)]
pub async fn total_sales(svc: web::Data<OrderService>) -> HttpResponse {
    let svc = svc.into_inner();
    match execute(move || svc.total_sales()).await {
        Ok(total) => {
            HttpResponse::Ok().json(json!({ "succes": true, "data": { "totalSales": total } }))
        }
        Err(e) => {
            HttpResponse::BadRequest().json(json!({ "succes": false, "message": e.to_string() }))
        }
    }
}

/// GET /orders/get/count
#[utoipa::path(
    get,
    path = "/orders/get/count",
    responses(
        (status = 200, description = "Number of orders in the collection"),
        (status = 500, description = "Store failure"),
    ),
    tag = "orders"
)]
pub async fn count_orders(svc: web::Data<OrderService>) -> Result<HttpResponse, AppError> {
    let svc = svc.into_inner();
    let count = execute(move || svc.count_orders()).await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true, "data": { "orderCount": count } })))
}

/// The /orders route table. Literal `/get/...` paths are registered ahead of
/// the `{id}` matcher so they are not swallowed by it.
pub fn routes() -> Scope {
    web::scope("/orders")
        .route("/get/totalsales", web::get().to(total_sales))
        .route("/get/count", web::get().to(count_orders))
        .route("/get/userorders/{userid}", web::get().to(list_user_orders))
        .route("", web::get().to(list_orders))
        .route("", web::post().to(create_order))
        .route("/{id}", web::get().to(get_order))
        .route("/{id}", web::put().to(update_status))
        .route("/{id}", web::delete().to(delete_order))
}
