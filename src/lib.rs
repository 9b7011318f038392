pub mod application;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod schema;

#[cfg(test)]
pub(crate) mod testing;

use actix_web::middleware::{Logger, NormalizePath};
use actix_web::{web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use application::order_service::OrderService;
use infrastructure::order_repo::DieselOrderRepository;

pub use db::{create_pool, DbPool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::orders::list_orders,
        handlers::orders::get_order,
        handlers::orders::create_order,
        handlers::orders::update_status,
        handlers::orders::delete_order,
        handlers::orders::list_user_orders,
        handlers::orders::total_sales,
        handlers::orders::count_orders,
    ),
    components(schemas(
        handlers::orders::CreateOrderRequest,
        handlers::orders::UpdateStatusRequest,
        handlers::orders::OrderListItem,
        handlers::orders::OrderDetailResponse,
        handlers::orders::UserOrderResponse,
        handlers::orders::UserRefResponse,
        handlers::orders::ProductRefResponse,
        handlers::orders::ProductResponse,
        handlers::orders::ProductWithCategoryResponse,
        handlers::orders::CategoryResponse,
    )),
    tags((name = "orders", description = "Order management endpoints"))
)]
pub struct ApiDoc;

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) {
    let mut conn = pool.get().expect("Failed to get DB connection for migrations");
    conn.run_pending_migrations(MIGRATIONS)
        .expect("Failed to run database migrations");
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    pool: DbPool,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    Ok(HttpServer::new(move || {
        let service = OrderService::new(DieselOrderRepository::new(pool.clone()));
        App::new()
            .app_data(web::Data::new(service))
            .wrap(Logger::default())
            // `GET /orders/` and `GET /orders` hit the same route.
            .wrap(NormalizePath::trim())
            .service(handlers::orders::routes())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}
