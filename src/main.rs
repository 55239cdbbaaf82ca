use axum::routing::get;
use axum::Router;
use borrow_alerts::config::AppConfig;
use borrow_alerts::repo::product_events_repo::ProductEventsRepo;
use borrow_alerts::repo::user_events_repo::UserEventsRepo;
use borrow_alerts::resolve::borrow_state::BorrowStateResolver;
use borrow_alerts::resolve::payment_methods::PaymentMethodResolver;
use borrow_alerts::service::report_service::ReportService;
use borrow_alerts::AppState;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env();

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&cfg.database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    let report_service = ReportService {
        borrows: BorrowStateResolver {
            repo: ProductEventsRepo { pool: pool.clone() },
        },
        payments: PaymentMethodResolver {
            repo: UserEventsRepo { pool },
        },
    };

    let state = AppState { report_service };

    let app = Router::new()
        .route("/health", get(borrow_alerts::http::handlers::ops::health))
        .route(
            "/products/lost",
            get(borrow_alerts::http::handlers::products::lost_products),
        )
        .route(
            "/products/expiring-payments",
            get(borrow_alerts::http::handlers::products::expiring_payments),
        )
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!("listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
