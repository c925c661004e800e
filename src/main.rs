use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

mod config;
mod database;
mod error;
mod handlers;
mod query;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = crate::config::config();
    tracing::info!("Starting Recipe Book API in {:?} mode", config.environment);

    // Warm the pool. Failure is not fatal: /check-db-connection reports the
    // state and the next request retries the connection.
    database::Database::init().await;

    let app = app();

    // Allow tests or deployments to override port via env
    let port = std::env::var("RECIPEBOOK_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    println!("🚀 Recipe Book API server listening on http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server");

    database::Database::close().await;
}

fn app() -> Router {
    Router::new()
        .route("/", get(handlers::status::root))
        .route(
            "/check-db-connection",
            get(handlers::status::check_db_connection),
        )
        .merge(recipe_routes())
        .merge(customer_routes())
        .merge(ingredient_routes())
        .merge(report_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn recipe_routes() -> Router {
    use axum::routing::post;
    use handlers::recipes;

    Router::new()
        .route("/recipe", get(recipes::list))
        .route("/initiate-recipe", post(recipes::initiate))
        .route("/insert-recipe", post(recipes::insert))
        .route("/findAllRecipesTable", post(recipes::find_by_ingredients))
        .route("/recipes/projection", post(recipes::projection))
        .route("/recipes/avg-rating", post(recipes::above_avg_rating))
}

fn customer_routes() -> Router {
    use axum::routing::{post, put};
    use handlers::customers;

    Router::new()
        .route("/customer", get(customers::list))
        .route("/select-customer", post(customers::select))
        .route("/customer/:id", put(customers::update))
        .route("/customers-by-recipe", post(customers::by_recipe))
}

fn ingredient_routes() -> Router {
    use axum::routing::delete;
    use handlers::ingredients;

    Router::new()
        .route("/ingredients", get(ingredients::list))
        .route("/ingredient/:id", delete(ingredients::remove))
}

fn report_routes() -> Router {
    use axum::routing::post;

    Router::new()
        .route("/savedListCountTable", post(handlers::saved_lists::counts))
        .route("/top-cuisines", get(handlers::cuisines::top))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.expect("ctrl-c handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    println!("\nTerminating");
}
