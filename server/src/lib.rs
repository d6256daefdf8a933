use std::{future::Future, sync::Arc};

use axum::{
    extract::{Path, Request, State},
    middleware::{self, Next},
    response::Response,
    routing::get,
    Json, Router,
};
use greeter_core::config::{GREETING_ROUTE, ROOT_ENDPOINT};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{debug, info};

pub mod templates;

pub use templates::{greeting_for, RandomPicker, TemplatePicker, GREETINGS};

pub const WELCOME_MESSAGE: &str =
    "Welcome to the Witty Greeter API! Try /greet/YourName to get a personalized greeting.";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Welcome {
    pub message: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Greeting {
    pub greeting: String,
}

#[derive(Clone)]
pub struct AppState {
    picker: Arc<dyn TemplatePicker>,
}

pub fn app() -> Router {
    app_with_picker(Arc::new(RandomPicker))
}

pub fn app_with_picker(picker: Arc<dyn TemplatePicker>) -> Router {
    Router::new()
        .route(ROOT_ENDPOINT, get(root))
        .route(GREETING_ROUTE, get(greet))
        .layer(middleware::from_fn(log_requests))
        .layer(CorsLayer::very_permissive())
        .with_state(AppState { picker })
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Serve until `shutdown` resolves, letting in-flight requests finish.
pub async fn run_until<F>(listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app())
        .with_graceful_shutdown(shutdown)
        .await
}

async fn log_requests(request: Request, next: Next) -> Response {
    info!(method = %request.method(), path = %request.uri().path(), "request");
    debug!(headers = ?request.headers(), "request headers");
    let response = next.run(request).await;
    info!(status = response.status().as_u16(), "response");
    response
}

async fn root() -> Json<Welcome> {
    debug!("root endpoint accessed");
    Json(Welcome {
        message: WELCOME_MESSAGE.to_string(),
    })
}

async fn greet(State(state): State<AppState>, Path(name): Path<String>) -> Json<Greeting> {
    info!(%name, "greeting requested");
    let greeting = greeting_for(state.picker.as_ref(), &name);
    debug!(%greeting, "generated greeting");
    Json(Greeting { greeting })
}
