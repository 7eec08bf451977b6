//! Single-route web front end for the league API.
//!
//! Serves a static landing page at `/` and a liveness probe at `/health`.
//! The two token environment variables are read once at startup into the
//! shared [`AppState`]; neither is validated beyond presence.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use apa_async::graphql::REFRESH_TOKEN_ENV;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable holding a pre-existing access token.
const ACCESS_TOKEN_ENV: &str = "APA_ACCESS_TOKEN";

/// Static landing page, served as-is.
const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");

/// Shared application state.
///
/// Passed to handlers via axum's `State` extractor. Holds the process-wide
/// configuration captured from the environment at startup.
#[derive(Clone)]
struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    refresh_token: Option<String>,
    access_token: Option<String>,
}

impl AppState {
    fn new(refresh_token: Option<String>, access_token: Option<String>) -> Self {
        AppState {
            inner: Arc::new(AppStateInner {
                refresh_token,
                access_token,
            }),
        }
    }

    /// Captures both tokens from the environment.
    fn from_env() -> Self {
        Self::new(env_token(REFRESH_TOKEN_ENV), env_token(ACCESS_TOKEN_ENV))
    }

    fn refresh_token(&self) -> Option<&str> {
        self.inner.refresh_token.as_deref()
    }

    fn access_token(&self) -> Option<&str> {
        self.inner.access_token.as_deref()
    }
}

fn env_token(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// Builds the axum Router with all endpoints.
fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Serves the static landing page.
async fn index_handler(State(state): State<AppState>) -> Html<&'static str> {
    tracing::debug!(
        refresh_token_present = state.refresh_token().is_some(),
        access_token_present = state.access_token().is_some(),
        "serving index"
    );
    Html(INDEX_TEMPLATE)
}

/// Liveness probe for load balancers and orchestration systems.
async fn health_handler() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "league_web=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = AppState::from_env();
    if state.refresh_token().is_none() {
        tracing::warn!("{REFRESH_TOKEN_ENV} is not set; token exchange will be unavailable");
    }

    let app = build_router(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], 3000));
    tracing::info!("listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("binding listener")?;
    axum::serve(listener, app).await.context("serving")?;
    Ok(())
}
