//! HTTP server — mounts the GraphQL schema and the GraphiQL explorer.

use anyhow::{Context as _, Result};
use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::client::{Credential, DevOpsApi, HttpTransport};
use crate::config::Config;
use crate::graphql::{build_schema, DevOpsSchema};

/// Path the schema and the explorer are served on.
pub const GRAPHQL_PATH: &str = "/graphql";

/// Build the router: `POST /graphql` executes, `GET /graphql` serves GraphiQL.
pub fn router(schema: DevOpsSchema) -> Router {
    Router::new()
        .route(GRAPHQL_PATH, get(graphiql).post(graphql_handler))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(schema)
}

async fn graphql_handler(State(schema): State<DevOpsSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

async fn health() -> &'static str {
    "ok"
}

/// Wire the upstream client from `config` into a schema.
pub fn schema_from_config(config: &Config) -> Result<DevOpsSchema> {
    let credential = Credential::from_token(&config.token)?;
    let transport = HttpTransport::new(
        &config.organization_url,
        config.api_version.clone(),
        &credential,
        config.upstream_timeout(),
    )
    .context("failed to set up upstream client")?;

    info!(
        organization = %transport.base_url(),
        api_version = %config.api_version,
        "upstream configured"
    );

    Ok(build_schema(DevOpsApi::new(Arc::new(transport))))
}

/// Bind `config.listen` and serve until Ctrl-C.
pub async fn serve(config: Config) -> Result<()> {
    let schema = schema_from_config(&config)?;

    let listener = tokio::net::TcpListener::bind(config.listen)
        .await
        .with_context(|| format!("failed to bind {}", config.listen))?;
    info!(addr = %config.listen, path = GRAPHQL_PATH, "GraphQL server listening");

    axum::serve(listener, router(schema))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server shut down");
    Ok(())
}

async fn shutdown_signal() {
    // If the handler cannot be installed, run until killed.
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}
