use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use appointments::modules::appointments::adapters::outbound::appointment_store_in_memory::InMemoryAppointmentStore;
use appointments::shell::config::AppConfig;
use appointments::shell::graphql::{AppSchema, build_schema};
use appointments::shell::http::router;
use appointments::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;

    // Lives as long as the process; nothing is persisted.
    let store = Arc::new(InMemoryAppointmentStore::new());
    let state = AppState::in_memory(store);
    let schema = build_schema(state.clone());

    let app = router(state)
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http());

    tracing::info!("REST endpoint: http://{}/api/appointments/{{user_id}}", config.bind_addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> axum::response::Html<String> {
    use async_graphql::http::GraphiQLSource;
    axum::response::Html(GraphiQLSource::build().endpoint("/gql").finish())
}
