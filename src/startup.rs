use tracing_subscriber::EnvFilter;

use crate::{
    config::Config,
    error::Error,
    graph::{GraphClient, GraphConfig},
};

/// Build and configure the Graph client with the application's credentials
pub fn build_graph_client(config: &Config) -> Result<GraphClient, Error> {
    let mut graph_config = GraphConfig::builder();
    if let Some(graph_url) = &config.graph_url {
        graph_config = graph_config.graph_url(graph_url);
    }
    if let Some(version) = &config.graph_version {
        graph_config = graph_config.version(version);
    }
    if let Some(timeout) = config.request_timeout {
        graph_config = graph_config.timeout(timeout);
    }

    let graph_client = GraphClient::builder()
        .config(graph_config.build()?)
        .access_token(&config.access_token)
        .build()?;

    Ok(graph_client)
}

/// Install the stderr log subscriber, filtered by `RUST_LOG` (default `info`)
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
