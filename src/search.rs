// src/search.rs
use elasticsearch::{
    auth::Credentials,
    http::transport::{SingleNodeConnectionPool, TransportBuilder},
    Elasticsearch,
};
use url::Url;

use crate::config::SearchConfig;

/// Builds the search-engine client from the configured node URL, attaching
/// basic-auth credentials when both username and password are present.
pub fn create_client(
    config: &SearchConfig,
) -> Result<Elasticsearch, Box<dyn std::error::Error + Send + Sync>> {
    let node = Url::parse(&config.node)?;
    let pool = SingleNodeConnectionPool::new(node);

    let mut builder = TransportBuilder::new(pool);
    if let (Some(username), Some(password)) = (&config.username, &config.password) {
        builder = builder.auth(Credentials::Basic(username.clone(), password.clone()));
    }

    Ok(Elasticsearch::new(builder.build()?))
}
