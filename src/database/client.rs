use crate::config::get_config;
use crate::error::Result;
use bson::doc;
use mongodb::{Client, Database};
use tracing::info;

/// Connect to MongoDB and verify the server is reachable.
///
/// The driver's own pooling and reconnect defaults are left untouched.
/// Short selection/connect timeouts are appended so an unreachable server
/// fails startup promptly instead of hanging.
pub async fn connect() -> Result<Database> {
    let config = get_config();
    let uri = with_timeouts(&config.mongodb_uri);

    info!("Connecting to MongoDB at {}", config.mongodb_uri);
    let client = Client::with_uri_str(&uri).await?;

    let database = client.database(&config.mongodb_database);
    database.run_command(doc! { "ping": 1 }).await?;
    info!("Connected to MongoDB database '{}'", config.mongodb_database);

    Ok(database)
}

fn with_timeouts(uri: &str) -> String {
    if uri.contains('?') {
        format!("{}&serverSelectionTimeoutMS=3000&connectTimeoutMS=3000", uri)
    } else {
        format!("{}?serverSelectionTimeoutMS=3000&connectTimeoutMS=3000", uri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeouts_are_appended_to_bare_and_parameterized_uris() {
        assert_eq!(
            with_timeouts("mongodb://localhost:27017"),
            "mongodb://localhost:27017?serverSelectionTimeoutMS=3000&connectTimeoutMS=3000"
        );
        assert_eq!(
            with_timeouts("mongodb://localhost:27017/?replicaSet=rs0"),
            "mongodb://localhost:27017/?replicaSet=rs0&serverSelectionTimeoutMS=3000&connectTimeoutMS=3000"
        );
    }
}
