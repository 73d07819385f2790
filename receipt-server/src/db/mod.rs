//! Database Module
//!
//! Handles the SurrealDB connection (remote WebSocket engine)

pub mod models;
pub mod repository;

use std::time::Duration;

use surrealdb::Surreal;
use surrealdb::engine::remote::ws::{Client, Ws};
use surrealdb::opt::auth::Root;

use crate::core::Config;
use crate::db::repository::{RepoError, RepoResult};

/// Database service, owns the SurrealDB connection handle
///
/// The handle multiplexes all requests over a single WebSocket connection
/// and is safe to share across handlers via cheap clones.
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Client>,
}

impl DbService {
    /// Connect to SurrealDB and select the service namespace/database
    ///
    /// The connect itself is bounded by the configured store timeout so a
    /// dead storage address fails startup instead of hanging it.
    pub async fn connect(config: &Config) -> RepoResult<Self> {
        let timeout = Duration::from_millis(config.store_timeout_ms);

        let db = tokio::time::timeout(timeout, Surreal::new::<Ws>(config.surreal_addr.as_str()))
            .await
            .map_err(|_| RepoError::Timeout(config.store_timeout_ms))?
            .map_err(|e| {
                RepoError::Database(format!(
                    "Failed to connect to {}: {}",
                    config.surreal_addr, e
                ))
            })?;

        db.signin(Root {
            username: &config.surreal_user,
            password: &config.surreal_pass,
        })
        .await
        .map_err(|e| RepoError::Database(format!("Authentication failed: {}", e)))?;

        db.use_ns(config.surreal_ns.as_str())
            .use_db(config.surreal_db.as_str())
            .await
            .map_err(|e| RepoError::Database(format!("Failed to select namespace: {}", e)))?;

        tracing::info!(
            addr = %config.surreal_addr,
            ns = %config.surreal_ns,
            db = %config.surreal_db,
            "Connected to SurrealDB"
        );

        Ok(Self { db })
    }
}
