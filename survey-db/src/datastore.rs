//! SurrealDB connection management
//!
//! One datastore connection per process. The connection string may carry
//! credentials, so it is never logged, in full or in part.

use std::env;
use std::sync::Arc;

use surrealdb::engine::any::{connect, Any};
use surrealdb::Surreal;
use tokio::sync::OnceCell;
use tracing::info;

use crate::error::{SurveyDbError, SurveyDbResult};

/// Environment variable holding the connection string (required)
pub const ENV_DB_URL: &str = "SURVEY_DB_URL";
/// Environment variable holding the database name (optional)
pub const ENV_DB_NAME: &str = "SURVEY_DB_NAME";

const DEFAULT_NAMESPACE: &str = "survey";
const DEFAULT_DATABASE: &str = "lovecode";

/// Datastore configuration
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Connection endpoint (e.g. `ws://localhost:8000`, `mem://`)
    pub endpoint: String,
    /// Namespace to select
    pub namespace: String,
    /// Database to select
    pub database: String,
}

impl DbConfig {
    /// Load configuration from the process environment
    ///
    /// A missing connection string is a fatal startup condition; the
    /// database name falls back to the default when unset.
    pub fn from_env() -> SurveyDbResult<Self> {
        let endpoint = env::var(ENV_DB_URL)
            .map_err(|_| SurveyDbError::Config(format!("{ENV_DB_URL} is not set")))?;
        let database = env::var(ENV_DB_NAME).unwrap_or_else(|_| DEFAULT_DATABASE.to_string());

        Ok(Self {
            endpoint,
            namespace: DEFAULT_NAMESPACE.to_string(),
            database,
        })
    }

    /// In-memory configuration (used by tests)
    pub fn in_memory() -> Self {
        Self {
            endpoint: "mem://".to_string(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            database: DEFAULT_DATABASE.to_string(),
        }
    }
}

/// A connected SurrealDB datastore
pub struct SurveyDatastore {
    db: Surreal<Any>,
}

impl SurveyDatastore {
    /// Connect to the datastore and select namespace and database
    pub async fn connect(config: &DbConfig) -> SurveyDbResult<Self> {
        let db = connect(config.endpoint.as_str()).await?;
        db.use_ns(config.namespace.as_str())
            .use_db(config.database.as_str())
            .await?;

        info!(
            namespace = %config.namespace,
            database = %config.database,
            "Connected to survey datastore"
        );

        Ok(Self { db })
    }

    /// Borrow the underlying client
    pub fn client(&self) -> &Surreal<Any> {
        &self.db
    }

    /// Whether the datastore responds
    pub async fn health(&self) -> bool {
        self.db.health().await.is_ok()
    }
}

/// Lazily-initialized shared datastore handle
///
/// Concurrent first callers converge on a single connect attempt and share
/// its outcome; later callers get the memoized connection. A failed attempt
/// leaves the cell empty, so the next request surfaces its own connect
/// error rather than a stale one.
pub struct SharedDatastore {
    cell: OnceCell<Arc<SurveyDatastore>>,
}

impl SharedDatastore {
    /// Create an empty handle
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::const_new(),
        }
    }

    /// Get the shared datastore, connecting on first use
    pub async fn get_or_connect(&self, config: &DbConfig) -> SurveyDbResult<Arc<SurveyDatastore>> {
        let datastore = self
            .cell
            .get_or_try_init(|| async { SurveyDatastore::connect(config).await.map(Arc::new) })
            .await?;

        Ok(Arc::clone(datastore))
    }
}

impl Default for SharedDatastore {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide datastore singleton used by the server binary
pub static DATASTORE: SharedDatastore = SharedDatastore::new();
