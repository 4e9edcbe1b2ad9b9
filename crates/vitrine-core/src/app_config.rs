#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogBackend {
    Memory,
    Postgres,
}

impl std::fmt::Display for CatalogBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogBackend::Memory => write!(f, "memory"),
            CatalogBackend::Postgres => write!(f, "postgres"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub backend: CatalogBackend,
    /// Required when `backend` is [`CatalogBackend::Postgres`].
    pub database_url: Option<String>,
    pub log_level: String,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub db_acquire_timeout_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("backend", &self.backend)
            .field(
                "database_url",
                &self.database_url.as_ref().map(|_| "[redacted]"),
            )
            .field("log_level", &self.log_level)
            .field("db_max_connections", &self.db_max_connections)
            .field("db_min_connections", &self.db_min_connections)
            .field("db_acquire_timeout_secs", &self.db_acquire_timeout_secs)
            .finish()
    }
}
