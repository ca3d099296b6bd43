use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Durable selection file. `None` means no durable storage is available,
    /// and the selection store degrades to no-ops.
    pub storage_path: Option<PathBuf>,
    /// Path that filter query strings are appended to when no explicit base
    /// is given (the storefront's "current path").
    pub base_url: String,
    pub matching_kits_path: String,
    pub contact_path: String,
}
