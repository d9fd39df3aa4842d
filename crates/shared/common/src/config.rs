//! Shared configuration structures.

use serde::{Deserialize, Serialize};

/// Default database connection URL: a SQLite file next to the binary,
/// created on first use.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://project.db?mode=rwc";

/// Database configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl DatabaseConfig {
    /// Configuration for the given URL with default pool sizes.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Whether the URL points at a private in-memory SQLite database.
    ///
    /// Each pooled connection to such a URL opens its own empty database.
    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: 10,
            min_connections: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_detection() {
        assert!(DatabaseConfig::new("sqlite::memory:").is_in_memory());
        assert!(DatabaseConfig::new("sqlite://file?mode=memory").is_in_memory());
        assert!(!DatabaseConfig::default().is_in_memory());
    }
}
