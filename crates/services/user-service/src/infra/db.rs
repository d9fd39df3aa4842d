//! Database connection and initialization.

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database as SeaDatabase, DatabaseConnection, DbErr, Statement,
};
use sea_orm_migration::MigratorTrait;

use common::DatabaseConfig;

use super::migrations::Migrator;

/// Database wrapper for connection management
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Initialize database connection and run migrations.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let db = Self::connect_without_migrations(config).await?;

        // Run pending migrations
        db.run_migrations().await?;
        tracing::info!("Database connected and migrations applied");

        Ok(db)
    }

    /// Connect without running migrations (for CLI commands).
    pub async fn connect_without_migrations(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let connection = SeaDatabase::connect(connect_options(config)).await?;
        Ok(Self { connection })
    }

    /// Get a clone of the database connection.
    pub fn get_connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Run pending migrations.
    pub async fn run_migrations(&self) -> Result<(), DbErr> {
        Migrator::up(&self.connection, None).await
    }

    /// Rollback the last migration.
    pub async fn rollback_migration(&self) -> Result<(), DbErr> {
        Migrator::down(&self.connection, Some(1)).await
    }

    /// Get migration status (list all migrations with applied status).
    pub async fn migration_status(&self) -> Result<Vec<(String, bool)>, DbErr> {
        use sea_orm::{EntityTrait, QueryOrder};
        use sea_orm_migration::seaql_migrations;

        // Make sure the bookkeeping table exists on a brand new database
        Migrator::install(&self.connection).await?;

        // Get applied migrations from database
        let applied: std::collections::HashSet<String> = seaql_migrations::Entity::find()
            .order_by_asc(seaql_migrations::Column::Version)
            .all(&self.connection)
            .await?
            .into_iter()
            .map(|m| m.version)
            .collect();

        // Map all defined migrations with their applied status
        let migrations: Vec<(String, bool)> = Migrator::migrations()
            .iter()
            .map(|m| {
                let name = m.name().to_string();
                let is_applied = applied.contains(&name);
                (name, is_applied)
            })
            .collect();

        Ok(migrations)
    }

    /// Reset database and run all migrations fresh.
    pub async fn fresh_migrations(&self) -> Result<(), DbErr> {
        Migrator::fresh(&self.connection).await
    }

    /// Check database connectivity by executing a simple query.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.connection
            .execute(Statement::from_string(
                self.connection.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;
        Ok(())
    }

    /// Close the connection pool (shutdown).
    pub async fn close(self) -> Result<(), DbErr> {
        self.connection.close().await
    }
}

fn connect_options(config: &DatabaseConfig) -> ConnectOptions {
    let mut options = ConnectOptions::new(config.url.clone());

    if config.is_in_memory() {
        // Every connection would otherwise see its own empty database
        options.max_connections(1).min_connections(1);
    } else {
        options
            .max_connections(config.max_connections)
            .min_connections(config.min_connections);
    }

    options
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn memory_db() -> Database {
        Database::connect(&DatabaseConfig::new("sqlite::memory:"))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_connect_applies_migrations() {
        let db = memory_db().await;
        let status = db.migration_status().await.unwrap();

        assert_eq!(
            status,
            vec![("m20221030_000001_create_user_table".to_string(), true)]
        );
        db.ping().await.unwrap();
    }

    #[tokio::test]
    async fn test_rollback_and_reapply() {
        let db = memory_db().await;

        db.rollback_migration().await.unwrap();
        let status = db.migration_status().await.unwrap();
        assert!(status.iter().all(|(_, applied)| !applied));

        db.run_migrations().await.unwrap();
        let status = db.migration_status().await.unwrap();
        assert!(status.iter().all(|(_, applied)| *applied));
    }

    #[tokio::test]
    async fn test_user_row_requires_creation_time() {
        let db = memory_db().await;
        let conn = db.get_connection();

        let missing = conn
            .execute(Statement::from_string(
                conn.get_database_backend(),
                "INSERT INTO \"user\" (name) VALUES ('Nobody')".to_string(),
            ))
            .await;
        assert!(missing.is_err());
    }

    #[tokio::test]
    async fn test_connect_without_migrations_leaves_schema_empty() {
        let db = Database::connect_without_migrations(&DatabaseConfig::new("sqlite::memory:"))
            .await
            .unwrap();
        let status = db.migration_status().await.unwrap();

        assert_eq!(status.len(), 1);
        assert!(!status[0].1);
    }
}
