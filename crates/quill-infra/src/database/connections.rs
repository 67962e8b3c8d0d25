use std::time::Duration;

use sea_orm::sea_query::TableCreateStatement;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn, DbErr, Schema};

use super::entity::{comment, post, user};

/// Configuration for the database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            // mode=rwc: create the database file if it does not exist yet
            url: "sqlite://quill.db?mode=rwc".to_string(),
            max_connections: 5,
            min_connections: 1,
        }
    }
}

/// Connection manager for the blog database.
///
/// Owns the pooled SQLite connection and the startup schema lifecycle:
/// `init` connects and creates any missing tables from the entity
/// definitions, so a fresh database file is usable immediately.
pub struct DatabaseHandle {
    pub conn: DbConn,
}

impl DatabaseHandle {
    /// Connect and ensure the schema exists.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, DbErr> {
        tracing::info!(url = %config.url, "Initializing database connection...");

        let opts = ConnectOptions::new(&config.url)
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(true)
            .to_owned();

        let conn = Database::connect(opts).await?;
        Self::create_schema(&conn).await?;

        tracing::info!(
            "Database connected (pool: {})",
            config.max_connections
        );

        Ok(Self { conn })
    }

    /// Create any missing tables from the entity definitions.
    ///
    /// Parents before children: the posts and comments tables carry
    /// cascading foreign keys into users (and posts).
    pub async fn create_schema(conn: &DbConn) -> Result<(), DbErr> {
        let backend = conn.get_database_backend();
        let schema = Schema::new(backend);

        let mut statements: Vec<TableCreateStatement> = vec![
            schema.create_table_from_entity(user::Entity),
            schema.create_table_from_entity(post::Entity),
            schema.create_table_from_entity(comment::Entity),
        ];

        for stmt in &mut statements {
            stmt.if_not_exists();
            conn.execute(&*stmt).await?;
        }

        Ok(())
    }

    /// Close the pooled connection.
    pub async fn close(self) -> Result<(), DbErr> {
        self.conn.close().await
    }
}
