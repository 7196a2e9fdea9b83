// Database module - provides data access layer

use std::sync::Arc;

use color_eyre::{eyre::OptionExt, Result};
use serde::de::DeserializeOwned;

mod category;
mod question;
mod schema;

// Main database handle
#[derive(Clone)]
pub struct Db {
    db: Arc<libsql::Database>,
}

impl Db {
    pub async fn new(url: String, auth_token: String) -> Result<Self> {
        let db = if url.starts_with("file:") {
            // Local SQLite file
            let path = url.strip_prefix("file:").unwrap_or(&url);
            libsql::Builder::new_local(path).build().await?
        } else {
            // Remote Turso database
            libsql::Builder::new_remote(url, auth_token).build().await?
        };

        let conn = db.connect()?;

        // Verify connection
        let one = conn
            .query("SELECT 1", ())
            .await?
            .next()
            .await?
            .ok_or_eyre("connection check failed")?
            .get::<i32>(0)?;
        assert_eq!(one, 1);

        // Initialize schema and seed reference data
        schema::create_schema(&conn).await?;

        tracing::info!("database connection has been verified");

        Ok(Self { db: Arc::new(db) })
    }

    pub(crate) fn connect(&self) -> Result<libsql::Connection> {
        Ok(self.db.connect()?)
    }
}

/// Run a query and deserialize every row into `T` via `libsql::de::from_row`.
pub(crate) async fn fetch_all<T: DeserializeOwned>(
    conn: &libsql::Connection,
    sql: &str,
    params: impl libsql::params::IntoParams,
) -> Result<Vec<T>> {
    let mut rows = conn.query(sql, params).await?;
    let mut out = Vec::new();
    while let Some(row) = rows.next().await? {
        out.push(libsql::de::from_row::<T>(&row)?);
    }
    Ok(out)
}

/// Run a query expected to return at most one row.
pub(crate) async fn fetch_optional<T: DeserializeOwned>(
    conn: &libsql::Connection,
    sql: &str,
    params: impl libsql::params::IntoParams,
) -> Result<Option<T>> {
    match conn.query(sql, params).await?.next().await? {
        Some(row) => Ok(Some(libsql::de::from_row::<T>(&row)?)),
        None => Ok(None),
    }
}

/// Fetch a single scalar from the first column of the first row.
pub(crate) async fn fetch_scalar(
    conn: &libsql::Connection,
    sql: &str,
    params: impl libsql::params::IntoParams,
) -> Result<i64> {
    let row = conn
        .query(sql, params)
        .await?
        .next()
        .await?
        .ok_or_eyre("expected a row but got none")?;
    Ok(row.get::<i64>(0)?)
}
