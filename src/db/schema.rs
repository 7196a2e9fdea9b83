// Database schema initialization

use color_eyre::Result;

/// Reference categories loaded into an empty database so a fresh install is
/// usable immediately.
const SEED_CATEGORIES: &[&str] = &[
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

pub async fn create_schema(conn: &libsql::Connection) -> Result<()> {
    conn.execute(
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id INTEGER PRIMARY KEY,
            type TEXT NOT NULL
        )
        "#,
        (),
    )
    .await?;

    // No foreign key on category: a question whose category was removed
    // stays queryable and is simply not attributed to any category.
    conn.execute(
        r#"
        CREATE TABLE IF NOT EXISTS questions (
            id INTEGER PRIMARY KEY,
            question TEXT NOT NULL,
            answer TEXT NOT NULL,
            category INTEGER NOT NULL,
            difficulty INTEGER NOT NULL
        )
        "#,
        (),
    )
    .await?;

    seed_categories(conn).await?;

    Ok(())
}

async fn seed_categories(conn: &libsql::Connection) -> Result<()> {
    let count = super::fetch_scalar(conn, "SELECT COUNT(*) FROM categories", ()).await?;
    if count > 0 {
        return Ok(());
    }

    for kind in SEED_CATEGORIES {
        conn.execute(
            "INSERT INTO categories (type) VALUES (?1)",
            libsql::params![*kind],
        )
        .await?;
    }

    tracing::info!("seeded {} default categories", SEED_CATEGORIES.len());
    Ok(())
}
