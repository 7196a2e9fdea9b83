use color_eyre::Result;

use crate::models::Category;

use super::Db;

impl Db {
    pub async fn categories(&self) -> Result<Vec<Category>> {
        let conn = self.connect()?;
        super::fetch_all(&conn, "SELECT id, type FROM categories ORDER BY id", ()).await
    }

    pub async fn category_exists(&self, category_id: i64) -> Result<bool> {
        let conn = self.connect()?;
        let exists = super::fetch_scalar(
            &conn,
            "SELECT EXISTS(SELECT 1 FROM categories WHERE id = ?1)",
            libsql::params![category_id],
        )
        .await?;
        Ok(exists != 0)
    }
}
