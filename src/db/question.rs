use color_eyre::Result;

use crate::models::{NewQuestion, Question};

use super::Db;

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

impl Db {
    /// The whole catalog in ascending id order, the order every listing and
    /// quiz operation works over.
    pub async fn questions(&self) -> Result<Vec<Question>> {
        let conn = self.connect()?;
        super::fetch_all(
            &conn,
            &format!("SELECT {QUESTION_COLUMNS} FROM questions ORDER BY id"),
            (),
        )
        .await
    }

    pub async fn questions_in_category(&self, category_id: i64) -> Result<Vec<Question>> {
        let conn = self.connect()?;
        super::fetch_all(
            &conn,
            &format!("SELECT {QUESTION_COLUMNS} FROM questions WHERE category = ?1 ORDER BY id"),
            libsql::params![category_id],
        )
        .await
    }

    pub async fn get_question(&self, question_id: i64) -> Result<Option<Question>> {
        let conn = self.connect()?;
        super::fetch_optional(
            &conn,
            &format!("SELECT {QUESTION_COLUMNS} FROM questions WHERE id = ?1"),
            libsql::params![question_id],
        )
        .await
    }

    /// Returns the id of the newly inserted question.
    pub async fn insert_question(&self, new: &NewQuestion) -> Result<i64> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO questions (question, answer, category, difficulty) VALUES (?1, ?2, ?3, ?4)",
            libsql::params![
                new.question.as_str(),
                new.answer.as_str(),
                new.category,
                new.difficulty
            ],
        )
        .await?;

        let question_id = conn.last_insert_rowid();
        tracing::info!("created question {question_id} in category {}", new.category);
        Ok(question_id)
    }

    /// Returns whether a row was actually removed.
    pub async fn delete_question(&self, question_id: i64) -> Result<bool> {
        let conn = self.connect()?;
        let affected = conn
            .execute(
                "DELETE FROM questions WHERE id = ?1",
                libsql::params![question_id],
            )
            .await?;

        if affected > 0 {
            tracing::info!("deleted question {question_id}");
        }
        Ok(affected > 0)
    }
}
