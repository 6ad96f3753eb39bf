use async_trait::async_trait;

use crate::{
    entities::message::{ContactMessage, ContactMessageInsert},
    errors::AppError,
    repositories::sqlx_repo::SqlxStore,
};

#[async_trait]
pub trait MessageRepository: Send {
    async fn insert_message(&mut self, msg: &ContactMessageInsert) -> Result<i64, AppError>;
    async fn list_recent_messages(&mut self, limit: u32) -> Result<Vec<ContactMessage>, AppError>;
}

#[async_trait]
impl MessageRepository for SqlxStore {
    async fn insert_message(&mut self, msg: &ContactMessageInsert) -> Result<i64, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO messages (name, email, message, created_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&msg.name)
        .bind(&msg.email)
        .bind(&msg.message)
        .bind(&msg.created_at)
        .execute(self.conn())
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn list_recent_messages(&mut self, limit: u32) -> Result<Vec<ContactMessage>, AppError> {
        let messages = sqlx::query_as::<_, ContactMessage>(
            r#"
            SELECT id, name, email, message, created_at
            FROM messages
            ORDER BY id DESC
            LIMIT ?
            "#,
        )
        .bind(i64::from(limit))
        .fetch_all(self.conn())
        .await?;

        Ok(messages)
    }
}
