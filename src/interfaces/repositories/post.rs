use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite};

use crate::{
    entities::post::{Post, PostInsert},
    errors::AppError,
    repositories::sqlx_repo::SqlxStore,
};

#[async_trait]
pub trait PostRepository: Send {
    async fn list_posts(&mut self, limit: Option<u32>) -> Result<Vec<Post>, AppError>;
    async fn get_post(&mut self, id: i64) -> Result<Option<Post>, AppError>;
    async fn insert_post(&mut self, post: &PostInsert) -> Result<i64, AppError>;
    async fn count_posts(&mut self) -> Result<i64, AppError>;
}

#[async_trait]
impl PostRepository for SqlxStore {
    async fn list_posts(&mut self, limit: Option<u32>) -> Result<Vec<Post>, AppError> {
        let mut builder =
            QueryBuilder::<Sqlite>::new("SELECT id, title, content, created_at FROM posts ORDER BY id DESC");

        if let Some(limit) = limit {
            builder.push(" LIMIT ").push_bind(i64::from(limit));
        }

        let posts = builder
            .build_query_as::<Post>()
            .fetch_all(self.conn())
            .await?;

        Ok(posts)
    }

    async fn get_post(&mut self, id: i64) -> Result<Option<Post>, AppError> {
        let post = sqlx::query_as::<_, Post>(
            "SELECT id, title, content, created_at FROM posts WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.conn())
        .await?;

        Ok(post)
    }

    async fn insert_post(&mut self, post: &PostInsert) -> Result<i64, AppError> {
        let result = sqlx::query("INSERT INTO posts (title, content, created_at) VALUES (?, ?, ?)")
            .bind(&post.title)
            .bind(&post.content)
            .bind(&post.created_at)
            .execute(self.conn())
            .await?;

        Ok(result.last_insert_rowid())
    }

    async fn count_posts(&mut self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts")
            .fetch_one(self.conn())
            .await?;

        Ok(count)
    }
}
