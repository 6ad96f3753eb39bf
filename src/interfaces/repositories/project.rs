use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite};

use crate::{
    entities::project::{Project, ProjectInsert},
    errors::AppError,
    repositories::sqlx_repo::SqlxStore,
};

#[async_trait]
pub trait ProjectRepository: Send {
    /// Newest first. `None` returns every row.
    async fn list_projects(&mut self, limit: Option<u32>) -> Result<Vec<Project>, AppError>;
    async fn get_project(&mut self, id: i64) -> Result<Option<Project>, AppError>;
    async fn insert_project(&mut self, project: &ProjectInsert) -> Result<i64, AppError>;
    async fn count_projects(&mut self) -> Result<i64, AppError>;
}

#[async_trait]
impl ProjectRepository for SqlxStore {
    async fn list_projects(&mut self, limit: Option<u32>) -> Result<Vec<Project>, AppError> {
        let mut builder = QueryBuilder::<Sqlite>::new(
            "SELECT id, title, description, details, url, created_at FROM projects ORDER BY id DESC",
        );

        if let Some(limit) = limit {
            builder.push(" LIMIT ").push_bind(i64::from(limit));
        }

        let projects = builder
            .build_query_as::<Project>()
            .fetch_all(self.conn())
            .await?;

        Ok(projects)
    }

    async fn get_project(&mut self, id: i64) -> Result<Option<Project>, AppError> {
        let project = sqlx::query_as::<_, Project>(
            r#"
            SELECT id, title, description, details, url, created_at
            FROM projects
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.conn())
        .await?;

        Ok(project)
    }

    async fn insert_project(&mut self, project: &ProjectInsert) -> Result<i64, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO projects (title, description, details, url, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.details)
        .bind(&project.url)
        .bind(&project.created_at)
        .execute(self.conn())
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn count_projects(&mut self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM projects")
            .fetch_one(self.conn())
            .await?;

        Ok(count)
    }
}
