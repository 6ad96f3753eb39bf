use crate::{
    constants::HOME_RECENT_LIMIT,
    entities::project::{NewProjectForm, Project, ProjectInsert},
    errors::AppError,
    repositories::project::ProjectRepository,
};

pub struct ProjectsHandler<'r, R>
where
    R: ProjectRepository,
{
    pub project_repo: &'r mut R,
}

impl<'r, R> ProjectsHandler<'r, R>
where
    R: ProjectRepository,
{
    pub fn new(project_repo: &'r mut R) -> Self {
        ProjectsHandler { project_repo }
    }

    /// The newest projects shown on the home page
    pub async fn recent_projects(&mut self) -> Result<Vec<Project>, AppError> {
        self.project_repo.list_projects(Some(HOME_RECENT_LIMIT)).await
    }

    /// Every project, newest first
    pub async fn all_projects(&mut self) -> Result<Vec<Project>, AppError> {
        self.project_repo.list_projects(None).await
    }

    pub async fn get_project(&mut self, id: i64) -> Result<Option<Project>, AppError> {
        self.project_repo.get_project(id).await
    }

    /// Stores the submitted form as-is and returns the new id
    pub async fn create_project(&mut self, form: NewProjectForm) -> Result<i64, AppError> {
        let insert = ProjectInsert::from(form);
        self.project_repo.insert_project(&insert).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::{mock, predicate::eq};

    mock! {
        pub ProjectRepo {}

        #[async_trait]
        impl ProjectRepository for ProjectRepo {
            async fn list_projects(&mut self, limit: Option<u32>) -> Result<Vec<Project>, AppError>;
            async fn get_project(&mut self, id: i64) -> Result<Option<Project>, AppError>;
            async fn insert_project(&mut self, project: &ProjectInsert) -> Result<i64, AppError>;
            async fn count_projects(&mut self) -> Result<i64, AppError>;
        }
    }

    #[actix_rt::test]
    async fn recent_projects_are_capped_for_home_page() {
        let mut repo = MockProjectRepo::new();
        repo.expect_list_projects()
            .with(eq(Some(3)))
            .times(1)
            .returning(|_| Ok(vec![]));

        let result = ProjectsHandler::new(&mut repo).recent_projects().await;

        assert!(result.unwrap().is_empty());
    }

    #[actix_rt::test]
    async fn full_listing_has_no_limit() {
        let mut repo = MockProjectRepo::new();
        repo.expect_list_projects()
            .with(eq(None))
            .times(1)
            .returning(|_| Ok(vec![]));

        assert!(ProjectsHandler::new(&mut repo).all_projects().await.is_ok());
    }

    #[actix_rt::test]
    async fn create_stores_missing_fields_without_failing() {
        let mut repo = MockProjectRepo::new();
        repo.expect_insert_project()
            .withf(|p: &ProjectInsert| {
                p.title.is_empty()
                    && p.description.is_none()
                    && p.details.is_none()
                    && p.url.is_none()
                    && !p.created_at.is_empty()
            })
            .times(1)
            .returning(|_| Ok(42));

        let id = ProjectsHandler::new(&mut repo)
            .create_project(NewProjectForm::default())
            .await
            .unwrap();

        assert_eq!(id, 42);
    }

    #[actix_rt::test]
    async fn missing_project_is_none_not_error() {
        let mut repo = MockProjectRepo::new();
        repo.expect_get_project()
            .with(eq(99))
            .returning(|_| Ok(None));

        let found = ProjectsHandler::new(&mut repo).get_project(99).await.unwrap();

        assert!(found.is_none());
    }

    #[actix_rt::test]
    async fn store_failure_propagates() {
        let mut repo = MockProjectRepo::new();
        repo.expect_list_projects()
            .returning(|_| Err(AppError::StoreUnavailable("disk gone".into())));

        let result = ProjectsHandler::new(&mut repo).all_projects().await;

        assert!(matches!(result, Err(AppError::StoreUnavailable(_))));
    }
}
