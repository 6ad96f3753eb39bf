use crate::{
    constants::HOME_RECENT_LIMIT,
    entities::post::{NewPostForm, Post, PostInsert},
    errors::AppError,
    repositories::post::PostRepository,
};

pub struct BlogHandler<'r, R>
where
    R: PostRepository,
{
    pub post_repo: &'r mut R,
}

impl<'r, R> BlogHandler<'r, R>
where
    R: PostRepository,
{
    pub fn new(post_repo: &'r mut R) -> Self {
        BlogHandler { post_repo }
    }

    pub async fn recent_posts(&mut self) -> Result<Vec<Post>, AppError> {
        self.post_repo.list_posts(Some(HOME_RECENT_LIMIT)).await
    }

    pub async fn all_posts(&mut self) -> Result<Vec<Post>, AppError> {
        self.post_repo.list_posts(None).await
    }

    pub async fn get_post(&mut self, id: i64) -> Result<Option<Post>, AppError> {
        self.post_repo.get_post(id).await
    }

    pub async fn create_post(&mut self, form: NewPostForm) -> Result<i64, AppError> {
        let insert = PostInsert::from(form);
        self.post_repo.insert_post(&insert).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::{mock, predicate::eq};

    mock! {
        pub PostRepo {}

        #[async_trait]
        impl PostRepository for PostRepo {
            async fn list_posts(&mut self, limit: Option<u32>) -> Result<Vec<Post>, AppError>;
            async fn get_post(&mut self, id: i64) -> Result<Option<Post>, AppError>;
            async fn insert_post(&mut self, post: &PostInsert) -> Result<i64, AppError>;
            async fn count_posts(&mut self) -> Result<i64, AppError>;
        }
    }

    #[actix_rt::test]
    async fn recent_posts_use_home_limit() {
        let mut repo = MockPostRepo::new();
        repo.expect_list_posts()
            .with(eq(Some(3)))
            .times(1)
            .returning(|_| Ok(vec![]));

        assert!(BlogHandler::new(&mut repo).recent_posts().await.is_ok());
    }

    #[actix_rt::test]
    async fn create_passes_title_and_content_through() {
        let mut repo = MockPostRepo::new();
        repo.expect_insert_post()
            .withf(|p: &PostInsert| p.title == "Hello" && p.content.as_deref() == Some("World"))
            .times(1)
            .returning(|_| Ok(2));

        let form = NewPostForm {
            title: Some("Hello".into()),
            content: Some("World".into()),
        };

        assert_eq!(BlogHandler::new(&mut repo).create_post(form).await.unwrap(), 2);
    }

    #[actix_rt::test]
    async fn get_post_returns_row() {
        let mut repo = MockPostRepo::new();
        repo.expect_get_post().with(eq(5)).returning(|id| {
            Ok(Some(Post {
                id,
                title: "Found".into(),
                content: None,
                created_at: None,
            }))
        });

        let post = BlogHandler::new(&mut repo).get_post(5).await.unwrap().unwrap();

        assert_eq!(post.id, 5);
        assert_eq!(post.title, "Found");
    }
}
