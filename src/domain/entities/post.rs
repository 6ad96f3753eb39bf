use serde::Deserialize;

use crate::entities::timestamp::now_timestamp;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NewPostForm {
    pub title: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PostInsert {
    pub title: String,
    pub content: Option<String>,
    pub created_at: String,
}

impl PostInsert {
    pub fn new(form: NewPostForm, created_at: String) -> Self {
        PostInsert {
            title: form.title.unwrap_or_default(),
            content: form.content,
            created_at,
        }
    }

    pub fn sample() -> Self {
        PostInsert {
            title: "Welcome to my blog".to_string(),
            content: Some(
                "Đây là bài viết đầu tiên trên blog của tôi. Viết gì đó thú vị ở đây!".to_string(),
            ),
            created_at: now_timestamp(),
        }
    }
}

impl From<NewPostForm> for PostInsert {
    fn from(form: NewPostForm) -> Self {
        PostInsert::new(form, now_timestamp())
    }
}
