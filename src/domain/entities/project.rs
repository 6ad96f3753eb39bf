use serde::Deserialize;

use crate::entities::timestamp::now_timestamp;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub details: Option<String>,
    pub url: Option<String>,
    pub created_at: Option<String>,
}

/// Fields posted by the "add project" form. Any of them may be missing.
#[derive(Debug, Default, Deserialize)]
pub struct NewProjectForm {
    pub title: Option<String>,
    pub description: Option<String>,
    pub details: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectInsert {
    pub title: String,
    pub description: Option<String>,
    pub details: Option<String>,
    pub url: Option<String>,
    pub created_at: String,
}

impl ProjectInsert {
    pub fn new(form: NewProjectForm, created_at: String) -> Self {
        ProjectInsert {
            // `title` is NOT NULL; a missing field is stored as "".
            title: form.title.unwrap_or_default(),
            description: form.description,
            details: form.details,
            url: form.url,
            created_at,
        }
    }

    pub fn sample() -> Self {
        ProjectInsert {
            title: "Sample Project".to_string(),
            description: Some("Một dự án ví dụ".to_string()),
            details: Some("Chi tiết dự án ví dụ: sử dụng Actix Web + SQLite".to_string()),
            url: Some("https://example.com".to_string()),
            created_at: now_timestamp(),
        }
    }
}

impl From<NewProjectForm> for ProjectInsert {
    fn from(form: NewProjectForm) -> Self {
        ProjectInsert::new(form, now_timestamp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_title_becomes_empty_and_optionals_stay_null() {
        let insert = ProjectInsert::new(NewProjectForm::default(), "2024-01-01T00:00:00.000000".into());

        assert_eq!(insert.title, "");
        assert_eq!(insert.description, None);
        assert_eq!(insert.details, None);
        assert_eq!(insert.url, None);
    }

    #[test]
    fn present_empty_fields_are_kept_as_given() {
        let form = NewProjectForm {
            title: Some("Site".into()),
            description: Some(String::new()),
            details: None,
            url: Some(String::new()),
        };

        let insert = ProjectInsert::from(form);

        assert_eq!(insert.title, "Site");
        assert_eq!(insert.description.as_deref(), Some(""));
        assert_eq!(insert.url.as_deref(), Some(""));
        assert_eq!(insert.created_at.len(), "2024-01-01T00:00:00.000000".len());
    }
}
