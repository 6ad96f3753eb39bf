use serde::Deserialize;

use crate::entities::timestamp::now_timestamp;

/// A contact-form submission. Every field except the id may be null.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ContactMessage {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactMessageInsert {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
    pub created_at: String,
}

impl From<ContactForm> for ContactMessageInsert {
    fn from(form: ContactForm) -> Self {
        ContactMessageInsert {
            name: form.name,
            email: form.email,
            message: form.message,
            created_at: now_timestamp(),
        }
    }
}
