use crate::{
    constants::CONTACT_RECENT_LIMIT,
    entities::message::{ContactForm, ContactMessage, ContactMessageInsert},
    errors::AppError,
    repositories::message::MessageRepository,
};

pub struct ContactHandler<'r, R>
where
    R: MessageRepository,
{
    pub message_repo: &'r mut R,
}

impl<'r, R> ContactHandler<'r, R>
where
    R: MessageRepository,
{
    pub fn new(message_repo: &'r mut R) -> Self {
        ContactHandler { message_repo }
    }

    /// Records a contact-form submission. Nothing is validated.
    pub async fn submit_message(&mut self, form: ContactForm) -> Result<i64, AppError> {
        let insert = ContactMessageInsert::from(form);
        self.message_repo.insert_message(&insert).await
    }

    /// The latest messages, newest first
    pub async fn recent_messages(&mut self) -> Result<Vec<ContactMessage>, AppError> {
        self.message_repo.list_recent_messages(CONTACT_RECENT_LIMIT).await
    }
}
