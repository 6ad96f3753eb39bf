use actix_web::{web, HttpResponse};
use tracing::instrument;

use crate::{
    constants::FLASH_MESSAGE_RECEIVED,
    entities::message::ContactForm,
    errors::AppError,
    handlers::html::{form_or_empty, html_page, queue_flash, see_other},
    repositories::sqlx_repo::SqlxStore,
    use_cases::{contact::ContactHandler, extractors::Session},
    views::contact::ContactPage,
    AppState,
};

#[instrument(skip(state, store, session))]
pub async fn contact_page(
    state: web::Data<AppState>,
    mut store: SqlxStore,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let messages = ContactHandler::new(&mut store).recent_messages().await?;

    Ok(html_page(&state, &session, &ContactPage { messages: &messages }))
}

#[instrument(skip(state, store, session, form))]
pub async fn submit_contact(
    state: web::Data<AppState>,
    mut store: SqlxStore,
    session: Session,
    form: Option<web::Form<ContactForm>>,
) -> Result<HttpResponse, AppError> {
    let id = ContactHandler::new(&mut store)
        .submit_message(form_or_empty(form))
        .await?;

    tracing::info!(message_id = id, "Contact message received");
    queue_flash(&state, &session, FLASH_MESSAGE_RECEIVED);

    Ok(see_other("/contact"))
}
