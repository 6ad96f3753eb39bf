use actix_web::{web, HttpResponse};
use tracing::instrument;

use crate::{
    entities::hobby::HOBBIES,
    handlers::html::html_page,
    use_cases::extractors::Session,
    views::pages::{AboutPage, HobbiesPage},
    AppState,
};

#[instrument(skip(state, session))]
pub async fn about(state: web::Data<AppState>, session: Session) -> HttpResponse {
    html_page(&state, &session, &AboutPage)
}

#[instrument(skip(state, session))]
pub async fn hobbies(state: web::Data<AppState>, session: Session) -> HttpResponse {
    html_page(&state, &session, &HobbiesPage { hobbies: &HOBBIES })
}
