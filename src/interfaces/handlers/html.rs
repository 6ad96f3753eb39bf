use actix_web::{
    http::header::{self, ContentType},
    web, HttpResponse,
};
use chrono::{Datelike, Utc};

use crate::{
    use_cases::extractors::Session,
    views::{render_page, Layout, Template},
    AppState,
};

/// Renders `page` inside the site shell, consuming the session's pending flash.
pub fn html_page(state: &AppState, session: &Session, page: &impl Template) -> HttpResponse {
    let flash = state.flash.take(session.id());
    let layout = Layout {
        owner: &state.site_owner,
        flash: flash.as_deref(),
        year: Utc::now().year(),
    };

    HttpResponse::Ok()
        .insert_header(ContentType::html())
        .body(render_page(&layout, page))
}

/// Queues `message` for the session's next page. A session minted for this
/// very request has no cookie to come back with, so nothing is queued.
pub fn queue_flash(state: &AppState, session: &Session, message: &str) {
    if session.is_new() {
        tracing::debug!("No session cookie on write, flash not queued");
        return;
    }

    state.flash.push(session.id(), message);
}

/// Post/redirect/get target after a successful write.
pub fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Redirect used when a detail page's id does not resolve.
pub fn found(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Unreadable or absent form bodies count as an empty submission.
pub fn form_or_empty<T: Default>(form: Option<web::Form<T>>) -> T {
    form.map(web::Form::into_inner).unwrap_or_default()
}
