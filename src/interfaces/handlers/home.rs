use actix_web::{web, HttpResponse};
use tracing::instrument;

use crate::{
    errors::AppError,
    handlers::html::html_page,
    repositories::sqlx_repo::SqlxStore,
    use_cases::{blog::BlogHandler, extractors::Session, projects::ProjectsHandler},
    views::home::HomePage,
    AppState,
};

#[instrument(skip(state, store, session))]
pub async fn home(
    state: web::Data<AppState>,
    mut store: SqlxStore,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let projects = ProjectsHandler::new(&mut store).recent_projects().await?;
    let posts = BlogHandler::new(&mut store).recent_posts().await?;

    let page = HomePage {
        owner: &state.site_owner,
        projects: &projects,
        posts: &posts,
    };

    Ok(html_page(&state, &session, &page))
}
