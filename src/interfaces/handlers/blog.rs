use actix_web::{web, HttpResponse};
use tracing::instrument;

use crate::{
    constants::FLASH_POST_ADDED,
    entities::post::NewPostForm,
    errors::AppError,
    handlers::html::{form_or_empty, found, html_page, queue_flash, see_other},
    repositories::sqlx_repo::SqlxStore,
    use_cases::{blog::BlogHandler, extractors::Session},
    views::blog::{BlogPage, PostDetailPage},
    AppState,
};

#[instrument(skip(state, store, session))]
pub async fn list_posts(
    state: web::Data<AppState>,
    mut store: SqlxStore,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let posts = BlogHandler::new(&mut store).all_posts().await?;

    Ok(html_page(&state, &session, &BlogPage { posts: &posts }))
}

#[instrument(skip(state, store, session, form))]
pub async fn add_post(
    state: web::Data<AppState>,
    mut store: SqlxStore,
    session: Session,
    form: Option<web::Form<NewPostForm>>,
) -> Result<HttpResponse, AppError> {
    let id = BlogHandler::new(&mut store).create_post(form_or_empty(form)).await?;

    tracing::info!(post_id = id, "Post added");
    queue_flash(&state, &session, FLASH_POST_ADDED);

    Ok(see_other("/blog"))
}

#[instrument(skip(state, store, session))]
pub async fn post_detail(
    post_id: web::Path<u32>,
    state: web::Data<AppState>,
    mut store: SqlxStore,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let post = BlogHandler::new(&mut store)
        .get_post(i64::from(post_id.into_inner()))
        .await?;

    match post {
        Some(post) => Ok(html_page(&state, &session, &PostDetailPage { post: &post })),
        None => Ok(found("/blog")),
    }
}
