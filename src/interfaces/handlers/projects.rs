use actix_web::{web, HttpResponse};
use tracing::instrument;

use crate::{
    constants::FLASH_PROJECT_ADDED,
    entities::project::NewProjectForm,
    errors::AppError,
    handlers::html::{form_or_empty, found, html_page, queue_flash, see_other},
    repositories::sqlx_repo::SqlxStore,
    use_cases::{extractors::Session, projects::ProjectsHandler},
    views::projects::{ProjectDetailPage, ProjectsPage},
    AppState,
};

#[instrument(skip(state, store, session))]
pub async fn list_projects(
    state: web::Data<AppState>,
    mut store: SqlxStore,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let projects = ProjectsHandler::new(&mut store).all_projects().await?;

    Ok(html_page(&state, &session, &ProjectsPage { projects: &projects }))
}

#[instrument(skip(state, store, session, form))]
pub async fn add_project(
    state: web::Data<AppState>,
    mut store: SqlxStore,
    session: Session,
    form: Option<web::Form<NewProjectForm>>,
) -> Result<HttpResponse, AppError> {
    let id = ProjectsHandler::new(&mut store)
        .create_project(form_or_empty(form))
        .await?;

    tracing::info!(project_id = id, "Project added");
    queue_flash(&state, &session, FLASH_PROJECT_ADDED);

    Ok(see_other("/projects"))
}

#[instrument(skip(state, store, session))]
pub async fn project_detail(
    project_id: web::Path<u32>,
    state: web::Data<AppState>,
    mut store: SqlxStore,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let project = ProjectsHandler::new(&mut store)
        .get_project(i64::from(project_id.into_inner()))
        .await?;

    match project {
        Some(project) => Ok(html_page(&state, &session, &ProjectDetailPage { project: &project })),
        None => Ok(found("/projects")),
    }
}
