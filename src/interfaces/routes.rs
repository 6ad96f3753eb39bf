use actix_web::web;

mod blog;
mod contact;
mod pages;
mod projects;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(pages::config_routes)
        .configure(projects::config_routes)
        .configure(blog::config_routes)
        .configure(contact::config_routes);
}
