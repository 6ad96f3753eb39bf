use actix_web::web;

use crate::handlers::{home, pages};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(home::home)))
        .service(web::resource("/about").route(web::get().to(pages::about)))
        .service(web::resource("/hobbies").route(web::get().to(pages::hobbies)));
}
