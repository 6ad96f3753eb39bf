use actix_web::web;

use crate::handlers::contact;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/contact")
            .route(web::get().to(contact::contact_page))
            .route(web::post().to(contact::submit_contact))
    );
}
