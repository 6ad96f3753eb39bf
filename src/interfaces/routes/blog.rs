use actix_web::web;

use crate::handlers::blog;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/blog")
            .service(
                web::resource("")
                    .route(web::get().to(blog::list_posts))
            )
            .service(
                web::resource("/add")
                    .route(web::post().to(blog::add_post))
            )
            .service(
                web::resource("/{post_id}")
                    .route(web::get().to(blog::post_detail))
            )
    );
}
