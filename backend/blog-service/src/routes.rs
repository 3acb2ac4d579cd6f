/// Route definitions
///
/// One configure function shared by the server bootstrap and the tests.
/// The post read endpoints are anonymous; mutations require a bearer token
/// via the `AuthenticatedUser` guard on their handlers.
use actix_web::web;

use crate::handlers;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(handlers::health)).service(
        web::scope("/api")
            .service(
                web::scope("/auth")
                    .route("/register", web::post().to(handlers::auth::register))
                    .route("/login", web::post().to(handlers::auth::login)),
            )
            .service(
                web::scope("/post")
                    .service(
                        web::resource("")
                            .route(web::get().to(handlers::posts::list_posts))
                            .route(web::post().to(handlers::posts::create_post)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(handlers::posts::get_post))
                            .route(web::put().to(handlers::posts::replace_post))
                            .route(web::delete().to(handlers::posts::delete_post)),
                    ),
            ),
    );
}
